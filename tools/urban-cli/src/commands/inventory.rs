//! Stock levels report.

use anyhow::Result;
use clap::Args;
use urban_commerce::catalog::{InventoryReport, LOW_STOCK_THRESHOLD};

use crate::context::Context;

/// Arguments for `urban inventory`.
#[derive(Args)]
pub struct InventoryArgs {}

pub fn run(_args: InventoryArgs, ctx: &Context) -> Result<()> {
    let report = InventoryReport::analyze(&ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Análisis de inventario");
    ctx.output.kv("Productos", &report.total_products.to_string());
    ctx.output.kv("Stock total", &report.total_stock.to_string());
    ctx.output.kv("Promedio por producto", &report.average_stock.to_string());

    if report.low_stock.is_empty() {
        ctx.output.success("Ningún producto con stock bajo");
    } else {
        ctx.output.warn(&format!(
            "Stock bajo (menos de {} unidades):",
            LOW_STOCK_THRESHOLD
        ));
        for name in &report.low_stock {
            ctx.output.list_item(name);
        }
    }

    Ok(())
}
