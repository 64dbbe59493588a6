//! List available coupons.

use anyhow::Result;
use clap::Args;
use console::style;
use urban_commerce::cart::Coupon;

use crate::context::Context;

/// Arguments for `urban coupons`.
#[derive(Args)]
pub struct CouponsArgs {}

pub fn run(_args: CouponsArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let coupons: Vec<&Coupon> = ctx.coupons.iter().collect();
        ctx.output.json(&coupons);
        return Ok(());
    }

    ctx.output.header("Cupones disponibles");
    for coupon in ctx.coupons.iter() {
        let state = if coupon.is_active() {
            style("activo").green().to_string()
        } else {
            style("expirado").red().to_string()
        };
        ctx.output.list_item(&format!(
            "{} — {} ({})",
            style(coupon.code()).bold(),
            benefit(coupon),
            state
        ));
    }

    Ok(())
}

fn benefit(coupon: &Coupon) -> String {
    match (coupon.percent(), coupon.grants_free_shipping()) {
        (Some(pct), true) => format!("{pct}% de descuento + envío gratis"),
        (Some(pct), false) => format!("{pct}% de descuento"),
        (None, true) => "envío gratis".to_string(),
        (None, false) => "sin beneficio".to_string(),
    }
}
