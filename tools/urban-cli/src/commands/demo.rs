//! Scripted end-to-end session: browse, fill the cart, apply coupons,
//! assess payment, and check out.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use std::time::Duration;
use urban_commerce::checkout::{assess_payment, checkout, LoyaltyLedger, OrderSequence, PaymentMethod};
use urban_commerce::ids::ProductId;
use urban_commerce::search::{CategoryFilter, FilterCriteria, QueryResults, SortKey};

use crate::commands::render_cart;
use crate::context::Context;

const TOTAL_STEPS: usize = 5;

/// Arguments for `urban demo`.
#[derive(Args)]
pub struct DemoArgs {}

pub fn run(_args: DemoArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("la demo no soporta salida JSON");
    }

    let output = &ctx.output;
    let mut cart = ctx.new_cart();
    let mut orders = OrderSequence::new();
    let mut loyalty = LoyaltyLedger::new();

    output.header(&format!(
        "{} — sesión de demostración",
        ctx.config.store.name
    ));

    output.step(1, TOTAL_STEPS, "Ofertas del día, de menor a mayor precio");
    let criteria = FilterCriteria::new().with_category(CategoryFilter::Deals);
    let deals = QueryResults::run(ctx.catalog.products(), &criteria, SortKey::PriceLow);
    for product in &deals.items {
        output.list_item(&product.display_line());
    }

    output.step(2, TOTAL_STEPS, "Agregando productos al carrito");
    let sneakers = ctx
        .catalog
        .get(ProductId::new(1))
        .context("producto 1 no está en el catálogo")?;
    let cap = ctx
        .catalog
        .get(ProductId::new(11))
        .context("producto 11 no está en el catálogo")?;

    cart.add_item(sneakers, 1, Some("42"), Some("negro"))?;
    // Same key again: the line merges instead of duplicating.
    cart.add_item(sneakers, 1, Some("42"), Some("negro"))?;
    cart.add_item(cap, 1, None, Some("negro"))?;
    output.success(&format!("{} agregado al carrito (x2)", sneakers.name()));
    output.success(&format!("{} agregado al carrito", cap.name()));
    render_cart(&cart, output);

    output.step(3, TOTAL_STEPS, "Aplicando cupones");
    let rejected = cart.apply_coupon(&ctx.coupons, "URBAN50");
    output.error(&rejected.message);
    let applied = cart.apply_coupon(&ctx.coupons, "DESCUENTO10");
    output.success(&applied.message);
    render_cart(&cart, output);

    output.step(4, TOTAL_STEPS, "Evaluando el método de pago");
    let assessment = assess_payment(PaymentMethod::Cash, cart.total());
    output.info(&assessment.message);

    output.step(5, TOTAL_STEPS, "Finalizando la compra");
    let spinner = output.spinner("Procesando pago...");
    std::thread::sleep(Duration::from_millis(600));
    spinner.finish_and_clear();

    let receipt =
        checkout(&mut cart, &mut orders, &mut loyalty).context("el carrito no debería estar vacío")?;
    output.success("¡Gracias por tu compra! Recibirás un email con los detalles.");
    output.kv("Orden", &receipt.order_number);
    output.kv("Total", &receipt.total.to_string());
    output.kv("Puntos ganados", &receipt.points_earned.to_string());
    output.kv("Puntos acumulados", &receipt.points_balance.to_string());

    Ok(())
}
