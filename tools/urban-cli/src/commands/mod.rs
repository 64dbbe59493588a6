//! CLI commands.

pub mod browse;
pub mod config;
pub mod coupons;
pub mod demo;
pub mod inventory;
pub mod shop;

pub use browse::BrowseArgs;
pub use config::ConfigArgs;
pub use coupons::CouponsArgs;
pub use demo::DemoArgs;
pub use inventory::InventoryArgs;
pub use shop::ShopArgs;

use urban_commerce::cart::Cart;

use crate::output::Output;

/// Render the cart lines and totals, the way the store's summary panel does.
pub(crate) fn render_cart(cart: &Cart, output: &Output) {
    if cart.is_empty() {
        output.info("Tu carrito está vacío");
        return;
    }

    for line in cart.lines() {
        let mut detail = format!(
            "{} x{} — {}",
            line.name(),
            line.quantity(),
            line.line_total()
        );
        if let Some(size) = line.size() {
            detail.push_str(&format!(" | Talla: {size}"));
        }
        if let Some(color) = line.color() {
            detail.push_str(&format!(" | Color: {color}"));
        }
        output.list_item(&detail);
    }

    let totals = cart.totals();
    output.kv("Subtotal", &totals.subtotal.to_string());
    output.kv("Descuento", &format!("- {}", totals.discount_total));
    let shipping = if totals.shipping_total.is_zero() {
        "GRATIS".to_string()
    } else {
        totals.shipping_total.to_string()
    };
    output.kv("Envío", &shipping);
    output.kv("Total", &totals.grand_total.to_string());
}
