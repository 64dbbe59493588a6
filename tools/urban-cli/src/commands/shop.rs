//! Interactive shopping session.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::time::Duration;
use urban_commerce::cart::Cart;
use urban_commerce::checkout::{
    assess_payment, checkout, LoyaltyLedger, OrderSequence, PaymentMethod,
};

use crate::commands::render_cart;
use crate::context::Context;
use crate::output::{stock_badge, Output};

/// Arguments for `urban shop`.
#[derive(Args)]
pub struct ShopArgs {}

const MENU: [&str; 7] = [
    "Ver productos",
    "Agregar al carrito",
    "Ver carrito",
    "Aplicar cupón",
    "Quitar producto",
    "Finalizar compra",
    "Salir",
];

pub fn run(_args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("el modo interactivo no soporta salida JSON");
    }

    let output = &ctx.output;
    let theme = ColorfulTheme::default();
    let mut cart = ctx.new_cart();
    let mut orders = OrderSequence::new();
    let mut loyalty = LoyaltyLedger::new();

    output.header(&format!("Bienvenido a {}", ctx.config.store.name));

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("¿Qué deseas hacer?")
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                for product in ctx.catalog.iter() {
                    output.list_item(&format!(
                        "#{:<2} {} — {}",
                        product.id(),
                        product.display_line(),
                        stock_badge(product.stock())
                    ));
                }
            }
            1 => add_to_cart(ctx, &theme, &mut cart)?,
            2 => render_cart(&cart, output),
            3 => apply_coupon(ctx, &theme, &mut cart)?,
            4 => remove_from_cart(&theme, &mut cart, output)?,
            5 => {
                if finalize(ctx, &theme, &mut cart, &mut orders, &mut loyalty)? {
                    break;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

fn add_to_cart(ctx: &Context, theme: &ColorfulTheme, cart: &mut Cart) -> Result<()> {
    let output = &ctx.output;

    let labels: Vec<String> = ctx.catalog.iter().map(|p| p.display_line()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Producto")
        .items(&labels)
        .default(0)
        .interact()?;
    let product = &ctx.catalog.products()[idx];

    let size = if product.sizes.is_empty() {
        None
    } else {
        let i = Select::with_theme(theme)
            .with_prompt("Talla")
            .items(&product.sizes)
            .default(0)
            .interact()?;
        Some(product.sizes[i].clone())
    };

    let color = if product.colors.is_empty() {
        None
    } else {
        let i = Select::with_theme(theme)
            .with_prompt("Color")
            .items(&product.colors)
            .default(0)
            .interact()?;
        Some(product.colors[i].clone())
    };

    let quantity: u32 = Input::with_theme(theme)
        .with_prompt("Cantidad")
        .default(1)
        .interact_text()?;

    match cart.add_item(product, quantity, size.as_deref(), color.as_deref()) {
        Ok(()) => output.success(&format!("{} agregado al carrito", product.name())),
        Err(e) => output.error(&e.to_string()),
    }
    Ok(())
}

fn apply_coupon(ctx: &Context, theme: &ColorfulTheme, cart: &mut Cart) -> Result<()> {
    let code: String = Input::with_theme(theme)
        .with_prompt("Código de cupón")
        .interact_text()?;

    let outcome = cart.apply_coupon(&ctx.coupons, &code);
    if outcome.success {
        ctx.output.success(&outcome.message);
    } else {
        ctx.output.error(&outcome.message);
    }
    Ok(())
}

fn remove_from_cart(theme: &ColorfulTheme, cart: &mut Cart, output: &Output) -> Result<()> {
    if cart.is_empty() {
        output.warn("Tu carrito está vacío");
        return Ok(());
    }

    let labels: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| {
            let mut label = format!("{} x{}", line.name(), line.quantity());
            if let Some(size) = line.size() {
                label.push_str(&format!(" | Talla: {size}"));
            }
            if let Some(color) = line.color() {
                label.push_str(&format!(" | Color: {color}"));
            }
            label
        })
        .collect();

    let idx = Select::with_theme(theme)
        .with_prompt("¿Cuál quitamos?")
        .items(&labels)
        .default(0)
        .interact()?;

    let (id, size, color) = {
        let line = &cart.lines()[idx];
        (
            line.product_id(),
            line.size().map(str::to_string),
            line.color().map(str::to_string),
        )
    };
    cart.remove_item(id, size.as_deref(), color.as_deref());
    output.success("Producto eliminado del carrito");
    Ok(())
}

fn finalize(
    ctx: &Context,
    theme: &ColorfulTheme,
    cart: &mut Cart,
    orders: &mut OrderSequence,
    loyalty: &mut LoyaltyLedger,
) -> Result<bool> {
    let output = &ctx.output;

    if cart.is_empty() {
        output.error("Tu carrito está vacío");
        return Ok(false);
    }

    render_cart(cart, output);

    let methods: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Método de pago")
        .items(&methods)
        .default(0)
        .interact()?;
    let method = PaymentMethod::ALL[idx];

    let assessment = assess_payment(method, cart.total());
    output.info(&assessment.message);

    let spinner = output.spinner("Procesando pago...");
    std::thread::sleep(Duration::from_millis(600));
    spinner.finish_and_clear();

    let receipt = checkout(cart, orders, loyalty).context("el carrito no debería estar vacío")?;
    output.success("¡Gracias por tu compra! Recibirás un email con los detalles.");
    output.kv("Orden", &receipt.order_number);
    output.kv("Total", &receipt.total.to_string());
    output.kv("Puntos ganados", &receipt.points_earned.to_string());
    output.kv("Puntos acumulados", &receipt.points_balance.to_string());
    Ok(true)
}
