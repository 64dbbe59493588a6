//! Browse the catalog with filters and sorting.

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use urban_commerce::money::{Currency, Money};
use urban_commerce::search::{CategoryFilter, FilterCriteria, QueryResults, SortKey};

use crate::context::Context;
use crate::output::stock_badge;

/// Arguments for `urban browse`.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category: todos, ofertas, zapatos, ropa, accesorios
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Maximum final price, in soles
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only products offering this size (e.g. 42, M)
    #[arg(long)]
    pub size: Option<String>,

    /// Only products offering this color (e.g. negro)
    #[arg(long)]
    pub color: Option<String>,

    /// Search term over name, description, and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort: default, price-low, price-high, name, rating
    #[arg(long)]
    pub sort: Option<String>,
}

pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut criteria = FilterCriteria::new();

    if let Some(selector) = &args.category {
        match CategoryFilter::parse(selector) {
            Some(category) => criteria.category = category,
            None => bail!("categoría desconocida: {selector}"),
        }
    }
    if let Some(max) = args.max_price.or(ctx.config.browse.max_price) {
        criteria.max_price = Some(Money::from_decimal(max, Currency::PEN));
    }
    if let Some(size) = &args.size {
        criteria.size = Some(size.clone());
    }
    if let Some(color) = &args.color {
        criteria.color = Some(color.clone());
    }
    if let Some(term) = &args.search {
        criteria.search = Some(term.clone());
    }

    let sort_key = SortKey::from_str(
        args.sort
            .as_deref()
            .unwrap_or(&ctx.config.browse.default_sort),
    );
    ctx.output.debug(&format!("orden: {}", sort_key.as_str()));

    let results = QueryResults::run(ctx.catalog.products(), &criteria, sort_key);

    if ctx.output.is_json() {
        ctx.output.json(&results.items);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.warn("Sin resultados para los filtros elegidos");
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} — {} productos ({})",
        ctx.config.store.name,
        results.len(),
        sort_key.display_name()
    ));

    for product in &results.items {
        let badge = if product.is_new {
            style(" [Nuevo]").cyan().to_string()
        } else if product.is_on_sale() {
            style(format!(" [-{}%]", product.discount_percent))
                .magenta()
                .to_string()
        } else {
            String::new()
        };

        let price = if product.is_on_sale() {
            format!(
                "{} {}",
                product.final_price(),
                style(format!("(antes {})", product.base_price())).dim()
            )
        } else {
            product.final_price().to_string()
        };

        ctx.output.list_item(&format!(
            "#{:<2} {} {}{} — {} {} {}",
            product.id(),
            product.category.icon(),
            product.name(),
            badge,
            price,
            product.rating_stars(),
            stock_badge(product.stock())
        ));
    }

    let facets: Vec<String> = results
        .facets
        .iter()
        .map(|f| format!("{} {}", f.category.display_name(), f.count))
        .collect();
    ctx.output.kv("Categorías", &facets.join(", "));

    Ok(())
}
