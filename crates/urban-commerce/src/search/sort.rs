//! Sort keys for the catalog query pipeline.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Catalog order, unchanged.
    #[default]
    Default,
    /// Final price, ascending.
    PriceLow,
    /// Final price, descending.
    PriceHigh,
    /// Name, ascending, case-insensitive.
    Name,
    /// Rating, descending.
    Rating,
}

impl SortKey {
    /// Parse a sort key; unrecognized values fall back to `Default`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "name" => SortKey::Name,
            "rating" => SortKey::Rating,
            _ => SortKey::Default,
        }
    }

    /// Stable identifier, the inverse of [`SortKey::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
            SortKey::Rating => "rating",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Relevancia",
            SortKey::PriceLow => "Precio: menor a mayor",
            SortKey::PriceHigh => "Precio: mayor a menor",
            SortKey::Name => "Nombre: A-Z",
            SortKey::Rating => "Mejor valorados",
        }
    }
}

/// Sort a derived product list.
///
/// Takes the list by value (the caller's original sequence is untouched) and
/// sorts stably: products with equal keys keep their relative order. Name
/// comparison is case-insensitive; collation is approximated with Unicode
/// lowercasing rather than full locale tables.
pub fn sort(mut products: Vec<&Product>, key: SortKey) -> Vec<&Product> {
    match key {
        SortKey::Default => {}
        SortKey::PriceLow => {
            products.sort_by_key(|p| p.final_price().amount_cents);
        }
        SortKey::PriceHigh => {
            products.sort_by(|a, b| {
                b.final_price()
                    .amount_cents
                    .cmp(&a.final_price().amount_cents)
            });
        }
        SortKey::Name => {
            products.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
        }
        SortKey::Rating => {
            products.sort_by(|a, b| b.rating.cmp(&a.rating));
        }
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn refs(catalog: &Catalog) -> Vec<&Product> {
        catalog.iter().collect()
    }

    #[test]
    fn test_from_str_fallback() {
        assert_eq!(SortKey::from_str("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::from_str("RATING"), SortKey::Rating);
        assert_eq!(SortKey::from_str("popularity"), SortKey::Default);
        assert_eq!(SortKey::from_str(""), SortKey::Default);
    }

    #[test]
    fn test_default_preserves_order() {
        let catalog = Catalog::demo();
        let sorted = sort(refs(&catalog), SortKey::Default);
        let original: Vec<_> = catalog.iter().map(Product::id).collect();
        let kept: Vec<_> = sorted.iter().map(|p| p.id()).collect();
        assert_eq!(original, kept);
    }

    #[test]
    fn test_price_low_is_ascending_on_final_price() {
        let catalog = Catalog::demo();
        let sorted = sort(refs(&catalog), SortKey::PriceLow);
        for pair in sorted.windows(2) {
            assert!(
                pair[0].final_price().amount_cents <= pair[1].final_price().amount_cents
            );
        }
    }

    #[test]
    fn test_price_high_reverses_price_low_for_distinct_prices() {
        // Hand-built catalog with strictly distinct final prices.
        let catalog = Catalog::new(
            (1..=5)
                .map(|i| {
                    Product::new(
                        ProductId::new(i),
                        format!("Producto {i}"),
                        Money::new(i64::from(i) * 1_000, Currency::PEN),
                        5,
                        Category::Accessory,
                        "img/p.png",
                        "producto",
                    )
                })
                .collect(),
        );

        let low = sort(refs(&catalog), SortKey::PriceLow);
        let high = sort(refs(&catalog), SortKey::PriceHigh);
        let reversed: Vec<_> = low.iter().rev().map(|p| p.id()).collect();
        let high_ids: Vec<_> = high.iter().map(|p| p.id()).collect();
        assert_eq!(high_ids, reversed);
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let catalog = Catalog::new(vec![
            Product::new(
                ProductId::new(1),
                "vans Old Skool",
                Money::new(1_000, Currency::PEN),
                1,
                Category::Footwear,
                "img/a.png",
                "a",
            ),
            Product::new(
                ProductId::new(2),
                "Adidas Ultraboost",
                Money::new(1_000, Currency::PEN),
                1,
                Category::Footwear,
                "img/b.png",
                "b",
            ),
        ]);
        let sorted = sort(refs(&catalog), SortKey::Name);
        assert_eq!(sorted[0].name(), "Adidas Ultraboost");
    }

    #[test]
    fn test_rating_descending() {
        let catalog = Catalog::demo();
        let sorted = sort(refs(&catalog), SortKey::Rating);
        for pair in sorted.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // Same price everywhere: price sort must keep catalog order.
        let catalog = Catalog::new(
            (1..=6)
                .map(|i| {
                    Product::new(
                        ProductId::new(i),
                        format!("Producto {i}"),
                        Money::new(9_900, Currency::PEN),
                        5,
                        Category::Apparel,
                        "img/p.png",
                        "producto",
                    )
                })
                .collect(),
        );
        let sorted = sort(refs(&catalog), SortKey::PriceLow);
        let ids: Vec<_> = sorted.iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let catalog = Catalog::demo();
        let original: Vec<_> = catalog.iter().map(Product::id).collect();
        let _sorted = sort(refs(&catalog), SortKey::PriceHigh);
        let after: Vec<_> = catalog.iter().map(Product::id).collect();
        assert_eq!(original, after);
    }
}
