//! Inventory report over the catalog.

use crate::catalog::Catalog;
use serde::Serialize;

/// Stock level below which a product is flagged for restocking.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Read-only snapshot of catalog stock levels.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InventoryReport {
    /// Number of products in the catalog.
    pub total_products: usize,
    /// Sum of all stock counts.
    pub total_stock: u32,
    /// Names of products under [`LOW_STOCK_THRESHOLD`].
    pub low_stock: Vec<String>,
    /// Average stock per product, rounded to the nearest unit.
    pub average_stock: u32,
}

impl InventoryReport {
    /// Analyze the catalog's current stock.
    pub fn analyze(catalog: &Catalog) -> Self {
        let total_products = catalog.len();
        let total_stock: u32 = catalog.iter().map(|p| p.stock()).sum();

        let low_stock = catalog
            .iter()
            .filter(|p| p.stock() < LOW_STOCK_THRESHOLD)
            .map(|p| p.name().to_string())
            .collect();

        let average_stock = if total_products == 0 {
            0
        } else {
            ((f64::from(total_stock)) / total_products as f64).round() as u32
        };

        Self {
            total_products,
            total_stock,
            low_stock,
            average_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: u32, name: &str, stock: u32) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            Money::new(10000, Currency::PEN),
            stock,
            Category::Accessory,
            "img/x.png",
            "algo",
        )
    }

    #[test]
    fn test_report_totals() {
        let catalog = Catalog::new(vec![
            product(1, "Gorra", 40),
            product(2, "Reloj", 8),
            product(3, "Lentes", 3),
        ]);
        let report = InventoryReport::analyze(&catalog);

        assert_eq!(report.total_products, 3);
        assert_eq!(report.total_stock, 51);
        assert_eq!(report.low_stock, vec!["Reloj", "Lentes"]);
        assert_eq!(report.average_stock, 17);
    }

    #[test]
    fn test_report_empty_catalog() {
        let report = InventoryReport::analyze(&Catalog::default());
        assert_eq!(report.total_products, 0);
        assert_eq!(report.average_stock, 0);
        assert!(report.low_stock.is_empty());
    }

    #[test]
    fn test_demo_catalog_low_stock() {
        let report = InventoryReport::analyze(&Catalog::demo());
        // Only the watch sits under the threshold in the seed data.
        assert_eq!(report.low_stock, vec!["Reloj Deportivo"]);
    }
}
