//! The catalog context object.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;

/// The product catalog.
///
/// Built once at startup and passed by reference wherever products are
/// needed; there is no global catalog. The product list is static for the
/// life of a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Product count per category, in display order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|cat| {
                let count = self.products.iter().filter(|p| p.category == *cat).count();
                (*cat, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(
                ProductId::new(1),
                "Zapatilla",
                Money::new(20000, Currency::PEN),
                5,
                Category::Footwear,
                "img/a.jpg",
                "una zapatilla",
            ),
            Product::new(
                ProductId::new(2),
                "Polo",
                Money::new(9000, Currency::PEN),
                8,
                Category::Apparel,
                "img/b.jpg",
                "un polo",
            ),
            Product::new(
                ProductId::new(3),
                "Camiseta",
                Money::new(8000, Currency::PEN),
                3,
                Category::Apparel,
                "img/c.jpg",
                "una camiseta",
            ),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name(), "Polo");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_category_counts() {
        let catalog = small_catalog();
        let counts = catalog.category_counts();
        assert_eq!(counts[0], (Category::Footwear, 1));
        assert_eq!(counts[1], (Category::Apparel, 2));
        assert_eq!(counts[2], (Category::Accessory, 0));
    }

    #[test]
    fn test_len() {
        assert_eq!(small_catalog().len(), 3);
        assert!(Catalog::default().is_empty());
    }
}
