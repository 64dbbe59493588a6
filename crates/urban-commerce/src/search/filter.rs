//! Filter criteria for the catalog query pipeline.

use crate::catalog::{Category, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category dimension of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category constraint.
    #[default]
    All,
    /// Only discounted products, across categories.
    Deals,
    /// Exactly one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a selector: the sentinels `todos` and `ofertas`, or a category
    /// slug.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "todos" => Some(CategoryFilter::All),
            "ofertas" => Some(CategoryFilter::Deals),
            other => Category::from_str(other).map(CategoryFilter::Only),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Deals => product.is_on_sale(),
            CategoryFilter::Only(cat) => product.category == *cat,
        }
    }
}

/// Filter criteria applied over the product list.
///
/// Supplied criteria are ANDed; absent fields impose no constraint, so the
/// default value matches everything. Malformed or empty inputs are treated
/// as "no constraint", never as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Category constraint.
    pub category: CategoryFilter,
    /// Exclude products whose final price exceeds this.
    pub max_price: Option<Money>,
    /// Keep only products offering this size.
    pub size: Option<String>,
    /// Keep only products offering this color.
    pub color: Option<String>,
    /// Case-insensitive substring over name, description, and category.
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the category.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Constrain the maximum final price.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Constrain to products offering a size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Constrain to products offering a color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Constrain by search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Check a product against every supplied criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product) {
            return false;
        }

        if let Some(max) = self.max_price {
            if product.final_price().amount_cents > max.amount_cents {
                return false;
            }
        }

        if let Some(size) = &self.size {
            if !product.has_size(size) {
                return false;
            }
        }

        if let Some(color) = &self.color {
            if !product.has_color(color) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.trim().to_lowercase();
            if !term.is_empty() {
                let hit = product.name().to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
                    || product.category.as_str().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        true
    }
}

/// Filter a product list, returning a new sequence of references.
///
/// The input is never mutated or reordered.
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let matched: Vec<&Product> = products.iter().filter(|p| criteria.matches(p)).collect();
    tracing::trace!(
        total = products.len(),
        matched = matched.len(),
        "catalog filtered"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::Currency;

    fn soles(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::PEN)
    }

    #[test]
    fn test_default_matches_everything() {
        let catalog = Catalog::demo();
        let all = filter(catalog.products(), &FilterCriteria::new());
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn test_category_exact() {
        let catalog = Catalog::demo();
        let criteria =
            FilterCriteria::new().with_category(CategoryFilter::Only(Category::Footwear));
        let shoes = filter(catalog.products(), &criteria);
        assert_eq!(shoes.len(), 5);
        assert!(shoes.iter().all(|p| p.category == Category::Footwear));
    }

    #[test]
    fn test_deals_keeps_discounted_only() {
        let catalog = Catalog::demo();
        let criteria = FilterCriteria::new().with_category(CategoryFilter::Deals);
        let deals = filter(catalog.products(), &criteria);
        assert!(!deals.is_empty());
        assert!(deals.iter().all(|p| p.discount_percent > 0));
    }

    #[test]
    fn test_max_price_uses_final_price() {
        let catalog = Catalog::demo();
        // Nike Air Max 90: base 450, final 360. A 400 cap keeps it.
        let criteria = FilterCriteria::new().with_max_price(soles(400.0));
        let cheap = filter(catalog.products(), &criteria);
        assert!(cheap.iter().any(|p| p.name() == "Nike Air Max 90"));
        assert!(cheap
            .iter()
            .all(|p| p.final_price().amount_cents <= soles(400.0).amount_cents));
    }

    #[test]
    fn test_size_filter() {
        let catalog = Catalog::demo();
        let criteria = FilterCriteria::new().with_size("42");
        let result = filter(catalog.products(), &criteria);
        assert_eq!(result.len(), 5); // all footwear carries 42
        assert!(result.iter().all(|p| p.has_size("42")));
    }

    #[test]
    fn test_color_filter() {
        let catalog = Catalog::demo();
        let criteria = FilterCriteria::new().with_color("verde");
        let result = filter(catalog.products(), &criteria);
        assert!(result.iter().all(|p| p.has_color("verde")));
        assert_eq!(result.len(), 2); // New Balance 574, Chaqueta Bomber
    }

    #[test]
    fn test_search_hits_name_description_and_category() {
        let catalog = Catalog::demo();

        let by_name = filter(
            catalog.products(),
            &FilterCriteria::new().with_search("nike"),
        );
        assert_eq!(by_name.len(), 2);

        let by_description = filter(
            catalog.products(),
            &FilterCriteria::new().with_search("denim"),
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name(), "Jeans Slim Fit");

        let by_category = filter(
            catalog.products(),
            &FilterCriteria::new().with_search("ZAPATOS"),
        );
        assert_eq!(by_category.len(), 5);
    }

    #[test]
    fn test_blank_search_is_no_constraint() {
        let catalog = Catalog::demo();
        let result = filter(
            catalog.products(),
            &FilterCriteria::new().with_search("   "),
        );
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_criteria_are_anded() {
        let catalog = Catalog::demo();
        let criteria = FilterCriteria::new()
            .with_category(CategoryFilter::Only(Category::Footwear))
            .with_max_price(soles(300.0))
            .with_color("negro");
        let result = filter(catalog.products(), &criteria);
        // Converse (280, negro) and discounted Vans (272, negro).
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(CategoryFilter::parse("todos"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse("ofertas"), Some(CategoryFilter::Deals));
        assert_eq!(
            CategoryFilter::parse("Ropa"),
            Some(CategoryFilter::Only(Category::Apparel))
        );
        assert_eq!(CategoryFilter::parse("juguetes"), None);
    }
}
