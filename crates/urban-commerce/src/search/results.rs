//! Query results with facet counts.

use crate::catalog::{Category, Product};
use crate::search::{filter, sort, FilterCriteria, SortKey};
use serde::Serialize;

/// Per-category count within a result set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    /// The category.
    pub category: Category,
    /// Matching products in this category.
    pub count: usize,
}

/// Outcome of a filter + sort run over the catalog.
#[derive(Debug, Clone)]
pub struct QueryResults<'a> {
    /// Matching products, in the requested order.
    pub items: Vec<&'a Product>,
    /// Category facets for the result set (zero-count categories omitted).
    pub facets: Vec<CategoryCount>,
}

impl<'a> QueryResults<'a> {
    /// Run the full pipeline: filter, then stable sort.
    pub fn run(products: &'a [Product], criteria: &FilterCriteria, key: SortKey) -> Self {
        let items = sort(filter(products, criteria), key);
        let facets = Category::ALL
            .iter()
            .filter_map(|cat| {
                let count = items.iter().filter(|p| p.category == *cat).count();
                (count > 0).then_some(CategoryCount {
                    category: *cat,
                    count,
                })
            })
            .collect();
        Self { items, facets }
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::CategoryFilter;

    #[test]
    fn test_run_filters_and_sorts() {
        let catalog = Catalog::demo();
        let criteria = FilterCriteria::new().with_category(CategoryFilter::Deals);
        let results = QueryResults::run(catalog.products(), &criteria, SortKey::PriceLow);

        assert!(!results.is_empty());
        assert!(results.items.iter().all(|p| p.is_on_sale()));
        for pair in results.items.windows(2) {
            assert!(pair[0].final_price().amount_cents <= pair[1].final_price().amount_cents);
        }
    }

    #[test]
    fn test_facets_count_result_set() {
        let catalog = Catalog::demo();
        let results =
            QueryResults::run(catalog.products(), &FilterCriteria::new(), SortKey::Default);
        let total: usize = results.facets.iter().map(|f| f.count).sum();
        assert_eq!(total, results.len());
        assert_eq!(results.facets.len(), 3);
    }

    #[test]
    fn test_facets_omit_empty_categories() {
        let catalog = Catalog::demo();
        let criteria =
            FilterCriteria::new().with_category(CategoryFilter::Only(Category::Apparel));
        let results = QueryResults::run(catalog.products(), &criteria, SortKey::Default);
        assert_eq!(results.facets.len(), 1);
        assert_eq!(results.facets[0].category, Category::Apparel);
    }
}
