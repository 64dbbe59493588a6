//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A product in the catalog.
///
/// Identity and pricing fields are private: the id never changes after
/// construction, and stock only moves through [`Product::set_stock`]. The
/// remaining fields are configuration-phase attributes set right after
/// construction via the `with_*` builders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    base_price: Money,
    stock: u32,
    /// Category tag; drives icon, default sizes, and filtering.
    pub category: Category,
    /// Image reference for renderers.
    pub image: String,
    /// Short marketing description.
    pub description: String,
    /// Style within the category (e.g., "deportivo", "casual").
    pub style: Option<String>,
    /// Star rating, 4 or 5.
    pub rating: u8,
    /// Product-level discount percent (0-100, 0 = no discount).
    pub discount_percent: u8,
    /// Whether the product is flagged as a new arrival.
    pub is_new: bool,
    /// Sizes offered; defaults to the category's size run.
    pub sizes: Vec<String>,
    /// Colors offered.
    pub colors: Vec<String>,
}

impl Product {
    /// Create a new product with category-default sizes and no discount.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        base_price: Money,
        stock: u32,
        category: Category,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            base_price,
            stock,
            category,
            image: image.into(),
            description: description.into(),
            style: None,
            rating: 4,
            discount_percent: 0,
            is_new: false,
            sizes: category
                .default_sizes()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            colors: Vec::new(),
        }
    }

    /// Product id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price before any product-level discount.
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Units in stock.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Set the stock count.
    ///
    /// The count is unsigned, so negative stock is unrepresentable; callers
    /// adjust through this setter rather than touching the field.
    pub fn set_stock(&mut self, value: u32) {
        self.stock = value;
    }

    /// Set the style label.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the star rating, clamped to the 4-5 range.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating.clamp(4, 5);
        self
    }

    /// Set the discount percent, capped at 100.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount_percent = percent.min(100);
        self
    }

    /// Flag the product as a new arrival.
    pub fn with_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Set the offered colors.
    pub fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = colors.iter().map(|c| (*c).to_string()).collect();
        self
    }

    /// Override the offered sizes.
    pub fn with_sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = sizes.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Price after the product-level discount.
    ///
    /// Always `<= base_price()`, with equality exactly when the discount is 0.
    pub fn final_price(&self) -> Money {
        if self.discount_percent > 0 {
            self.base_price
                .subtract(&self.base_price.percentage(f64::from(self.discount_percent)))
        } else {
            self.base_price
        }
    }

    /// Check if the product carries a discount.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent > 0
    }

    /// Check if the product is offered in the given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product is offered in the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock label for renderers.
    pub fn stock_status(&self) -> &'static str {
        if self.stock > 0 {
            "Disponible"
        } else {
            "Agotado"
        }
    }

    /// Star rating rendered as a string of stars.
    pub fn rating_stars(&self) -> String {
        "\u{2b50}".repeat(usize::from(self.rating))
    }

    /// One-line summary: icon, name, style, final price.
    pub fn display_line(&self) -> String {
        match &self.style {
            Some(style) => format!(
                "{} {} ({}) - {}",
                self.category.icon(),
                self.name,
                style,
                self.final_price()
            ),
            None => format!(
                "{} {} - {}",
                self.category.icon(),
                self.name,
                self.final_price()
            ),
        }
    }
}
