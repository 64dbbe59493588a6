//! Category types for product classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The set is small and fixed, so per-category behavior (icon, display name,
/// default size run) is a pure function of the tag rather than a method on a
/// class hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Shoes and sneakers; numeric sizes.
    #[serde(rename = "zapatos")]
    Footwear,
    /// Clothing; letter sizes.
    #[serde(rename = "ropa")]
    Apparel,
    /// Caps, bags, belts; no size run.
    #[serde(rename = "accesorios")]
    Accessory,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Footwear, Category::Apparel, Category::Accessory];

    /// Stable slug used in filters and search.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Footwear => "zapatos",
            Category::Apparel => "ropa",
            Category::Accessory => "accesorios",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Footwear => "Zapatos",
            Category::Apparel => "Ropa",
            Category::Accessory => "Accesorios",
        }
    }

    /// Icon shown next to products of this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Footwear => "\u{1f45f}",
            Category::Apparel => "\u{1f455}",
            Category::Accessory => "\u{1f9e2}",
        }
    }

    /// The size run offered by default for this category.
    ///
    /// Accessories come in one size and return an empty run.
    pub fn default_sizes(&self) -> &'static [&'static str] {
        match self {
            Category::Footwear => &["36", "38", "40", "42"],
            Category::Apparel => &["S", "M", "L", "XL"],
            Category::Accessory => &[],
        }
    }

    /// Parse a category slug.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zapatos" => Some(Category::Footwear),
            "ropa" => Some(Category::Apparel),
            "accesorios" => Some(Category::Accessory),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::from_str("ZAPATOS"), Some(Category::Footwear));
        assert_eq!(Category::from_str("electronica"), None);
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(Category::Footwear.default_sizes().len(), 4);
        assert_eq!(Category::Apparel.default_sizes(), &["S", "M", "L", "XL"]);
        assert!(Category::Accessory.default_sizes().is_empty());
    }
}
