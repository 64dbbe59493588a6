//! Coupon definitions and the coupon registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A coupon: a percent discount and/or a free-shipping grant, behind an
/// active flag.
///
/// Codes are case-insensitive and stored upper-cased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coupon {
    code: String,
    percent: Option<u8>,
    free_shipping: bool,
    active: bool,
}

impl Coupon {
    /// Create a percent-discount coupon.
    pub fn percentage(code: impl Into<String>, percent: u8) -> Self {
        Self {
            code: code.into().to_uppercase(),
            percent: Some(percent.min(100)),
            free_shipping: false,
            active: true,
        }
    }

    /// Create a coupon that only waives shipping.
    pub fn free_shipping(code: impl Into<String>) -> Self {
        Self {
            code: code.into().to_uppercase(),
            percent: None,
            free_shipping: true,
            active: true,
        }
    }

    /// Additionally grant free shipping.
    pub fn with_free_shipping(mut self) -> Self {
        self.free_shipping = true;
        self
    }

    /// Mark the coupon inactive (expired).
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// The upper-cased code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The discount percent, if the coupon grants one.
    pub fn percent(&self) -> Option<u8> {
        self.percent
    }

    /// Whether the coupon waives shipping.
    pub fn grants_free_shipping(&self) -> bool {
        self.free_shipping
    }

    /// Whether the coupon can currently be applied.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The coupon registry. Read-only during cart operations.
#[derive(Debug, Clone, Default)]
pub struct CouponBook {
    coupons: HashMap<String, Coupon>,
}

impl CouponBook {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a coupon, replacing any previous one with the same code.
    pub fn insert(&mut self, coupon: Coupon) {
        self.coupons.insert(coupon.code().to_string(), coupon);
    }

    /// Look up a coupon, ignoring case.
    pub fn lookup(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(&code.trim().to_uppercase())
    }

    /// Number of registered coupons.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }

    /// Iterate over registered coupons in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        let mut coupons: Vec<&Coupon> = self.coupons.values().collect();
        coupons.sort_by(|a, b| a.code().cmp(b.code()));
        coupons.into_iter()
    }

    /// The demo coupons of the Urban Style shop.
    pub fn demo() -> Self {
        let mut book = Self::new();
        book.insert(Coupon::percentage("DESCUENTO10", 10));
        book.insert(Coupon::percentage("DESCUENTO20", 20));
        book.insert(Coupon::free_shipping("ENVIOGRATIS"));
        book.insert(Coupon::percentage("URBAN50", 50).deactivated());
        book
    }
}

/// Result of a coupon application. Failures are values, never errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponOutcome {
    /// Whether the coupon was applied.
    pub success: bool,
    /// Feedback for the shopper.
    pub message: String,
}

impl CouponOutcome {
    /// Successful application reporting the percent granted (0 when the
    /// coupon only waives shipping).
    pub(crate) fn applied(percent: u8) -> Self {
        Self {
            success: true,
            message: format!("¡Cupón aplicado! {percent}% de descuento"),
        }
    }

    /// Rejection for unknown or inactive codes.
    pub(crate) fn rejected() -> Self {
        Self {
            success: false,
            message: "Cupón inválido o expirado".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_stored_uppercase() {
        let coupon = Coupon::percentage("descuento10", 10);
        assert_eq!(coupon.code(), "DESCUENTO10");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let book = CouponBook::demo();
        assert!(book.lookup("descuento10").is_some());
        assert!(book.lookup(" DESCUENTO10 ").is_some());
        assert!(book.lookup("NOEXISTE").is_none());
    }

    #[test]
    fn test_demo_book() {
        let book = CouponBook::demo();
        assert_eq!(book.len(), 4);

        let urban50 = book.lookup("URBAN50").unwrap();
        assert!(!urban50.is_active());
        assert_eq!(urban50.percent(), Some(50));

        let envio = book.lookup("ENVIOGRATIS").unwrap();
        assert!(envio.grants_free_shipping());
        assert_eq!(envio.percent(), None);
    }

    #[test]
    fn test_percent_capped() {
        assert_eq!(Coupon::percentage("X", 200).percent(), Some(100));
    }
}
