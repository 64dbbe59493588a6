//! Cart totals breakdown.

use crate::money::Money;
use serde::Serialize;

/// Complete pricing breakdown for a cart, produced by [`Cart::totals`].
///
/// [`Cart::totals`]: crate::cart::Cart::totals
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Subtotal before the cart-level discount.
    pub subtotal: Money,
    /// Cart-level discount amount.
    pub discount_total: Money,
    /// Shipping cost (zero when waived).
    pub shipping_total: Money,
    /// Final total (subtotal - discount + shipping).
    pub grand_total: Money,
}

impl CartTotals {
    /// Check if a cart-level discount is in effect.
    pub fn has_discount(&self) -> bool {
        self.discount_total.is_positive()
    }

    /// Amount saved through the discount.
    pub fn savings(&self) -> Money {
        self.discount_total
    }

    /// Check if shipping was waived (or there is nothing to ship).
    pub fn free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_breakdown_flags() {
        let totals = CartTotals {
            subtotal: Money::new(36_000, Currency::PEN),
            discount_total: Money::new(3_600, Currency::PEN),
            shipping_total: Money::zero(Currency::PEN),
            grand_total: Money::new(32_400, Currency::PEN),
        };

        assert!(totals.has_discount());
        assert!(totals.free_shipping());
        assert_eq!(totals.savings().amount_cents, 3_600);
    }
}
