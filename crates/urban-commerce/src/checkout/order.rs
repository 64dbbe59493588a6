//! Order numbering and checkout completion.

use crate::cart::Cart;
use crate::checkout::{LoyaltyLedger, PointsEarned};
use crate::money::Money;
use serde::Serialize;

/// Sequential order-number generator.
///
/// Owned by the caller and passed by mutable reference wherever an order
/// number is issued; the counter state is plain data, visible and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSequence {
    next: u32,
}

impl OrderSequence {
    /// Sequence starting at the store's conventional base of 1000
    /// (first number issued: `ORD-1001`).
    pub fn new() -> Self {
        Self::starting_at(1000)
    }

    /// Sequence starting at an arbitrary base.
    pub fn starting_at(base: u32) -> Self {
        Self { next: base }
    }

    /// Issue the next order number.
    pub fn next_number(&mut self) -> String {
        self.next += 1;
        format!("ORD-{}", self.next)
    }

    /// The last counter value issued (the base if none yet).
    pub fn current(&self) -> u32 {
        self.next
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a completed checkout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Receipt {
    /// Issued order number.
    pub order_number: String,
    /// Total charged.
    pub total: Money,
    /// Number of items purchased.
    pub item_count: u32,
    /// Loyalty points earned by this purchase.
    pub points_earned: u64,
    /// Loyalty balance after the purchase.
    pub points_balance: u64,
}

/// Complete a purchase.
///
/// Returns `None` when the cart is empty. Otherwise captures the total,
/// issues an order number, awards loyalty points, and resets the cart to its
/// pristine state (lines, discount percent, and free-shipping flag).
pub fn checkout(
    cart: &mut Cart,
    orders: &mut OrderSequence,
    loyalty: &mut LoyaltyLedger,
) -> Option<Receipt> {
    if cart.is_empty() {
        return None;
    }

    let total = cart.total();
    let item_count = cart.item_count();
    let order_number = orders.next_number();
    let PointsEarned { earned, balance } = loyalty.earn(total);

    cart.clear();
    tracing::info!(order = %order_number, total = %total, "checkout completed");

    Some(Receipt {
        order_number,
        total,
        item_count,
        points_earned: earned,
        points_balance: balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn cap() -> Product {
        Product::new(
            ProductId::new(11),
            "Gorra New Era",
            Money::new(8_500, Currency::PEN),
            40,
            Category::Accessory,
            "img/gorra.png",
            "Gorra snapback",
        )
    }

    #[test]
    fn test_sequence_starts_at_1001() {
        let mut seq = OrderSequence::new();
        assert_eq!(seq.next_number(), "ORD-1001");
        assert_eq!(seq.next_number(), "ORD-1002");
        assert_eq!(seq.next_number(), "ORD-1003");
        assert_eq!(seq.current(), 1003);
    }

    #[test]
    fn test_checkout_empty_cart_is_none() {
        let mut cart = Cart::new();
        let mut seq = OrderSequence::new();
        let mut loyalty = LoyaltyLedger::new();

        assert!(checkout(&mut cart, &mut seq, &mut loyalty).is_none());
        // Nothing was consumed.
        assert_eq!(seq.current(), 1000);
        assert_eq!(loyalty.balance(), 0);
    }

    #[test]
    fn test_checkout_resets_cart_and_awards_points() {
        let mut cart = Cart::new();
        let mut seq = OrderSequence::new();
        let mut loyalty = LoyaltyLedger::new();

        cart.add_item(&cap(), 3, None, None).unwrap(); // 255 >= 200, free shipping
        let receipt = checkout(&mut cart, &mut seq, &mut loyalty).unwrap();

        assert_eq!(receipt.order_number, "ORD-1001");
        assert_eq!(receipt.total, Money::new(25_500, Currency::PEN));
        assert_eq!(receipt.item_count, 3);
        assert_eq!(receipt.points_earned, 25); // 1 point per S/ 10
        assert_eq!(receipt.points_balance, 25);

        assert!(cart.is_empty());
        assert_eq!(cart.applied_percent(), 0);
        assert!(!cart.has_free_shipping());
    }

    #[test]
    fn test_consecutive_checkouts_accumulate() {
        let mut cart = Cart::new();
        let mut seq = OrderSequence::new();
        let mut loyalty = LoyaltyLedger::new();

        cart.add_item(&cap(), 3, None, None).unwrap();
        let first = checkout(&mut cart, &mut seq, &mut loyalty).unwrap();

        cart.add_item(&cap(), 3, None, None).unwrap();
        let second = checkout(&mut cart, &mut seq, &mut loyalty).unwrap();

        assert_eq!(first.order_number, "ORD-1001");
        assert_eq!(second.order_number, "ORD-1002");
        assert_eq!(second.points_balance, first.points_balance + second.points_earned);
    }
}
