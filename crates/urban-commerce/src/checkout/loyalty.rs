//! Loyalty points ledger.

use crate::money::Money;
use serde::Serialize;

/// Purchase amount that earns one loyalty point: S/ 10, in cents.
pub const CENTS_PER_POINT: i64 = 1_000;

/// Accumulated loyalty points for the session.
///
/// Plain owned state passed by mutable reference; the balance only grows
/// through [`LoyaltyLedger::earn`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoyaltyLedger {
    points: u64,
}

/// Points granted by a single purchase.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PointsEarned {
    /// Points earned by this purchase.
    pub earned: u64,
    /// Balance after the purchase.
    pub balance: u64,
}

impl LoyaltyLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance.
    pub fn balance(&self) -> u64 {
        self.points
    }

    /// Award points for a purchase: one point per full S/ 10 spent.
    pub fn earn(&mut self, purchase: Money) -> PointsEarned {
        let earned = (purchase.amount_cents / CENTS_PER_POINT).max(0) as u64;
        self.points += earned;
        PointsEarned {
            earned,
            balance: self.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn soles(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::PEN)
    }

    #[test]
    fn test_one_point_per_ten_soles_floor() {
        let mut ledger = LoyaltyLedger::new();
        let earned = ledger.earn(soles(324.0));
        assert_eq!(earned.earned, 32);
        assert_eq!(earned.balance, 32);
    }

    #[test]
    fn test_small_purchase_earns_nothing() {
        let mut ledger = LoyaltyLedger::new();
        assert_eq!(ledger.earn(soles(9.99)).earned, 0);
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn test_balance_accumulates() {
        let mut ledger = LoyaltyLedger::new();
        ledger.earn(soles(100.0));
        let second = ledger.earn(soles(55.0));
        assert_eq!(second.earned, 5);
        assert_eq!(second.balance, 15);
    }
}
