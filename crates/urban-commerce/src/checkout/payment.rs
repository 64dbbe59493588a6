//! Payment method assessment.
//!
//! Pure tier logic: the purchase total earns an extra discount tier, and the
//! chosen payment method adjusts it. Nothing here charges anything.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card, no surcharge.
    Card,
    /// Cash, 5% extra discount.
    Cash,
    /// Bank transfer, no surcharge.
    Transfer,
    /// PayPal, 2% surcharge.
    PayPal,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::Transfer,
        PaymentMethod::PayPal,
    ];

    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "tarjeta",
            PaymentMethod::Cash => "efectivo",
            PaymentMethod::Transfer => "transferencia",
            PaymentMethod::PayPal => "paypal",
        }
    }

    /// Parse a method identifier.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tarjeta" => Some(PaymentMethod::Card),
            "efectivo" => Some(PaymentMethod::Cash),
            "transferencia" => Some(PaymentMethod::Transfer),
            "paypal" => Some(PaymentMethod::PayPal),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of assessing a payment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentAssessment {
    /// Feedback for the shopper.
    pub message: String,
    /// Extra discount percent; negative values are a surcharge.
    pub extra_discount_percent: i8,
}

/// Assess a payment: purchase tier plus method adjustment.
pub fn assess_payment(method: PaymentMethod, total: Money) -> PaymentAssessment {
    let soles = total.amount_cents / 100;

    let (mut extra, mut message) = if soles >= 500 {
        (10, "¡Compra premium! 10% de descuento adicional".to_string())
    } else if soles >= 300 {
        (5, "¡Buena compra! 5% de descuento adicional".to_string())
    } else if soles >= 100 {
        (0, "Gracias por tu compra".to_string())
    } else {
        (
            0,
            "Agrega más productos para obtener descuentos".to_string(),
        )
    };

    match method {
        PaymentMethod::Card => message.push_str(" - Pago con tarjeta (sin recargo)"),
        PaymentMethod::Cash => {
            message.push_str(" - Pago en efectivo (5% descuento extra)");
            extra += 5;
        }
        PaymentMethod::Transfer => message.push_str(" - Pago por transferencia"),
        PaymentMethod::PayPal => {
            message.push_str(" - Pago con PayPal (2% recargo)");
            extra -= 2;
        }
    }

    PaymentAssessment {
        message,
        extra_discount_percent: extra,
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
    fn test_premium_tier() {
        let a = assess_payment(PaymentMethod::Card, soles(520.0));
        assert_eq!(a.extra_discount_percent, 10);
        assert!(a.message.starts_with("¡Compra premium!"));
        assert!(a.message.ends_with("(sin recargo)"));
    }

    #[test]
    fn test_cash_adds_five() {
        let a = assess_payment(PaymentMethod::Cash, soles(350.0));
        assert_eq!(a.extra_discount_percent, 10); // 5 tier + 5 cash
        assert!(a.message.contains("Pago en efectivo"));
    }

    #[test]
    fn test_paypal_surcharge_can_go_negative() {
        let a = assess_payment(PaymentMethod::PayPal, soles(50.0));
        assert_eq!(a.extra_discount_percent, -2);
        assert!(a.message.contains("(2% recargo)"));
    }

    #[test]
    fn test_mid_tier_thanks() {
        let a = assess_payment(PaymentMethod::Transfer, soles(150.0));
        assert_eq!(a.extra_discount_percent, 0);
        assert!(a.message.starts_with("Gracias por tu compra"));
    }

    #[test]
    fn test_low_tier_upsell() {
        let a = assess_payment(PaymentMethod::Card, soles(40.0));
        assert!(a.message.starts_with("Agrega más productos"));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(
            assess_payment(PaymentMethod::Card, soles(500.0)).extra_discount_percent,
            10
        );
        assert_eq!(
            assess_payment(PaymentMethod::Card, soles(499.99)).extra_discount_percent,
            5
        );
        assert_eq!(
            assess_payment(PaymentMethod::Card, soles(300.0)).extra_discount_percent,
            5
        );
    }

    #[test]
    fn test_method_parse_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_str(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_str("bitcoin"), None);
    }
}
