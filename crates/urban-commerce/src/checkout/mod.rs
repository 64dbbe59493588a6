//! Checkout module.
//!
//! Contains order numbering, loyalty points, payment assessment, and the
//! checkout completion flow.

mod loyalty;
mod order;
mod payment;

pub use loyalty::{LoyaltyLedger, PointsEarned, CENTS_PER_POINT};
pub use order::{checkout, OrderSequence, Receipt};
pub use payment::{assess_payment, PaymentAssessment, PaymentMethod};
