//! Storefront domain types and logic for the Urban Style shop.
//!
//! This crate provides the in-memory core of a single-session storefront:
//!
//! - **Catalog**: products, categories, the seeded demo catalog, inventory report
//! - **Cart**: shopping cart with line items, coupons, shipping, totals
//! - **Search**: filter criteria and sort keys applied over the catalog
//! - **Checkout**: order numbering, loyalty points, payment assessment
//!
//! Everything is synchronous and owned: a `Catalog`, a `Cart` and a
//! `CouponBook` are plain values constructed at startup and threaded through
//! calls by reference. There is no persistence and no shared global state.
//!
//! # Example
//!
//! ```rust
//! use urban_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let coupons = CouponBook::demo();
//! let mut cart = Cart::new();
//!
//! // Browse sale items under S/ 400, cheapest first.
//! let criteria = FilterCriteria::new()
//!     .with_category(CategoryFilter::Deals)
//!     .with_max_price(Money::from_decimal(400.0, Currency::PEN));
//! let results = sort(filter(catalog.products(), &criteria), SortKey::PriceLow);
//!
//! // Put the first hit in the cart and check the damage.
//! if let Some(product) = results.first() {
//!     cart.add_item(product, 1, product.sizes.first().map(String::as_str), None)
//!         .unwrap();
//! }
//! let outcome = cart.apply_coupon(&coupons, "descuento10");
//! assert!(outcome.success);
//! println!("Total: {}", cart.total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Catalog, InventoryReport, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartTotals, Coupon, CouponBook, CouponOutcome, ShippingPolicy,
    };

    // Checkout
    pub use crate::checkout::{
        assess_payment, checkout, LoyaltyLedger, OrderSequence, PaymentAssessment, PaymentMethod,
        Receipt,
    };

    // Search
    pub use crate::search::{
        filter, sort, CategoryFilter, FilterCriteria, QueryResults, SortKey,
    };
}
