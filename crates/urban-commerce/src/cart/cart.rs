//! Cart and line item types.

use crate::cart::{CartTotals, CouponBook, CouponOutcome};
use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// Shipping terms applied by the cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free.
    pub free_over: Money,
    /// Flat fee charged below the threshold.
    pub flat_fee: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_over: Money::new(20_000, Currency::PEN),
            flat_fee: Money::new(1_500, Currency::PEN),
        }
    }
}

/// A line item in the cart.
///
/// Lines are keyed by `(product, size, color)`; two lines with the same key
/// never coexist, since adding a matching item merges quantities instead.
/// The unit price is the product's final price captured at add time (product
/// discounts are fixed at catalog construction, so this matches recomputing).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
}

impl CartLine {
    /// Product this line refers to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name, denormalized for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price (product final price at add time).
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected size, if the product has a size run.
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Selected color, if one was chosen.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Line subtotal: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(i64::from(self.quantity))
    }

    fn matches_key(&self, product_id: ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size && self.color.as_deref() == color
    }
}

/// A shopping cart.
///
/// One cart per session, owned by a single thread of control; all state is
/// private and mutated only through the methods below.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    applied_percent: u8,
    free_shipping: bool,
    policy: ShippingPolicy,
    currency: Currency,
    created_at: i64,
    updated_at: i64,
}

impl Cart {
    /// Create an empty cart with the default shipping policy.
    pub fn new() -> Self {
        Self::with_policy(ShippingPolicy::default())
    }

    /// Create an empty cart with a specific shipping policy.
    pub fn with_policy(policy: ShippingPolicy) -> Self {
        let now = current_timestamp();
        Self {
            lines: Vec::new(),
            applied_percent: 0,
            free_shipping: false,
            currency: policy.free_over.currency,
            policy,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same `(product, size, color)` key exists its
    /// quantity is incremented; otherwise a new line is appended. Stock is
    /// deliberately not checked here.
    ///
    /// Returns an error if the quantity is zero or the merged quantity would
    /// exceed [`MAX_QUANTITY_PER_LINE`].
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<(), StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches_key(product.id(), size, color))
        {
            let merged = existing
                .quantity
                .checked_add(quantity)
                .ok_or(StoreError::Overflow)?;
            if merged > MAX_QUANTITY_PER_LINE {
                return Err(StoreError::QuantityExceedsLimit(
                    merged,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = merged;
            self.updated_at = current_timestamp();
            tracing::debug!(product = %product.id(), quantity = merged, "cart line merged");
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(StoreError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        self.lines.push(CartLine {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.final_price(),
            quantity,
            size: size.map(str::to_string),
            color: color.map(str::to_string),
        });
        self.updated_at = current_timestamp();
        tracing::debug!(product = %product.id(), quantity, "cart line added");
        Ok(())
    }

    /// Remove the line matching the composite key exactly.
    ///
    /// Silently does nothing when no line matches; calling twice with the
    /// same key is equivalent to calling once.
    pub fn remove_item(&mut self, product_id: ProductId, size: Option<&str>, color: Option<&str>) {
        let before = self.lines.len();
        self.lines
            .retain(|l| !l.matches_key(product_id, size, color));
        if self.lines.len() < before {
            self.updated_at = current_timestamp();
            tracing::debug!(product = %product_id, "cart line removed");
        }
    }

    /// Set the quantity of the line matching the composite key.
    ///
    /// A quantity of 0 removes the line. Silently does nothing when no line
    /// matches.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        size: Option<&str>,
        color: Option<&str>,
        new_quantity: u32,
    ) -> Result<(), StoreError> {
        if new_quantity == 0 {
            self.remove_item(product_id, size, color);
            return Ok(());
        }
        if new_quantity > MAX_QUANTITY_PER_LINE {
            return Err(StoreError::QuantityExceedsLimit(
                new_quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches_key(product_id, size, color))
        {
            line.quantity = new_quantity;
            self.updated_at = current_timestamp();
            tracing::debug!(product = %product_id, quantity = new_quantity, "cart quantity updated");
        }
        Ok(())
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        let cents = self.lines.iter().map(|l| l.line_total().amount_cents).sum();
        Money::new(cents, self.currency)
    }

    /// Cart-level discount: subtotal times the applied percent.
    pub fn discount_amount(&self) -> Money {
        self.subtotal().percentage(f64::from(self.applied_percent))
    }

    /// Shipping cost.
    ///
    /// Zero when a coupon waived it, when the subtotal reaches the
    /// free-shipping threshold, or when the cart is empty; otherwise the
    /// policy's flat fee.
    pub fn shipping(&self) -> Money {
        let subtotal = self.subtotal();
        if self.free_shipping || subtotal.amount_cents >= self.policy.free_over.amount_cents {
            return Money::zero(self.currency);
        }
        if self.lines.is_empty() {
            Money::zero(self.currency)
        } else {
            self.policy.flat_fee
        }
    }

    /// Grand total: subtotal minus discount plus shipping.
    pub fn total(&self) -> Money {
        let cents = self.subtotal().amount_cents - self.discount_amount().amount_cents
            + self.shipping().amount_cents;
        Money::new(cents, self.currency)
    }

    /// One-shot totals breakdown for renderers.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            discount_total: self.discount_amount(),
            shipping_total: self.shipping(),
            grand_total: self.total(),
        }
    }

    /// Apply a coupon by code.
    ///
    /// A found-and-active coupon overwrites the applied percent (if it
    /// grants one; a shipping-only coupon leaves any existing percent
    /// alone) and may set the free-shipping flag. Repeated applications are
    /// not cumulative: the last coupon wins. Unknown or inactive codes
    /// change nothing and report failure as a value.
    pub fn apply_coupon(&mut self, book: &CouponBook, code: &str) -> CouponOutcome {
        let Some(coupon) = book.lookup(code) else {
            tracing::debug!(code, "coupon rejected: unknown");
            return CouponOutcome::rejected();
        };
        if !coupon.is_active() {
            tracing::debug!(code = coupon.code(), "coupon rejected: inactive");
            return CouponOutcome::rejected();
        }

        if let Some(percent) = coupon.percent() {
            self.applied_percent = percent;
        }
        if coupon.grants_free_shipping() {
            self.free_shipping = true;
        }
        self.updated_at = current_timestamp();
        tracing::debug!(
            code = coupon.code(),
            percent = coupon.percent().unwrap_or(0),
            free_shipping = coupon.grants_free_shipping(),
            "coupon applied"
        );
        CouponOutcome::applied(coupon.percent().unwrap_or(0))
    }

    /// Empty the cart and reset discount and shipping state.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.applied_percent = 0;
        self.free_shipping = false;
        self.updated_at = current_timestamp();
        tracing::debug!("cart cleared");
    }

    /// Total item count: sum of all line quantities.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currently applied discount percent.
    pub fn applied_percent(&self) -> u8 {
        self.applied_percent
    }

    /// Whether a coupon waived shipping.
    pub fn has_free_shipping(&self) -> bool {
        self.free_shipping
    }

    /// The shipping policy in force.
    pub fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    /// Unix timestamp of creation.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Unix timestamp of last mutation.
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
