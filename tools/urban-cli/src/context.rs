//! Shared command context.

use anyhow::Result;
use urban_commerce::cart::{Cart, CouponBook};
use urban_commerce::catalog::Catalog;

use crate::config::StoreConfig;
use crate::output::Output;

/// Everything a command needs: config, output, and the seeded session state.
pub struct Context {
    /// Effective configuration.
    pub config: StoreConfig,
    /// Output handler.
    pub output: Output,
    /// The product catalog, built once at startup.
    pub catalog: Catalog,
    /// The coupon registry.
    pub coupons: CouponBook,
}

impl Context {
    /// Load configuration and seed the catalog and coupon book.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = StoreConfig::load_or_default(config_path)?;
        tracing::debug!(store = %config.store.name, "configuration loaded");

        Ok(Self {
            config,
            output,
            catalog: Catalog::demo(),
            coupons: CouponBook::demo(),
        })
    }

    /// A fresh cart under the configured shipping policy.
    pub fn new_cart(&self) -> Cart {
        Cart::with_policy(self.config.shipping_policy())
    }
}
