//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use urban_commerce::cart::ShippingPolicy;
use urban_commerce::money::{Currency, Money};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "urban.toml";

/// Store configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreInfo,

    /// Shipping terms.
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// Browse defaults.
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Load the explicit path, or the default path when present, or fall
    /// back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// The shipping policy described by this config.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            free_over: Money::from_decimal(self.shipping.free_over, Currency::PEN),
            flat_fee: Money::from_decimal(self.shipping.flat_fee, Currency::PEN),
        }
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

fn default_store_name() -> String {
    "Urban Style".to_string()
}

/// Shipping terms, in soles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Subtotal at or above which shipping is free.
    #[serde(default = "default_free_over")]
    pub free_over: f64,

    /// Flat fee below the threshold.
    #[serde(default = "default_flat_fee")]
    pub flat_fee: f64,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_over: default_free_over(),
            flat_fee: default_flat_fee(),
        }
    }
}

fn default_free_over() -> f64 {
    200.0
}

fn default_flat_fee() -> f64 {
    15.0
}

/// Browse defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Sort applied when none is given on the command line.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Price cap applied when none is given, in soles.
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            max_price: None,
        }
    }
}

fn default_sort() -> String {
    "default".to_string()
}

/// Generate a commented default urban.toml.
pub fn generate_default_config() -> String {
    r#"# Urban Style store configuration

[store]
name = "Urban Style"

[shipping]
# Subtotal (soles) at or above which shipping is free.
free_over = 200.0
# Flat fee (soles) below the threshold.
flat_fee = 15.0

[browse]
# default | price-low | price-high | name | rating
default_sort = "default"
# Uncomment to cap listings at a price.
# max_price = 400.0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_store_terms() {
        let config = StoreConfig::default();
        let policy = config.shipping_policy();
        assert_eq!(policy.free_over, Money::new(20_000, Currency::PEN));
        assert_eq!(policy.flat_fee, Money::new(1_500, Currency::PEN));
        assert_eq!(config.store.name, "Urban Style");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StoreConfig = toml::from_str("[shipping]\nfree_over = 150.0\n").unwrap();
        assert_eq!(config.shipping.free_over, 150.0);
        assert_eq!(config.shipping.flat_fee, 15.0);
        assert_eq!(config.store.name, "Urban Style");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StoreConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.browse.default_sort, "default");
    }
}
