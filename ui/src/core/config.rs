//! Storefront constants shared through Dioxus context.
//!
//! The page shell provides a `StoreConfig` once (`use_context_provider`);
//! components read it with `use_store_config()`, falling back to the default
//! values when rendered outside the shell (e.g. in isolation).

use dioxus::prelude::*;
use thiserror::Error;

pub const CART_ADD_ENDPOINT: &str = "/cart/add.js";
pub const CART_PAGE: &str = "/cart";
pub const COVER_IMAGE_URL: &str =
    "https://cdn.shopify.com/s/files/1/0942/5666/0784/files/MOAB.png?v=1764162757";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Cart-add endpoint of the storefront (relative to the shop origin).
    pub cart_add_endpoint: String,
    /// Where the browser goes after a successful add.
    pub cart_page: String,
    /// Units added per click.
    pub quantity: u32,
    pub price: String,
    pub currency: String,
    pub cover_image_url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cart endpoint must not be empty")]
    EmptyEndpoint,
    #[error("cart page path must not be empty")]
    EmptyCartPage,
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cart_add_endpoint: CART_ADD_ENDPOINT.to_string(),
            cart_page: CART_PAGE.to_string(),
            quantity: 1,
            price: "$29.99".to_string(),
            currency: "USD".to_string(),
            cover_image_url: COVER_IMAGE_URL.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart_add_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.cart_page.trim().is_empty() {
            return Err(ConfigError::EmptyCartPage);
        }
        if self.quantity == 0 {
            return Err(ConfigError::ZeroQuantity);
        }
        Ok(())
    }
}

/// Read the config provided by the page shell, or the defaults.
pub fn use_store_config() -> StoreConfig {
    try_use_context::<StoreConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.quantity, 1);
        assert_eq!(cfg.cart_add_endpoint, "/cart/add.js");
        assert_eq!(cfg.cart_page, "/cart");
    }

    #[test]
    fn zero_quantity_rejected() {
        let cfg = StoreConfig {
            quantity: 0,
            ..StoreConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroQuantity));
    }

    #[test]
    fn blank_endpoint_rejected() {
        let cfg = StoreConfig {
            cart_add_endpoint: "  ".into(),
            ..StoreConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyEndpoint));
    }

    #[test]
    fn blank_cart_page_rejected() {
        let cfg = StoreConfig {
            cart_page: String::new(),
            ..StoreConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyCartPage));
    }
}
