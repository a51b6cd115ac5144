//! Build-time endpoint configuration for the backend collaborators.
//!
//! The WASM bundle has no process environment at runtime, so base URLs are
//! baked in at compile time with `option_env!` and fall back to the local
//! development ports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_AUTH_URL: &str = "http://localhost:5129/api/auth";
pub const DEFAULT_PRODUCT_URL: &str = "http://localhost:5129/api/product";
pub const DEFAULT_CART_URL: &str = "http://localhost:5129/api/cart";
pub const DEFAULT_ORDER_URL: &str = "https://localhost:7154/api/order";
pub const DEFAULT_QUOTATION_URL: &str = "https://localhost:7154/api/quotation";
pub const DEFAULT_ASSET_URL: &str = "https://localhost:7154";

/// Fixed request timeout applied by the cart client.
pub const CART_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Quiet period after the last keystroke before a catalog search is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Base URLs for every backend resource the storefront talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth: String,
    pub product: String,
    pub cart: String,
    pub order: String,
    pub quotation: String,
    /// Origin serving uploaded product images under `/uploads`.
    pub assets: String,
}

impl ApiConfig {
    /// Resolve the configuration from compile-time environment overrides.
    ///
    /// Recognized variables:
    /// - `STOREFRONT_AUTH_URL`
    /// - `STOREFRONT_PRODUCT_URL`
    /// - `STOREFRONT_CART_URL`
    /// - `STOREFRONT_ORDER_URL`
    /// - `STOREFRONT_QUOTATION_URL`
    /// - `STOREFRONT_ASSET_URL`
    pub fn from_build_env() -> Self {
        Self {
            auth: resolve_base(option_env!("STOREFRONT_AUTH_URL"), DEFAULT_AUTH_URL),
            product: resolve_base(option_env!("STOREFRONT_PRODUCT_URL"), DEFAULT_PRODUCT_URL),
            cart: resolve_base(option_env!("STOREFRONT_CART_URL"), DEFAULT_CART_URL),
            order: resolve_base(option_env!("STOREFRONT_ORDER_URL"), DEFAULT_ORDER_URL),
            quotation: resolve_base(option_env!("STOREFRONT_QUOTATION_URL"), DEFAULT_QUOTATION_URL),
            assets: resolve_base(option_env!("STOREFRONT_ASSET_URL"), DEFAULT_ASSET_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth: DEFAULT_AUTH_URL.to_owned(),
            product: DEFAULT_PRODUCT_URL.to_owned(),
            cart: DEFAULT_CART_URL.to_owned(),
            order: DEFAULT_ORDER_URL.to_owned(),
            quotation: DEFAULT_QUOTATION_URL.to_owned(),
            assets: DEFAULT_ASSET_URL.to_owned(),
        }
    }
}

/// Process-wide configuration, resolved once.
pub fn api_config() -> &'static ApiConfig {
    static CONFIG: OnceLock<ApiConfig> = OnceLock::new();
    CONFIG.get_or_init(ApiConfig::from_build_env)
}

fn resolve_base(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
