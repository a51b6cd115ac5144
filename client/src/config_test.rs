use super::*;

#[test]
fn resolve_base_uses_default_when_unset() {
    assert_eq!(resolve_base(None, DEFAULT_CART_URL), "http://localhost:5129/api/cart");
}

#[test]
fn resolve_base_ignores_blank_override() {
    assert_eq!(resolve_base(Some("   "), DEFAULT_ORDER_URL), DEFAULT_ORDER_URL);
}

#[test]
fn resolve_base_trims_trailing_slashes() {
    assert_eq!(resolve_base(Some("https://api.example.test/cart//"), DEFAULT_CART_URL), "https://api.example.test/cart");
}

#[test]
fn default_config_matches_constants() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.auth, DEFAULT_AUTH_URL);
    assert_eq!(cfg.product, DEFAULT_PRODUCT_URL);
    assert_eq!(cfg.quotation, DEFAULT_QUOTATION_URL);
    assert_eq!(cfg.assets, DEFAULT_ASSET_URL);
}

#[test]
fn cart_timeout_is_ten_seconds() {
    assert_eq!(CART_REQUEST_TIMEOUT.as_secs(), 10);
    assert_eq!(SEARCH_DEBOUNCE.as_millis(), 300);
}
