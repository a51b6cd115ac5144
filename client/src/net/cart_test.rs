use super::*;

const BASE: &str = "http://localhost:5129/api/cart";

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(add_endpoint(BASE), "http://localhost:5129/api/cart/add");
    assert_eq!(item_endpoint(BASE, 12), "http://localhost:5129/api/cart/12");
    assert_eq!(customer_endpoint(BASE, 3), "http://localhost:5129/api/cart/customer/3");
    assert_eq!(distributor_endpoint(BASE, 4), "http://localhost:5129/api/cart/distributor/4");
    assert_eq!(confirmed_endpoint(BASE), "http://localhost:5129/api/cart/confirmed");
}

#[test]
fn list_customer_cart_requires_customer_id() {
    let result = futures::executor::block_on(list_customer_cart(None));
    assert_eq!(result, Err(ApiError::MissingId("Customer ID")));
}

#[test]
fn list_distributor_cart_requires_distributor_id() {
    let result = futures::executor::block_on(list_distributor_cart(None));
    assert_eq!(result, Err(ApiError::MissingId("Distributor ID")));
}
