//! Cart service client.
//!
//! Every cart call carries the fixed [`CART_REQUEST_TIMEOUT`]; expiry is
//! reported as [`ApiError::Timeout`] and never retried automatically.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{AddToCartRequest, CartItem, Id};
use crate::config::{CART_REQUEST_TIMEOUT, api_config};

fn add_endpoint(base: &str) -> String {
    format!("{base}/add")
}

fn item_endpoint(base: &str, item_id: Id) -> String {
    format!("{base}/{item_id}")
}

fn customer_endpoint(base: &str, customer_id: Id) -> String {
    format!("{base}/customer/{customer_id}")
}

fn distributor_endpoint(base: &str, distributor_id: Id) -> String {
    format!("{base}/distributor/{distributor_id}")
}

fn confirmed_endpoint(base: &str) -> String {
    format!("{base}/confirmed")
}

/// Add a product to a customer's cart.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or times out.
pub async fn add_to_cart(request: &AddToCartRequest) -> Result<(), ApiError> {
    let url = add_endpoint(&api_config().cart);
    http::request(Method::Post, &url, &[], Some(http::json_body(request)?), Some(CART_REQUEST_TIMEOUT)).await?;
    Ok(())
}

/// Remove a cart line item.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or times out.
pub async fn remove_from_cart(item_id: Id) -> Result<(), ApiError> {
    let url = item_endpoint(&api_config().cart, item_id);
    http::request(Method::Delete, &url, &[], None, Some(CART_REQUEST_TIMEOUT)).await?;
    Ok(())
}

/// List a customer's cart. A missing cart is an empty cart.
///
/// # Errors
///
/// Returns [`ApiError::MissingId`] without issuing a request when no customer
/// id is known, otherwise any non-not-found failure.
pub async fn list_customer_cart(customer_id: Option<Id>) -> Result<Vec<CartItem>, ApiError> {
    let customer_id = customer_id.ok_or(ApiError::MissingId("Customer ID"))?;
    let url = customer_endpoint(&api_config().cart, customer_id);
    http::get_list(&url, &[], Some(CART_REQUEST_TIMEOUT)).await
}

/// List the cart items assigned to a distributor.
///
/// # Errors
///
/// Returns [`ApiError::MissingId`] without issuing a request when no
/// distributor id is known, otherwise any non-not-found failure.
pub async fn list_distributor_cart(distributor_id: Option<Id>) -> Result<Vec<CartItem>, ApiError> {
    let distributor_id = distributor_id.ok_or(ApiError::MissingId("Distributor ID"))?;
    let url = distributor_endpoint(&api_config().cart, distributor_id);
    http::get_list(&url, &[], Some(CART_REQUEST_TIMEOUT)).await
}

/// List cart items that have been confirmed and are open for quotations.
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_confirmed_items() -> Result<Vec<CartItem>, ApiError> {
    let url = confirmed_endpoint(&api_config().cart);
    http::get_list(&url, &[], Some(CART_REQUEST_TIMEOUT)).await
}
