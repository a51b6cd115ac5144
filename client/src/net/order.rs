//! Order/booking service client.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{BookingRequest, Id, Order, extract_order_id};
use crate::config::api_config;

fn booking_endpoint(base: &str) -> String {
    format!("{base}/makeBooking")
}

fn order_endpoint(base: &str, order_id: Id) -> String {
    format!("{base}/{order_id}")
}

fn customer_orders_endpoint(base: &str, customer_id: Id) -> String {
    format!("{base}/customer/{customer_id}")
}

fn my_orders_endpoint(base: &str, customer_id: Id) -> String {
    format!("{base}/myOrders/{customer_id}")
}

fn all_orders_endpoint(base: &str) -> String {
    format!("{base}/all")
}

/// Place a booking for everything in the customer's cart.
///
/// Returns the new order id when the backend reports one.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn make_booking(booking: &BookingRequest) -> Result<Option<Id>, ApiError> {
    let url = booking_endpoint(&api_config().order);
    let body = http::request(Method::Post, &url, &[], Some(http::json_body(booking)?), None).await?;
    Ok(extract_order_id(&body))
}

/// Fetch one order.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the order is unknown.
pub async fn get_order(order_id: Id) -> Result<Order, ApiError> {
    let url = order_endpoint(&api_config().order, order_id);
    http::decode(http::request(Method::Get, &url, &[], None, None).await?)
}

/// List orders placed by a customer (raw booking records).
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_customer_orders(customer_id: Id) -> Result<Vec<Order>, ApiError> {
    let url = customer_orders_endpoint(&api_config().order, customer_id);
    http::get_list(&url, &[], None).await
}

/// List the customer's order history as shown on the "My Orders" page.
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_my_orders(customer_id: Id) -> Result<Vec<Order>, ApiError> {
    let url = my_orders_endpoint(&api_config().order, customer_id);
    http::get_list(&url, &[], None).await
}

/// List every order.
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_all_orders() -> Result<Vec<Order>, ApiError> {
    let url = all_orders_endpoint(&api_config().order);
    http::get_list(&url, &[], None).await
}
