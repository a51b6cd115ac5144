//! Quotation service client.

#[cfg(test)]
#[path = "quotation_test.rs"]
mod quotation_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Id, Quotation, QuotationRequest};
use crate::config::api_config;

fn respond_endpoint(base: &str) -> String {
    format!("{base}/respond")
}

fn order_item_endpoint(base: &str, order_item_id: Id) -> String {
    format!("{base}/orderItem/{order_item_id}")
}

fn all_endpoint(base: &str) -> String {
    format!("{base}/all")
}

fn distributor_endpoint(base: &str, distributor_id: Id) -> String {
    format!("{base}/distributor/{distributor_id}")
}

/// Submit a distributor's quotation for a confirmed order item.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn submit_quotation(quotation: &QuotationRequest) -> Result<(), ApiError> {
    let url = respond_endpoint(&api_config().quotation);
    http::request(Method::Post, &url, &[], Some(http::json_body(quotation)?), None).await?;
    Ok(())
}

/// List every quotation submitted against one order item.
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_item_quotations(order_item_id: Id) -> Result<Vec<Quotation>, ApiError> {
    let url = order_item_endpoint(&api_config().quotation, order_item_id);
    http::get_list(&url, &[], None).await
}

/// List all quotations.
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_all_quotations() -> Result<Vec<Quotation>, ApiError> {
    let url = all_endpoint(&api_config().quotation);
    http::get_list(&url, &[], None).await
}

/// List the quotations a distributor has submitted.
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-not-found failure.
pub async fn list_distributor_quotations(distributor_id: Id) -> Result<Vec<Quotation>, ApiError> {
    let url = distributor_endpoint(&api_config().quotation, distributor_id);
    http::get_list(&url, &[], None).await
}
