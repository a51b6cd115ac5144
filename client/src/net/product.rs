//! Product catalog client.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Id, ImageUpload, Product, ProductDraft};
use crate::config::api_config;

fn list_endpoint(base: &str) -> String {
    format!("{base}/all")
}

fn search_endpoint(base: &str) -> String {
    format!("{base}/search")
}

fn product_endpoint(base: &str, id: Id) -> String {
    format!("{base}/{id}")
}

fn create_endpoint(base: &str) -> String {
    format!("{base}/add")
}

fn update_endpoint(base: &str, id: Id) -> String {
    format!("{base}/update/{id}")
}

fn draft_form_fields(draft: &ProductDraft) -> Vec<(&'static str, String)> {
    let mut fields = vec![("name", draft.name.clone()), ("description", draft.description.clone())];
    if let Some(price) = draft.price {
        fields.push(("price", price.to_string()));
    }
    fields
}

/// Fetch the full catalog.
///
/// # Errors
///
/// Returns an [`ApiError`] for any failure other than not-found.
pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    let url = list_endpoint(&api_config().product);
    http::get_list(&url, &[], None).await
}

/// Server-side search by product name.
///
/// # Errors
///
/// Returns an [`ApiError`] for any failure other than not-found.
pub async fn search_products(name: &str) -> Result<Vec<Product>, ApiError> {
    let url = search_endpoint(&api_config().product);
    http::get_list(&url, &[("name", name)], None).await
}

/// Fetch a single product.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the product is unknown.
pub async fn get_product(id: Id) -> Result<Product, ApiError> {
    let url = product_endpoint(&api_config().product, id);
    http::decode(http::request(Method::Get, &url, &[], None, None).await?)
}

/// Create a product from a multipart form with an optional image.
///
/// # Errors
///
/// Returns an [`ApiError`] when the upload fails.
pub async fn create_product(draft: &ProductDraft, image: Option<&ImageUpload>) -> Result<serde_json::Value, ApiError> {
    let url = create_endpoint(&api_config().product);
    http::post_multipart(&url, &draft_form_fields(draft), image).await
}

/// Update a product's fields with a JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn update_product(id: Id, draft: &ProductDraft) -> Result<serde_json::Value, ApiError> {
    let url = update_endpoint(&api_config().product, id);
    http::request(Method::Put, &url, &[], Some(http::json_body(draft)?), None).await
}

/// Delete a product.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_product(id: Id) -> Result<(), ApiError> {
    let url = product_endpoint(&api_config().product, id);
    http::request(Method::Delete, &url, &[], None, None).await?;
    Ok(())
}
