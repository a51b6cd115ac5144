//! Wire DTOs for the storefront's backend collaborators.
//!
//! DESIGN
//! ======
//! The backends are loosely typed: ids sometimes arrive as strings, prices may
//! be missing or non-numeric, and collections may be `null`. Deserializers
//! here absorb that looseness once so view code can work with plain Rust
//! types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend entity identifier.
pub type Id = i64;

/// Role of the signed-in identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Distributor,
}

impl UserType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Distributor => "Distributor",
        }
    }
}

/// Locally persisted record of the authenticated identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Id,
    pub name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub role_id: Option<Id>,
}

impl Session {
    /// Customer id, if this session belongs to a customer.
    pub fn customer_id(&self) -> Option<Id> {
        (self.user_type == UserType::Customer).then_some(self.id)
    }

    /// Distributor id, if this session belongs to a distributor.
    pub fn distributor_id(&self) -> Option<Id> {
        (self.user_type == UserType::Distributor).then_some(self.id)
    }
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A cart line item. Once confirmed it becomes eligible for quotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default, alias = "name", deserialize_with = "deserialize_string_or_null")]
    pub item_name: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_id")]
    pub quantity: i64,
    /// Backend-supplied status, rendered verbatim.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

/// Delivery time as reported by the order service: free text or minutes.
/// Fractional minutes are floored when decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeliveryTime {
    Minutes(i64),
    Text(String),
}

/// A placed order as listed in the customer's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_lenient_delivery_time")]
    pub delivery_time: Option<DeliveryTime>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub products: Vec<String>,
}

/// A distributor's offer against one confirmed order item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<Id>,
    #[serde(deserialize_with = "deserialize_id")]
    pub distributor_id: Id,
    #[serde(deserialize_with = "deserialize_id")]
    pub order_item_id: Id,
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub quantity: i64,
    #[serde(default)]
    pub estimated_delivery_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub status: String,
}

// =============================================================
// Request payloads
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub customer_id: Id,
    pub product_id: Id,
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub customer_id: Id,
    pub address: String,
    pub phone: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    pub price: f64,
    /// ISO 8601 UTC timestamp (midnight of the chosen date).
    pub estimated_delivery_time: String,
    pub quantity: i64,
    pub distributor_id: Id,
    pub order_item_id: Id,
}

/// Editable product fields used by create and update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Raw image payload attached to a product create request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

// =============================================================
// Response helpers
// =============================================================

/// Login/register response. Field casing differs between backend builds.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default, alias = "CustomerId", rename = "customerId", deserialize_with = "deserialize_optional_id")]
    pub customer_id: Option<Id>,
    #[serde(default, alias = "DistributorId", rename = "distributorId", deserialize_with = "deserialize_optional_id")]
    pub distributor_id: Option<Id>,
    #[serde(default, alias = "Id", deserialize_with = "deserialize_optional_id")]
    pub id: Option<Id>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "RoleId", rename = "roleId", deserialize_with = "deserialize_optional_id")]
    pub role_id: Option<Id>,
}

impl AuthResponse {
    /// Build a session for `user_type`, preferring the role-specific id.
    ///
    /// Returns `None` when the response carries no usable id.
    pub fn into_session(self, user_type: UserType, fallback_name: &str) -> Option<Session> {
        let role_specific = match user_type {
            UserType::Customer => self.customer_id,
            UserType::Distributor => self.distributor_id,
        };
        let id = role_specific.or(self.id)?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_owned());
        Some(Session { id, name, user_type, role_id: self.role_id })
    }
}

/// Pull an order id out of a booking response of unknown shape.
pub fn extract_order_id(body: &serde_json::Value) -> Option<Id> {
    ["id", "orderId", "OrderId"]
        .iter()
        .filter_map(|key| body.get(key))
        .find_map(value_as_id)
}

/// Decode a JSON body into a list, treating `null` as empty.
///
/// # Errors
///
/// Returns the serde error when the body is neither `null` nor a list of `T`.
pub fn decode_list<T: DeserializeOwned>(body: serde_json::Value) -> Result<Vec<T>, serde_json::Error> {
    if body.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(body)
}

fn value_as_id(value: &serde_json::Value) -> Option<Id> {
    match value {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value_as_id(&value).ok_or_else(|| D::Error::custom(format!("expected integer id, got {value}")))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_as_id(&value))
}

fn deserialize_lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|price| price.is_finite()))
}

#[allow(clippy::cast_possible_truncation)]
fn deserialize_lenient_delivery_time<'de, D>(deserializer: D) -> Result<Option<DeliveryTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|m| m.is_finite()).map(|m| m.floor() as i64))
            .map(DeliveryTime::Minutes),
        serde_json::Value::String(text) => Some(DeliveryTime::Text(text)),
        _ => None,
    })
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
