//! Auth service client: registration, login, and logout for both roles.
//!
//! The service does not hand back a token the storefront uses; a successful
//! login simply yields the identity that is then persisted as the local
//! session (see `state::session`).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{AuthResponse, Credentials, Registration, Session, UserType};
use crate::config::api_config;

fn register_endpoint(base: &str, user_type: UserType) -> String {
    match user_type {
        UserType::Customer => format!("{base}/register"),
        UserType::Distributor => format!("{base}/register-distributor"),
    }
}

fn login_endpoint(base: &str, user_type: UserType) -> String {
    match user_type {
        UserType::Customer => format!("{base}/login"),
        UserType::Distributor => format!("{base}/login-distributor"),
    }
}

fn logout_endpoint(base: &str) -> String {
    format!("{base}/logout")
}

/// Register a new customer or distributor.
///
/// Returns the session to persist when the backend echoes the new identity,
/// or `None` when it only acknowledges the registration.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the backend rejects it.
pub async fn register(user_type: UserType, registration: &Registration) -> Result<Option<Session>, ApiError> {
    let url = register_endpoint(&api_config().auth, user_type);
    let body = http::request(Method::Post, &url, &[], Some(http::json_body(registration)?), None).await?;
    Ok(session_from_body(body, user_type, &registration.name))
}

/// Log in as a customer or distributor.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, or
/// [`ApiError::Decode`] when the response carries no usable identity.
pub async fn login(user_type: UserType, credentials: &Credentials) -> Result<Session, ApiError> {
    let url = login_endpoint(&api_config().auth, user_type);
    let body = http::request(Method::Post, &url, &[], Some(http::json_body(credentials)?), None).await?;
    session_from_body(body, user_type, &credentials.email)
        .ok_or_else(|| ApiError::Decode("login response did not include an id".to_owned()))
}

/// Tell the auth service the user logged out. Local session clearing does
/// not depend on this succeeding.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn logout() -> Result<(), ApiError> {
    let url = logout_endpoint(&api_config().auth);
    http::request(Method::Post, &url, &[], None, None).await?;
    Ok(())
}

fn session_from_body(body: serde_json::Value, user_type: UserType, fallback_name: &str) -> Option<Session> {
    // Some backend builds wrap the identity in a `user` object.
    let body = match body {
        serde_json::Value::Object(mut map) if map.contains_key("user") => map.remove("user").unwrap_or_default(),
        other => other,
    };
    serde_json::from_value::<AuthResponse>(body)
        .ok()?
        .into_session(user_type, fallback_name)
}
