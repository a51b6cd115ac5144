//! Failure taxonomy shared by every API client.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures are normalized into `ApiError` at the HTTP
//! boundary. Pages never inspect raw responses; they turn an `ApiError` into a
//! banner message with [`ApiError::describe`] and offer a retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Normalized API failure. `Display` is the user-facing category message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Unable to connect to server. Please check if the backend is running.")]
    Network,
    #[error("Request timeout. Please try again.")]
    Timeout,
    #[error("Server error. Please try again later.")]
    Server(u16),
    #[error("Resource not found.")]
    NotFound,
    #[error("Request failed with status {0}.")]
    Status(u16),
    #[error("Unexpected response from server.")]
    Decode(String),
    #[error("{0} is required.")]
    MissingId(&'static str),
    #[error("Not available during server rendering.")]
    Unavailable,
}

impl ApiError {
    /// Classify an HTTP status. Returns `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(Self::NotFound),
            500..=599 => Some(Self::Server(status)),
            _ => Some(Self::Status(status)),
        }
    }

    /// Whether a list endpoint should treat this failure as an empty result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Banner text for a failed `action` (e.g. `"load orders"`).
    pub fn describe(&self, action: &str) -> String {
        format!("Failed to {action}. {self}")
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            // Fetch rejections (DNS, refused connection, CORS) surface as JS errors.
            _ => Self::Network,
        }
    }
}

/// Collapse not-found on list endpoints into an empty list.
///
/// # Errors
///
/// Passes through every failure other than [`ApiError::NotFound`].
pub fn empty_on_not_found<T>(result: Result<Vec<T>, ApiError>) -> Result<Vec<T>, ApiError> {
    match result {
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}
