//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is the only thing the storefront persists locally.
//! These helpers keep the web-sys glue in one place; during server rendering
//! every call is a no-op and reads come back empty.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load and decode the JSON value stored under `key`.
///
/// Missing keys and undecodable values both read as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored value: key={key} error={e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete whatever is stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
