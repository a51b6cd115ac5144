//! Shared HTTP plumbing for the resource clients.
//!
//! Client-side (hydrate): real requests via `gloo-net`, with an optional
//! timeout raced against a `gloo-timers` sleep.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! the backends are only reachable from the browser.
//!
//! Response bodies are read as text and parsed leniently: an empty body is
//! `null`, and a non-JSON body (some endpoints answer with a bare message) is
//! kept as a JSON string instead of failing a request that succeeded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, empty_on_not_found};
#[cfg(feature = "hydrate")]
use super::types::ImageUpload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Issue a request and return the parsed body.
pub(crate) async fn request(
    method: Method,
    url: &str,
    query: &[(&str, &str)],
    body: Option<Value>,
    timeout: Option<Duration>,
) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let builder = if query.is_empty() { builder } else { builder.query(query.iter().copied()) };
        let outcome = match body {
            Some(body) => match builder.json(&body) {
                Ok(request) => dispatch(request.send(), timeout).await,
                Err(err) => Err(ApiError::from(err)),
            },
            None => dispatch(builder.send(), timeout).await,
        };
        if let Err(err) = &outcome {
            leptos::logging::warn!("api request failed: method={method:?} url={url} error={err:?}");
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, query, body, timeout);
        Err(ApiError::Unavailable)
    }
}

/// `GET` a collection endpoint. Not-found and a `null` body both yield an
/// empty list.
pub(crate) async fn get_list<T: DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    timeout: Option<Duration>,
) -> Result<Vec<T>, ApiError> {
    let result = match request(Method::Get, url, query, None, timeout).await {
        Ok(body) => decode_many(body),
        Err(err) => Err(err),
    };
    empty_on_not_found(result)
}

/// `POST` a multipart form built from text fields plus an optional image part.
pub(crate) async fn post_multipart(
    url: &str,
    fields: &[(&str, String)],
    image: Option<&super::types::ImageUpload>,
) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_form_data(fields, image).map_err(|()| ApiError::Decode("could not build form data".to_owned()))?;
        let request = gloo_net::http::Request::post(url).body(form)?;
        let outcome = dispatch(request.send(), None).await;
        if let Err(err) = &outcome {
            leptos::logging::warn!("api multipart request failed: url={url} error={err:?}");
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, fields, image);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch<F>(pending: F, timeout: Option<Duration>) -> Result<Value, ApiError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::{Either, select};

    let response = match timeout {
        Some(limit) => {
            let pending = std::pin::pin!(pending);
            let timer = std::pin::pin!(gloo_timers::future::sleep(limit));
            match select(pending, timer).await {
                Either::Left((result, _)) => result?,
                Either::Right(((), _)) => return Err(ApiError::Timeout),
            }
        }
        None => pending.await?,
    };
    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }
    let text = response.text().await?;
    Ok(parse_body(&text))
}

#[cfg(feature = "hydrate")]
fn build_form_data(fields: &[(&str, String)], image: Option<&ImageUpload>) -> Result<web_sys::FormData, ()> {
    let form = web_sys::FormData::new().map_err(|_| ())?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(|_| ())?;
    }
    if let Some(image) = image {
        let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&image.mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|_| ())?;
        form.append_with_blob_and_filename(IMAGE_FIELD, &blob, &image.file_name)
            .map_err(|_| ())?;
    }
    Ok(form)
}

/// Multipart field name the product service reads the upload from.
#[cfg(any(test, feature = "hydrate"))]
const IMAGE_FIELD: &str = "image";

/// Parse a response body, tolerating empty and non-JSON payloads.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_owned()))
}

/// Serialize a request payload.
pub(crate) fn json_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a single entity from a parsed body.
pub(crate) fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a collection, normalizing `null` to an empty list.
pub(crate) fn decode_many<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    super::types::decode_list(body).map_err(|e| ApiError::Decode(e.to_string()))
}
