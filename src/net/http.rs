//! HTTP transport for the auth API.
//!
//! Client-side (hydrate): real fetches via `gloo-net`, always with
//! credentials included so the httpOnly session cookie rides along.
//! Server-side (SSR): stubs that fail inertly since the cookie only exists
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response is reduced to an [`ApiError`] carrying exactly one
//! display message; the parsed wire detail rides along for callers that want
//! field-level entries. Network-level failures and malformed success bodies
//! surface as the fixed [`REQUEST_FAILED`] text and are logged separately.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::net::types::ErrorDetail;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ErrorBody;

/// Fixed user-facing text for network-level and contract failures.
pub const REQUEST_FAILED: &str = "Request failed.";

/// Normalized API failure with a single display message.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable summary, derived per the transport's precedence rules.
    pub message: String,
    /// Raw parsed error payload, when the response body was one.
    pub detail: Option<ErrorDetail>,
}

impl ApiError {
    /// Network-level or contract failure with the generic display text.
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn transport() -> Self {
        Self {
            message: REQUEST_FAILED.to_owned(),
            detail: None,
        }
    }

    /// Stub failure for calls made outside the browser.
    #[cfg(not(feature = "hydrate"))]
    pub(crate) fn unavailable() -> Self {
        Self {
            message: "not available on server".to_owned(),
            detail: None,
        }
    }

    /// Build an error from a non-2xx response's body and status text.
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn from_response(body: &str, status_text: &str) -> Self {
        let (message, detail) = derive_error_message(body, status_text);
        Self { message, detail }
    }
}

/// Reduce a non-2xx response body to one display message.
///
/// Precedence: a string `detail` verbatim; the first field entry's `msg`
/// (or the raw body when the list is empty); the raw body text; the HTTP
/// status text when the body is empty.
#[cfg(any(test, feature = "hydrate"))]
fn derive_error_message(body: &str, status_text: &str) -> (String, Option<ErrorDetail>) {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail }) => {
            let message = match &detail {
                ErrorDetail::Message(message) => message.clone(),
                ErrorDetail::Fields(fields) => fields
                    .first()
                    .map_or_else(|| body.to_owned(), |field| field.msg.clone()),
            };
            (message, Some(detail))
        }
        Err(_) => {
            let message = if body.is_empty() {
                status_text.to_owned()
            } else {
                body.to_owned()
            };
            (message, None)
        }
    }
}

/// Require a parsed body from an endpoint whose contract always returns one.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn require_body<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| {
        #[cfg(feature = "hydrate")]
        log::error!("empty success body from a value-returning endpoint");
        ApiError::transport()
    })
}

#[cfg(feature = "hydrate")]
fn transport_failure(context: &str, err: impl std::fmt::Display) -> ApiError {
    log::error!("{context}: {err}");
    ApiError::transport()
}

/// Issue a credentialed GET against `path` (relative paths resolve under the
/// configured API base).
#[cfg(feature = "hydrate")]
pub(crate) async fn get(path: &str) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::get(&crate::config::endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|err| transport_failure(path, err))
}

/// Issue a credentialed JSON POST against `path`.
#[cfg(feature = "hydrate")]
pub(crate) async fn post(
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let builder = gloo_net::http::Request::post(&crate::config::endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json");
    let request = match body {
        Some(payload) => builder
            .json(payload)
            .map_err(|err| transport_failure(path, err))?,
        None => builder.build().map_err(|err| transport_failure(path, err))?,
    };
    request
        .send()
        .await
        .map_err(|err| transport_failure(path, err))
}

/// Read a response per the transport contract: `Ok(None)` for an empty 2xx
/// body, parsed JSON for a non-empty one, and a normalized [`ApiError`] for
/// any non-2xx status.
#[cfg(feature = "hydrate")]
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<Option<T>, ApiError> {
    let body = resp
        .text()
        .await
        .map_err(|err| transport_failure("reading response body", err))?;
    if !resp.ok() {
        return Err(ApiError::from_response(&body, &resp.status_text()));
    }
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<T>(&body)
        .map(Some)
        .map_err(|err| transport_failure("malformed success body", err))
}
