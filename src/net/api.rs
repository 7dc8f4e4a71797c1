//! Typed auth endpoints over the HTTP transport.
//!
//! Client-side (hydrate): real HTTP calls via the `http` transport.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::ApiError;
use super::types::{MessageResponse, User};

#[cfg(feature = "hydrate")]
use super::http;

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(email: &str, password: &str, full_name: Option<&str>) -> serde_json::Value {
    match full_name {
        Some(name) => serde_json::json!({ "email": email, "password": password, "full_name": name }),
        None => serde_json::json!({ "email": email, "password": password }),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn forgot_password_payload(email: &str) -> serde_json::Value {
    serde_json::json!({ "email": email })
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_password_payload(token: &str, new_password: &str) -> serde_json::Value {
    serde_json::json!({ "token": token, "new_password": new_password })
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_email_endpoint(token: &str) -> String {
    format!(
        "/auth/verify-email?token={}",
        crate::util::urlencode::encode_component(token)
    )
}

/// Create an account via `POST /auth/register`. Does not log the user in.
///
/// # Errors
///
/// Fails with the server's validation message, e.g. a malformed or already
/// registered email.
pub async fn register(
    email: &str,
    password: &str,
    full_name: Option<&str>,
) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = register_payload(email, password, full_name);
        let resp = http::post("/auth/register", Some(&payload)).await?;
        http::require_body(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err(ApiError::unavailable())
    }
}

/// Log in via `POST /auth/login`; the server sets the session cookie as a
/// side effect invisible to client code.
///
/// # Errors
///
/// Fails with the server's message on invalid credentials.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = login_payload(email, password);
        let resp = http::post("/auth/login", Some(&payload)).await?;
        http::require_body(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// Log out via `POST /auth/logout`; the server clears the session cookie.
///
/// # Errors
///
/// Fails only on transport or server errors.
pub async fn logout() -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::post("/auth/logout", None).await?;
        http::require_body(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch the currently authenticated user from `GET /auth/me`.
///
/// A 401 means "no session" and resolves to `Ok(None)`; callers never have
/// to catch an error just to learn that no one is logged in.
///
/// # Errors
///
/// Fails on any non-2xx status other than 401, and on transport errors.
pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get("/auth/me").await?;
        if resp.status() == 401 {
            return Ok(None);
        }
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Request a password-reset email via `POST /auth/forgot-password`.
///
/// The server answers with the same confirmation whether or not the address
/// is registered, so account existence is never revealed.
///
/// # Errors
///
/// Fails only on transport or server errors.
pub async fn forgot_password(email: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = forgot_password_payload(email);
        let resp = http::post("/auth/forgot-password", Some(&payload)).await?;
        http::require_body(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::unavailable())
    }
}

/// Set a new password via `POST /auth/reset-password`.
///
/// # Errors
///
/// Fails with the server's message on an invalid or expired token.
pub async fn reset_password(token: &str, new_password: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = reset_password_payload(token, new_password);
        let resp = http::post("/auth/reset-password", Some(&payload)).await?;
        http::require_body(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(ApiError::unavailable())
    }
}

/// Confirm an email address via `GET /auth/verify-email?token=…`.
///
/// # Errors
///
/// Fails with the server's message on an invalid or expired token.
pub async fn verify_email(token: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get(&verify_email_endpoint(token)).await?;
        http::require_body(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::unavailable())
    }
}
