//! Client configuration.
//!
//! The only configurable surface is the API base URL. WASM has no process
//! environment, so `AUTH_API_URL` is read at compile time; the `/api`
//! default keeps requests same-origin so a dev-server proxy can forward
//! them to the real backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL prefix for API requests.
pub fn api_base() -> &'static str {
    option_env!("AUTH_API_URL").unwrap_or("/api")
}

/// Resolve a request path against the API base.
///
/// Absolute `http(s)` URLs pass through untouched.
pub fn endpoint(path: &str) -> String {
    if path.starts_with("http") {
        path.to_owned()
    } else {
        format!("{}{path}", api_base())
    }
}
