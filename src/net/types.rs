//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's response payloads exactly so serde does
//! the whole translation; nothing downstream re-parses raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned numeric identifier.
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// Optional display name.
    pub full_name: Option<String>,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Confirmation payload for operations that only acknowledge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation text.
    pub message: String,
}

/// Error body returned on any non-2xx response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

/// The server's `detail` field: either one message or field-level entries.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// A single field-level validation error.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FieldError {
    pub msg: String,
    /// Locator segments; the wire mixes strings and integer indices.
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
}
