//! Networking modules for the HTTP auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the transport contract (cookies, JSON, error normalization),
//! `api` the typed auth endpoints, and `types` the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
