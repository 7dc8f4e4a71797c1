//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards should apply identical unauthenticated redirect behavior,
//! and the redirect must survive a round trip through the login flow.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;
use crate::util::urlencode::encode_component;

/// Whether the guard should bounce to login: the initial session check has
/// finished and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading() && state.user().is_none()
}

/// Login URL carrying the originally requested location so the login flow
/// can return there afterward. The target is percent-encoded as one opaque
/// `redirect` parameter value.
///
/// `search` may arrive with or without its leading `?`.
pub fn login_redirect_target(pathname: &str, search: &str) -> String {
    let requested = if search.is_empty() {
        pathname.to_owned()
    } else if let Some(query) = search.strip_prefix('?') {
        format!("{pathname}?{query}")
    } else {
        format!("{pathname}?{search}")
    };
    format!("/login?redirect={}", encode_component(&requested))
}
