//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The server's session cookie
//! is httpOnly and unreadable from here, so this store tracks the client's
//! believed state: reconciled once at startup via `/auth/me`, then updated
//! optimistically on login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::User;

/// Believed session state: the current user plus the initial-check flag.
///
/// `loading` is true only until the first "who am I" call resolves; it never
/// goes back up for the lifetime of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    user: Option<User>,
    loading: bool,
}

impl AuthState {
    /// State before the initial session check has resolved.
    pub fn unresolved() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// State after a session check resolved to `user`.
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// The current user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the initial session check is still outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }
}

/// Context handle over the process-wide session store.
///
/// Cheap to copy; every copy observes and mutates the same state. Mutation
/// goes through the named entry points below, nothing else writes.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Session {
    /// Create a store in the unresolved state.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::unresolved()),
        }
    }

    /// Reactive snapshot of the full state.
    pub fn snapshot(&self) -> AuthState {
        self.state.get()
    }

    /// Reactive read of the current user.
    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user.clone())
    }

    /// Whether the initial session check is still outstanding.
    pub fn loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    /// Record the outcome of the initial session check. Drops the loading
    /// flag unconditionally, even when the check failed and `user` is
    /// `None`, so the UI can never hang in a pending state.
    pub fn resolve(&self, user: Option<User>) {
        self.state.set(AuthState::resolved(user));
    }

    /// Replace the current user after a server-confirmed login or
    /// registration.
    pub fn set_user(&self, user: User) {
        self.state.update(|state| state.user = Some(user));
    }

    /// Drop the current user locally.
    pub fn clear_user(&self) {
        self.state.update(|state| state.user = None);
    }

    /// Best-effort server logout. Local state is cleared even when the
    /// request fails, so the client never believes in a session the user
    /// asked to end; the endpoint's outcome is returned for callers that
    /// want to surface it.
    ///
    /// # Errors
    ///
    /// Returns the logout endpoint's error after clearing local state.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = api::logout().await;
        self.clear_user();
        result.map(|_| ())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
