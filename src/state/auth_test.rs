use super::*;
use crate::net::types::User;

fn sample_user() -> User {
    User {
        id: 1,
        email: "alice@example.com".to_owned(),
        full_name: Some("Alice".to_owned()),
        is_verified: true,
        is_active: true,
    }
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn unresolved_state_is_loading_without_a_user() {
    let state = AuthState::unresolved();
    assert!(state.loading());
    assert!(state.user().is_none());
}

#[test]
fn resolving_drops_loading_with_a_user() {
    let state = AuthState::resolved(Some(sample_user()));
    assert!(!state.loading());
    assert_eq!(state.user().map(|u| u.id), Some(1));
}

#[test]
fn resolving_drops_loading_without_a_user() {
    let state = AuthState::resolved(None);
    assert!(!state.loading());
    assert!(state.user().is_none());
}

// =============================================================
// Session store mutation entry points
// =============================================================

#[test]
fn new_store_starts_unresolved() {
    let session = Session::new();
    assert!(session.loading());
    assert!(session.user().is_none());
}

#[test]
fn resolve_publishes_the_user_and_clears_loading() {
    let session = Session::new();
    session.resolve(Some(sample_user()));
    assert!(!session.loading());
    assert_eq!(session.user().map(|u| u.email), Some("alice@example.com".to_owned()));
}

#[test]
fn set_user_replaces_the_user_without_touching_loading() {
    let session = Session::new();
    session.resolve(None);
    session.set_user(sample_user());
    assert!(!session.loading());
    assert_eq!(session.user().map(|u| u.id), Some(1));
}

#[test]
fn clear_user_leaves_the_store_resolved_anonymous() {
    let session = Session::new();
    session.resolve(Some(sample_user()));
    session.clear_user();
    assert!(session.user().is_none());
    assert!(!session.loading());
}
