//! Email-verification page. Runs its one API call automatically on load,
//! using the token from the URL.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Shown when the page is opened without a `token` query parameter.
const MISSING_TOKEN_MESSAGE: &str = "Missing verification token.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerifyStatus {
    Pending,
    Verified,
    Failed,
}

/// Extract the verification token, treating absence as a local error.
fn token_from_query(param: Option<String>) -> Result<String, &'static str> {
    match param {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(MISSING_TOKEN_MESSAGE),
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let status = RwSignal::new(VerifyStatus::Pending);
    let message = RwSignal::new(String::new());

    match token_from_query(use_query_map().get_untracked().get("token")) {
        Err(local_error) => {
            status.set(VerifyStatus::Failed);
            message.set(local_error.to_owned());
        }
        Ok(token) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_email(&token).await {
                    Ok(confirmation) => {
                        status.set(VerifyStatus::Verified);
                        message.set(confirmation.message);
                    }
                    Err(err) => {
                        status.set(VerifyStatus::Failed);
                        message.set(err.to_string());
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = token;
        }
    }

    let message_class = move || {
        if status.get() == VerifyStatus::Verified {
            "auth-page__notice"
        } else {
            "form__error"
        }
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || status.get() != VerifyStatus::Pending
                fallback=|| view! { <p>"Verifying your email..."</p> }
            >
                <h1>"Email verification"</h1>
                <p class=message_class>{move || message.get()}</p>
                <p class="auth-page__links">
                    <a href="/login">"Log in"</a>
                </p>
            </Show>
        </div>
    }
}
