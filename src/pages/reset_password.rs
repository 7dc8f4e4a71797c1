//! Reset-password page driven by the emailed token.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::form::{FormError, TextField};
use crate::util::validate::validate_new_password;

/// Shown when the page is opened without a `token` query parameter.
const MISSING_TOKEN_MESSAGE: &str = "Missing reset token. Use the link from your email.";

/// Delay before bouncing back to login after a successful reset, so the
/// user can read the confirmation.
#[cfg(feature = "hydrate")]
const LOGIN_REDIRECT_DELAY_MS: u32 = 2_000;

/// Validate reset input: token present plus the new-password rules.
fn validate_reset_input(token: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if token.is_empty() {
        return Err(MISSING_TOKEN_MESSAGE);
    }
    validate_new_password(password, confirm)
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let token_missing =
        move || query.with(|params| params.get("token").is_none_or(|token| token.is_empty()));

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let token_value = query.get_untracked().get("token").unwrap_or_default();
        if let Err(message) = validate_reset_input(
            &token_value,
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&token_value, &password_value).await {
                    Ok(_) => {
                        success.set(true);
                        gloo_timers::future::TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                        navigate(
                            "/login",
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &token_value;
            busy.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <Show when=move || success.get()>
                <h1>"Password updated"</h1>
                <p>"You can log in with your new password. Redirecting..."</p>
                <p class="auth-page__links">
                    <a href="/login">"Log in"</a>
                </p>
            </Show>
            <Show when=move || !success.get()>
                <h1>"Set new password"</h1>
                <Show when=token_missing>
                    <p class="auth-page__hint">
                        "Use the link from your password reset email. "
                        <a href="/forgot-password">"Request a new link"</a>
                        "."
                    </p>
                </Show>
                <form
                    class="auth-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <TextField
                        label="New password"
                        input_type="password"
                        autocomplete="new-password"
                        value=password
                    />
                    <TextField
                        label="Confirm new password"
                        input_type="password"
                        autocomplete="new-password"
                        value=confirm
                    />
                    <FormError message=error/>
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || busy.get() || token_missing()
                    >
                        {move || if busy.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
                <p class="auth-page__links">
                    <a href="/login">"Back to log in"</a>
                </p>
            </Show>
        </div>
    }
}
