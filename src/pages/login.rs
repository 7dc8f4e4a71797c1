//! Login page establishing the cookie session and honoring `redirect`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::form::{FormError, TextField};
use crate::state::auth::Session;

/// One-time notice shown after arriving from a successful signup.
const REGISTERED_NOTICE: &str = "Account created. Please log in.";

/// Validate login input, trimming the email.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Destination for a successful login, from the `redirect` query parameter.
fn redirect_destination(param: Option<String>) -> String {
    param
        .filter(|target| !target.is_empty())
        .unwrap_or_else(|| "/".to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let from_signup = move || query.with(|params| params.get("registered").is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(input) => input,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let destination = redirect_destination(query.get_untracked().get("redirect"));
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        session.set_user(user);
                        navigate(
                            &destination,
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
            let _ = (&email_value, &password_value, session);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <Show when=from_signup>
                <p class="auth-page__notice">{REGISTERED_NOTICE}</p>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="Email" input_type="email" autocomplete="email" value=email/>
                <TextField
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                />
                <FormError message=error/>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/forgot-password">"Forgot password?"</a>
                " · "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
