//! Signup page creating an account without auto-authenticating.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::form::{FormError, TextField};
use crate::util::validate::validate_new_password;

/// Validated registration input, ready for the register endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterInput {
    email: String,
    full_name: Option<String>,
    password: String,
}

/// Validate signup input: required email, the password rules, and an
/// optional display name that is trimmed and omitted when empty.
fn validate_signup_input(
    email: &str,
    full_name: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    validate_new_password(password, confirm)?;
    let full_name = full_name.trim();
    Ok(RegisterInput {
        email: email.to_owned(),
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let input = match validate_signup_input(
            &email.get(),
            &full_name.get(),
            &password.get(),
            &confirm.get(),
        ) {
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
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(
                    &input.email,
                    &input.password,
                    input.full_name.as_deref(),
                )
                .await;
                match result {
                    Ok(_) => {
                        // Hand off to login with the one-time confirmation notice.
                        navigate(
                            "/login?registered=1",
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
            let _ = &input;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Sign up"</h1>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="Email" input_type="email" autocomplete="email" value=email/>
                <TextField label="Full name (optional)" autocomplete="name" value=full_name/>
                <TextField
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                />
                <TextField
                    label="Confirm password"
                    input_type="password"
                    autocomplete="new-password"
                    value=confirm
                />
                <FormError message=error/>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/login">"Already have an account? Log in"</a>
            </p>
        </div>
    }
}
