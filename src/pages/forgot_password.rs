//! Forgot-password page. The confirmation never reveals whether the address
//! is registered.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::components::form::{FormError, TextField};

/// Validate the request input, trimming the email.
fn validate_forgot_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let email_value = match validate_forgot_input(&email.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&email_value).await {
                Ok(_) => sent.set(true),
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &email_value;
            busy.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <Show when=move || sent.get()>
                <h1>"Check your email"</h1>
                <p>"If that email is registered, you will receive a password reset link."</p>
                <p class="auth-page__links">
                    <a href="/login">"Back to log in"</a>
                </p>
            </Show>
            <Show when=move || !sent.get()>
                <h1>"Forgot password"</h1>
                <form
                    class="auth-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <TextField label="Email" input_type="email" autocomplete="email" value=email/>
                    <FormError message=error/>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                <p class="auth-page__links">
                    <a href="/login">"Back to log in"</a>
                </p>
            </Show>
        </div>
    }
}
