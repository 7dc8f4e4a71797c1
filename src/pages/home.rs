//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            {move || match session.user() {
                Some(user) => view! {
                    <p>
                        "Signed in as " <strong>{user.email}</strong> ". "
                        <a href="/profile">"Go to profile"</a>
                        "."
                    </p>
                }
                    .into_any(),
                None => view! {
                    <p>
                        <a href="/login">"Log in"</a>
                        " or "
                        <a href="/signup">"Sign up"</a>
                        "."
                    </p>
                }
                    .into_any(),
            }}
        </div>
    }
}
