//! Profile page for the signed-in user. Reached only through the route
//! guard, so an absent user renders nothing rather than erroring.

use leptos::prelude::*;

use crate::state::auth::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                session.user().map(|user| {
                    let name = user.full_name.unwrap_or_else(|| "—".to_owned());
                    let verified = if user.is_verified { "Yes" } else { "No" };
                    view! {
                        <p>
                            <strong>"Email: "</strong>
                            {user.email}
                        </p>
                        <p>
                            <strong>"Name: "</strong>
                            {name}
                        </p>
                        <p>
                            <strong>"Verified: "</strong>
                            {verified}
                        </p>
                    }
                })
            }}
        </div>
    }
}
