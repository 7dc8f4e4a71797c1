//! Page chrome: header with session-aware navigation, content outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::state::auth::Session;

/// Shared layout for every route: brand link, login/logout navigation, and
/// the routed page below.
#[component]
pub fn Layout() -> impl IntoView {
    let session = expect_context::<Session>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(err) = session.logout().await {
                    log::warn!("logout request failed: {err}");
                }
                // Navigate to login via window.location for a clean state.
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <a class="layout__brand" href="/">
                    "Auth Template"
                </a>
                <nav class="layout__nav">
                    <Show when=move || session.user().is_some()>
                        <a href="/profile">"Profile"</a>
                        <button class="layout__logout" type="button" on:click=on_logout>
                            "Log out"
                        </button>
                    </Show>
                    <Show when=move || session.user().is_none()>
                        <a href="/login">"Log in"</a>
                        <a href="/signup">"Sign up"</a>
                    </Show>
                </nav>
            </header>
            <main class="layout__main">
                <Outlet/>
            </main>
        </div>
    }
}
