//! Gate component admitting only authenticated users.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::Session;
use crate::util::auth::{login_redirect_target, should_redirect_unauth};

/// Render children only for an authenticated session.
///
/// While the initial session check is outstanding this shows a neutral
/// pending indicator; once resolved anonymous it redirects to the login
/// flow carrying the requested location in the `redirect` parameter.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    move || {
        let state = session.snapshot();
        if state.loading() {
            view! { <p class="route-guard__pending">"Loading..."</p> }.into_any()
        } else if should_redirect_unauth(&state) {
            let target =
                login_redirect_target(&location.pathname.get(), &location.search.get());
            view! { <Redirect path=target/> }.into_any()
        } else {
            children().into_any()
        }
    }
}
