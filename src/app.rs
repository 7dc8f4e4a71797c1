//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::layout::Layout;
use crate::pages::{
    forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    reset_password::ResetPasswordPage, signup::SignupPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context, kicks off the single startup
/// "who am I" check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    // One authoritative session check per page load. If the app is torn
    // down before it resolves, the late result is discarded.
    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let cancelled = Rc::new(Cell::new(false));
        on_cleanup({
            let cancelled = Rc::clone(&cancelled);
            move || cancelled.set(true)
        });
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::fetch_current_user().await {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("session check failed: {err}");
                    None
                }
            };
            if !cancelled.get() {
                session.resolve(user);
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-client.css"/>
        <Title text="Auth Template"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProfilePage/>
                                </RequireAuth>
                            }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
