//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::{AuthLayout, ProtectedLayout};
use crate::pages::{
    account::AccountPage, change_password::ChangePasswordPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, profile::ProfilePage, quiz_redirect::QuizRedirectPage,
    quizzes::{QuizDetailPage, QuizListPage},
};
use crate::state::session::SessionProvider;

/// Script served by the host that assigns `window.PILOTPREP_CONFIG`.
pub const RUNTIME_CONFIG_SCRIPT: &str = "/app-config.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=RUNTIME_CONFIG_SCRIPT></script>
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/pilotprep.css"/>
        <Title text="PilotPrep"/>

        <SessionProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <ParentRoute path=path!("/auth") view=AuthLayout>
                        <Route path=path!("login") view=LoginPage/>
                        <Route path=path!("change-password") view=ChangePasswordPage/>
                        <Route path=path!("account") view=AccountPage/>
                    </ParentRoute>
                    <ParentRoute path=path!("") view=ProtectedLayout>
                        <Route path=path!("") view=HomePage/>
                        <Route path=path!("profile") view=ProfilePage/>
                        <Route path=path!("quizzes") view=QuizListPage/>
                        <Route path=path!("quizzes/:id") view=QuizDetailPage/>
                        <Route path=path!("quiz/:id") view=QuizRedirectPage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
