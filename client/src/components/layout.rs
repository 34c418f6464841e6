//! Route-group layouts.
//!
//! `/auth/*` pages share [`AuthLayout`] (password-policy guard only, so the
//! login page stays reachable). Everything else sits under
//! [`ProtectedLayout`], which requires a stored token.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::components::session_guard::SessionGuard;
use crate::state::session::use_session;
use crate::util::guard::{ACCOUNT_PATH, GuardVariant};

#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <main class="auth-layout">
            <h1 class="auth-layout__brand">"PilotPrep"</h1>
            <SessionGuard variant=GuardVariant::PasswordPolicy>
                <Outlet/>
            </SessionGuard>
        </main>
    }
}

#[component]
pub fn ProtectedLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <NavBar/>
            <main class="app-layout__content">
                <SessionGuard variant=GuardVariant::RequireLogin>
                    <Outlet/>
                </SessionGuard>
            </main>
        </div>
    }
}

/// Top navigation with the signed-in identity.
#[component]
fn NavBar() -> impl IntoView {
    let session = use_session();
    let identity = move || {
        session
            .state
            .get()
            .user
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <A href="/">"Home"</A>
            <A href="/quizzes">"Quizzes"</A>
            <A href="/profile">"Profile"</A>
            <span class="nav-bar__spacer"></span>
            <A href=ACCOUNT_PATH>{identity}</A>
        </nav>
    }
}
