//! Sign-out button shared by the account and change-password pages.
//!
//! The server logout needs the bearer token, so it goes out before the local
//! `Logout` clears it. A failed server call still signs out locally.

#[cfg(test)]
#[path = "sign_out_test.rs"]
mod sign_out_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthAction;
use crate::state::session::use_session;
use crate::util::guard::LOGIN_PATH;

/// Where the viewer lands after signing out.
pub const SIGN_OUT_TARGET: &str = LOGIN_PATH;

#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = use_session();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = api.logout().await {
                    log::warn!("server logout failed, clearing local session anyway: {err}");
                }
                session.dispatch(AuthAction::Logout);
                busy.set(false);
                navigate(SIGN_OUT_TARGET, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <button class="login-button" on:click=on_click disabled=move || busy.get()>
            "Sign Out"
        </button>
    }
}
