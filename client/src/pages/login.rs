//! Login page: email + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::UserRecord;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthAction;
use crate::state::session::use_session;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::guard::CHANGE_PASSWORD_PATH;

/// Trim and require both credentials.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where a freshly signed-in user lands.
#[cfg(any(test, feature = "hydrate"))]
fn post_login_target(user: &UserRecord) -> &'static str {
    if user.must_change_password() { CHANGE_PASSWORD_PATH } else { "/" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.login(&email_value, &password_value).await {
                    Ok(response) => {
                        let target = post_login_target(&response.user);
                        session.dispatch(AuthAction::LoginSuccess { user: response.user, token: response.token });
                        password.set(String::new());
                        info.set(String::new());
                        navigate(target, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        info.set(format!("Sign-in failed: {err}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, email_value, password_value);
        }
    };

    view! {
        <div class="login-card">
            <p class="login-card__subtitle">"Sign in to continue your pilot exam prep"</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
