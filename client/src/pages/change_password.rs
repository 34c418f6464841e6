//! Forced/optional password change page.
//!
//! On success the returned user record (with the change flag cleared) goes
//! through `UpdateUser`, which also rewrites the stored copy the guards read.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::sign_out::SignOutButton;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::UserRecord;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthAction;
use crate::state::session::use_session;
#[cfg(feature = "hydrate")]
use crate::util::guard::ACCOUNT_PATH;

const MIN_PASSWORD_CHARS: usize = 8;

fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() {
        return Err("Enter your current and new password.");
    }
    if new.chars().count() < MIN_PASSWORD_CHARS {
        return Err("New password must be at least 8 characters.");
    }
    if new == current {
        return Err("New password must differ from the current one.");
    }
    if new != confirm {
        return Err("New passwords do not match.");
    }
    Ok(())
}

/// The record to keep after a successful change.
#[cfg(any(test, feature = "hydrate"))]
fn password_changed(mut user: UserRecord) -> UserRecord {
    user.must_change_password = Some(false);
    user
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = use_session();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let forced = move || session.state.get().user.is_some_and(|user| user.must_change_password());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (current_value, new_value) = (current.get(), new.get());
        if let Err(message) = validate_password_change(&current_value, &new_value, &confirm.get()) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.change_password(&current_value, &new_value).await {
                    Ok(user) => {
                        session.dispatch(AuthAction::UpdateUser(password_changed(user)));
                        for field in [current, new, confirm] {
                            field.set(String::new());
                        }
                        info.set(String::new());
                        navigate(ACCOUNT_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("password change failed: {err}");
                        info.set(format!("Password change failed: {err}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, current_value, new_value);
        }
    };

    view! {
        <div class="login-card">
            <h2>"Change password"</h2>
            <Show when=forced>
                <p class="login-message">"Your administrator requires a new password before you continue."</p>
            </Show>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="password"
                    placeholder="Current password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || new.get()
                    on:input=move |ev| new.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Confirm new password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Update Password"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
            <div class="account-card__actions">
                <SignOutButton/>
            </div>
        </div>
    }
}
