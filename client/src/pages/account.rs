//! Account page: signed-in identity and logout.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sign_out::SignOutButton;
use crate::net::types::UserRecord;
use crate::state::session::use_session;
use crate::util::guard::CHANGE_PASSWORD_PATH;

/// Label/value rows for the account card. Blank fields are left out.
fn account_details(user: &UserRecord) -> Vec<(&'static str, String)> {
    [
        ("Name", Some(user.display_name())),
        ("Email", Some(user.email.as_str())),
        ("Role", user.role.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        let value = value?.trim();
        (!value.is_empty()).then(|| (label, value.to_owned()))
    })
    .collect()
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = use_session();
    let user = move || session.state.get().user;

    view! {
        <div class="account-card">
            <h2>"Account"</h2>
            {move || match user() {
                Some(user) => view! {
                    <dl class="account-card__details">
                        {account_details(&user)
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                }
                .into_any(),
                None => view! { <p>"You are not signed in."</p> }.into_any(),
            }}
            <div class="account-card__actions">
                <A href=CHANGE_PASSWORD_PATH>"Change password"</A>
                <A href="/">"Back to study"</A>
                <SignOutButton/>
            </div>
        </div>
    }
}
