//! Profile page showing the in-memory session user.

use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="profile">
            <h2>"Profile"</h2>
            {move || {
                let state = session.state.get();
                match state.user {
                    Some(user) => view! {
                        <p class="profile__name">{user.display_name().to_owned()}</p>
                        <p class="profile__email">{user.email.clone()}</p>
                        <p class="profile__id">"Member #" {user.id.to_string()}</p>
                    }
                    .into_any(),
                    None if state.is_loading => view! { <p>"Loading profile..."</p> }.into_any(),
                    None => view! { <p>"No profile loaded."</p> }.into_any(),
                }
            }}
        </section>
    }
}
