//! Authenticated landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .state
            .get()
            .user
            .map(|user| format!("Welcome back, {}.", user.display_name()))
            .unwrap_or_else(|| "Welcome.".to_owned())
    };

    view! {
        <section class="home">
            <h2>{greeting}</h2>
            <p>"Practice exams for maritime pilot certification."</p>
            <A href="/quizzes">"Browse quizzes"</A>
        </section>
    }
}
