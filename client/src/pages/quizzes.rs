//! Quiz list and quiz detail pages.
//!
//! ERROR HANDLING
//! ==============
//! A 401 means the stored token is no longer accepted; the page dispatches
//! `Logout`, which clears storage and lets the route guard send the viewer
//! to login.

#[cfg(test)]
#[path = "quizzes_test.rs"]
mod quizzes_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;
use crate::net::types::QuizSummary;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthAction;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionContext;
use crate::state::session::use_session;

/// Path of the detail page for a quiz id.
pub fn quiz_detail_path(id: &str) -> String {
    format!("/quizzes/{}", id.trim())
}

fn question_count_label(count: u32) -> String {
    match count {
        0 => "No questions yet".to_owned(),
        1 => "1 question".to_owned(),
        n => format!("{n} questions"),
    }
}

#[cfg(feature = "hydrate")]
fn handle_unauthorized(session: SessionContext, err: &ApiError) {
    if err.is_unauthorized() {
        log::info!("API rejected the stored token; signing out");
        session.dispatch(AuthAction::Logout);
    }
}

#[component]
pub fn QuizListPage() -> impl IntoView {
    let session = use_session();
    let quizzes = RwSignal::new(None::<Result<Vec<QuizSummary>, ApiError>>);

    #[cfg(feature = "hydrate")]
    {
        let api = session.api();
        leptos::task::spawn_local(async move {
            let result = api.list_quizzes().await;
            if let Err(err) = &result {
                handle_unauthorized(session, err);
            }
            quizzes.set(Some(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <section class="quiz-list">
            <h2>"Quizzes"</h2>
            {move || match quizzes.get() {
                None => view! { <p>"Loading quizzes..."</p> }.into_any(),
                Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p>"No quizzes available yet."</p> }.into_any(),
                Some(Ok(list)) => view! {
                    <ul>
                        {list
                            .into_iter()
                            .map(|quiz| {
                                let href = quiz_detail_path(&quiz.id.to_string());
                                view! {
                                    <li>
                                        <A href=href>{quiz.title}</A>
                                        " "
                                        <span class="quiz-list__count">
                                            {question_count_label(quiz.question_count)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
pub fn QuizDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let quiz = RwSignal::new(None::<Result<QuizSummary, ApiError>>);

    Effect::new(move || {
        let id = params.with(|p| p.get("id").map(|id| id.to_string()).unwrap_or_default());
        quiz.set(None);
        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            leptos::task::spawn_local(async move {
                let result = api.get_quiz(&id).await;
                if let Err(err) = &result {
                    handle_unauthorized(session, err);
                }
                quiz.set(Some(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, session);
        }
    });

    view! {
        <section class="quiz-detail">
            {move || match quiz.get() {
                None => view! { <p>"Loading quiz..."</p> }.into_any(),
                Some(Err(err)) => view! {
                    <p class="error">{err.to_string()}</p>
                    <A href="/quizzes">"Back to quizzes"</A>
                }
                .into_any(),
                Some(Ok(quiz)) => view! {
                    <h2>{quiz.title}</h2>
                    <p>{quiz.description.unwrap_or_default()}</p>
                    <p class="quiz-detail__count">{question_count_label(quiz.question_count)}</p>
                    <A href="/quizzes">"Back to quizzes"</A>
                }
                .into_any(),
            }}
        </section>
    }
}
