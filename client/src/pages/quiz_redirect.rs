//! `/quiz/:id` short link.
//!
//! Looks the quiz up and forwards to its detail page. Any lookup failure is
//! logged and lands on the quiz list instead of an error screen.

#[cfg(test)]
#[path = "quiz_redirect_test.rs"]
mod quiz_redirect_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::QuizSummary;
#[cfg(any(test, feature = "hydrate"))]
use crate::pages::quizzes::quiz_detail_path;
use crate::state::session::use_session;

/// Fallback when the quiz can't be resolved.
pub const QUIZ_FALLBACK_PATH: &str = "/quizzes";

/// The id to look up, or `None` when the route parameter is blank.
#[cfg(any(test, feature = "hydrate"))]
fn requested_quiz_id(raw: &str) -> Option<&str> {
    let id = raw.trim();
    if id.is_empty() {
        log::warn!("quiz short link without an id, falling back to list");
        return None;
    }
    Some(id)
}

#[cfg(any(test, feature = "hydrate"))]
fn quiz_redirect_target(requested_id: &str, result: &Result<QuizSummary, ApiError>) -> String {
    match result {
        Ok(quiz) => quiz_detail_path(&quiz.id.to_string()),
        Err(err) => {
            log::error!("quiz {requested_id} lookup failed, falling back to list: {err}");
            QUIZ_FALLBACK_PATH.to_owned()
        }
    }
}

#[component]
pub fn QuizRedirectPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    Effect::new(move || {
        let id = params.with(|p| p.get("id").map(|id| id.to_string()).unwrap_or_default());
        #[cfg(feature = "hydrate")]
        {
            let replace = NavigateOptions { replace: true, ..NavigateOptions::default() };
            let Some(quiz_id) = requested_quiz_id(&id).map(str::to_owned) else {
                navigate(QUIZ_FALLBACK_PATH, replace);
                return;
            };
            let api = session.api();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.get_quiz(&quiz_id).await;
                navigate(&quiz_redirect_target(&quiz_id, &result), replace);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, session);
        }
    });

    view! { <p class="quiz-redirect">"Opening quiz..."</p> }
}
