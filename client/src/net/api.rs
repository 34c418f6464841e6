//! REST API adapter for the quiz backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`] holds the bearer token attached to every outgoing request.
//! It never reads session state itself: `state::token_sync` pushes the token
//! in on login/rehydration and clears it on logout. Clones share one token
//! slot, so the copy in Leptos context and the copy held by the observer
//! always agree.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! page behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use super::error::ApiError;
use super::types::{LoginResponse, QuizSummary, UserRecord};
use crate::util::config::ClientConfig;

/// Abort timeout applied to every request.
#[cfg(feature = "hydrate")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
#[cfg(any(test, feature = "hydrate"))]
const MAX_ERROR_CHARS: usize = 200;

const LOGIN_ENDPOINT: &str = "/auth/login";
const LOGOUT_ENDPOINT: &str = "/auth/logout";
const ME_ENDPOINT: &str = "/auth/me";
const CHANGE_PASSWORD_ENDPOINT: &str = "/auth/change-password";
const QUIZZES_ENDPOINT: &str = "/quizzes";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Stateful HTTP client holder.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Client rooted at `base_url`. An empty base means same-origin paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), token: Arc::default() }
    }

    /// Client rooted at the configured API base URL.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Replace the bearer token used by all subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Stop sending a bearer token.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The bearer token currently attached to requests, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute request URL for an API path.
    pub fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    /// `Authorization` header value for the current token.
    pub fn authorization(&self) -> Option<String> {
        self.token().as_deref().and_then(bearer_header)
    }

    /// Exchange credentials for a token via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the
    /// credentials, or the response cannot be decoded.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = LoginRequest { email, password };
            let response = self.send(Verb::Post, LOGIN_ENDPOINT, Some(&body)).await?;
            handle_json_response(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = LoginRequest { email, password };
            Err(ApiError::Unavailable)
        }
    }

    /// Invalidate the token server-side via `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. Callers treat logout as best
    /// effort and clear local state regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send::<()>(Verb::Post, LOGOUT_ENDPOINT, None).await?;
            handle_empty_response(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = LOGOUT_ENDPOINT;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the user behind the current token from `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    pub async fn fetch_me(&self) -> Result<UserRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send::<()>(Verb::Get, ME_ENDPOINT, None).await?;
            handle_json_response(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ME_ENDPOINT;
            Err(ApiError::Unavailable)
        }
    }

    /// Change the current user's password via `POST /auth/change-password`.
    ///
    /// Returns the updated user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// current password.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<UserRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = ChangePasswordRequest { current_password: current, new_password: new };
            let response = self.send(Verb::Post, CHANGE_PASSWORD_ENDPOINT, Some(&body)).await?;
            handle_json_response(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ChangePasswordRequest { current_password: current, new_password: new };
            let _ = CHANGE_PASSWORD_ENDPOINT;
            Err(ApiError::Unavailable)
        }
    }

    /// List quizzes available to the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send::<()>(Verb::Get, QUIZZES_ENDPOINT, None).await?;
            handle_json_response(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = QUIZZES_ENDPOINT;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch one quiz from `GET /quizzes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the quiz does not exist, or the
    /// response cannot be decoded.
    pub async fn get_quiz(&self, id: &str) -> Result<QuizSummary, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send::<()>(Verb::Get, &quiz_endpoint(id), None).await?;
            handle_json_response(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = quiz_endpoint(id);
            Err(ApiError::Unavailable)
        }
    }

    /// Build and send a request with the bearer header and abort timeout.
    #[cfg(feature = "hydrate")]
    async fn send<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let authorization = self.authorization();
        let payload = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| ApiError::Serialization(format!("failed to encode request: {err}")))?;

        let controller = web_sys::AbortController::new()
            .map_err(|_| ApiError::Config("failed to initialize request timeout".to_owned()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = gloo_timers::callback::Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
        };
        builder = builder.abort_signal(Some(&signal));
        if let Some(value) = authorization.as_deref() {
            builder = builder.header("Authorization", value);
        }

        let request = match payload {
            Some(payload) => builder.header("Content-Type", "application/json").body(payload),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Serialization(format!("failed to build request: {err}")))?;

        request.send().await.map_err(map_request_error)
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
}

fn quiz_endpoint(id: &str) -> String {
    format!("{QUIZZES_ENDPOINT}/{}", id.trim())
}

/// Join a base URL and a path without doubling or dropping the slash.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

/// `Bearer <token>`, or `None` for a blank token.
fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() { None } else { Some(format!("Bearer {token}")) }
}

/// Trim and truncate an HTTP error body for display.
#[cfg(any(test, feature = "hydrate"))]
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_request_error(message: String) -> ApiError {
    let lowered = message.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("request timed out, please try again".to_owned())
    } else {
        ApiError::Network(format!("unable to reach the server: {message}"))
    }
}

#[cfg(feature = "hydrate")]
fn map_request_error(err: gloo_net::Error) -> ApiError {
    classify_request_error(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn handle_json_response<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

#[cfg(feature = "hydrate")]
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() { Ok(()) } else { Err(http_error(response).await) }
}

#[cfg(feature = "hydrate")]
async fn http_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http { status, message: sanitize_body(&body) }
}
