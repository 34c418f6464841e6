//! Keeps the API client's bearer token in step with the auth store.
//!
//! Login and rehydration push a non-empty token; logout clears it
//! unconditionally. Every other transition is ignored.

#[cfg(test)]
#[path = "token_sync_test.rs"]
mod token_sync_test;

use crate::net::api::ApiClient;
use crate::state::auth::{AuthAction, AuthObserver, AuthState};

/// [`AuthObserver`] that writes into a shared [`ApiClient`].
#[derive(Clone, Debug)]
pub struct TokenSync {
    api: ApiClient,
}

impl TokenSync {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl AuthObserver for TokenSync {
    fn on_transition(&mut self, action: &AuthAction, _state: &AuthState) {
        match action {
            AuthAction::LoginSuccess { token, .. } | AuthAction::SetAuthFromStorage { token, .. } => {
                if !token.is_empty() {
                    self.api.set_token(token.as_str());
                }
            }
            AuthAction::Logout => self.api.clear_token(),
            AuthAction::SetLoading(_) | AuthAction::UpdateUser(_) => {}
        }
    }
}
