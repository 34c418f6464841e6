//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthStore`] is the single owner of the in-memory session. Pages dispatch
//! [`AuthAction`]s; the store applies [`reduce`] and then notifies its
//! [`AuthObserver`]s (token sync, storage persistence), which keeps those
//! side effects out of the transition functions.
//!
//! INVARIANTS
//! ==========
//! `is_authenticated` is recomputed after every transition as
//! `token.is_some() && user.is_some()`. Nothing outside `reduce` assigns it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserRecord;

/// In-memory session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserRecord>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    fn settle(mut self) -> Self {
        self.is_authenticated = self.token.is_some() && self.user.is_some();
        self
    }
}

/// Session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    LoginSuccess { user: UserRecord, token: String },
    Logout,
    SetLoading(bool),
    /// Replace the user record. Ignored while no session token is held.
    UpdateUser(UserRecord),
    /// Same effect as `LoginSuccess`, but sourced from persisted storage.
    SetAuthFromStorage { user: UserRecord, token: String },
}

impl AuthAction {
    /// Short name for logs; never includes token material.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSuccess { .. } => "login_success",
            Self::Logout => "logout",
            Self::SetLoading(_) => "set_loading",
            Self::UpdateUser(_) => "update_user",
            Self::SetAuthFromStorage { .. } => "set_auth_from_storage",
        }
    }
}

/// Apply one transition. Never fails; payloads are not validated.
pub fn reduce(state: AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::LoginSuccess { user, token } | AuthAction::SetAuthFromStorage { user, token } => AuthState {
            user: Some(user.clone()),
            token: Some(token.clone()),
            is_authenticated: true,
            is_loading: false,
        }
        .settle(),
        AuthAction::Logout => AuthState::default(),
        AuthAction::SetLoading(flag) => AuthState { is_loading: *flag, ..state }.settle(),
        AuthAction::UpdateUser(user) => {
            if state.token.is_none() {
                return state;
            }
            AuthState { user: Some(user.clone()), ..state }.settle()
        }
    }
}

/// Callback invoked after each applied transition.
pub trait AuthObserver: Send + Sync {
    fn on_transition(&mut self, action: &AuthAction, state: &AuthState);
}

/// Session owner plus its observers.
#[derive(Default)]
pub struct AuthStore {
    state: AuthState,
    observers: Vec<Box<dyn AuthObserver>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style observer registration.
    #[must_use]
    pub fn with_observer(mut self, observer: impl AuthObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    pub fn subscribe(&mut self, observer: impl AuthObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Apply `action`, then notify observers in registration order.
    pub fn dispatch(&mut self, action: AuthAction) -> &AuthState {
        log::debug!("auth transition: {}", action.name());
        self.state = reduce(std::mem::take(&mut self.state), &action);
        for observer in &mut self.observers {
            observer.on_transition(&action, &self.state);
        }
        &self.state
    }
}
