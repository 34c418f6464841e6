//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route group wraps its pages in `components::session_guard`, which
//! calls [`evaluate`] on each path change with a fresh read of persisted
//! storage. Keeping the decision pure lets the precedence rules be tested
//! without a router.
//!
//! These checks are UX-only. The API enforces access on its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::util::session_store::{SessionStore, StoredUser};

pub const LOGIN_PATH: &str = "/auth/login";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
pub const ACCOUNT_PATH: &str = "/auth/account";

/// Which rules a guard applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardVariant {
    /// No token sends the viewer to login, then the password rules apply.
    RequireLogin,
    /// Only the password-change rules apply.
    PasswordPolicy,
}

/// Lifecycle of a guard for the current path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardStatus {
    #[default]
    Checking,
    Redirecting(&'static str),
    Allowed,
}

/// Outcome of [`evaluate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl From<GuardDecision> for GuardStatus {
    fn from(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Allow => Self::Allowed,
            GuardDecision::Redirect(target) => Self::Redirecting(target),
        }
    }
}

/// Persisted session as seen by a guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub has_token: bool,
    pub user: StoredUser,
}

impl SessionSnapshot {
    pub fn read(store: &SessionStore) -> Self {
        Self { has_token: store.token().is_some(), user: store.user() }
    }
}

/// Decide whether the viewer may see `path`.
///
/// Rules, first match wins:
/// 1. `RequireLogin` without a token, off the login page: go to login.
/// 2. User must change password, off the change-password page: go there.
/// 3. User need not change password, on the change-password page: go to account.
/// 4. Allow.
///
/// A malformed stored user is logged and skips rules 2 and 3.
pub fn evaluate(variant: GuardVariant, session: &SessionSnapshot, path: &str) -> GuardDecision {
    let path = normalize_path(path);

    if variant == GuardVariant::RequireLogin && !session.has_token && path != LOGIN_PATH {
        return GuardDecision::Redirect(LOGIN_PATH);
    }

    let must_change = match &session.user {
        StoredUser::Present(user) => user.must_change_password(),
        StoredUser::Malformed(message) => {
            log::error!("ignoring malformed stored user in route guard: {message}");
            return GuardDecision::Allow;
        }
        StoredUser::Missing => return GuardDecision::Allow,
    };

    if must_change && path != CHANGE_PASSWORD_PATH {
        return GuardDecision::Redirect(CHANGE_PASSWORD_PATH);
    }
    if !must_change && path == CHANGE_PASSWORD_PATH {
        return GuardDecision::Redirect(ACCOUNT_PATH);
    }
    GuardDecision::Allow
}

/// Strip a trailing slash so `/auth/login/` matches `/auth/login`.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
