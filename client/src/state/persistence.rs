//! Mirrors auth transitions into persisted storage.
//!
//! Rehydration is deliberately not written back: its data came from storage.
//! Write failures are logged and otherwise ignored, so storage may lag the
//! in-memory session until the next successful write.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use crate::state::auth::{AuthAction, AuthObserver, AuthState};
use crate::util::session_store::SessionStore;

/// [`AuthObserver`] that writes through to a [`SessionStore`].
#[derive(Clone)]
pub struct SessionPersistence {
    store: SessionStore,
}

impl SessionPersistence {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }
}

impl AuthObserver for SessionPersistence {
    fn on_transition(&mut self, action: &AuthAction, state: &AuthState) {
        let result = match action {
            AuthAction::LoginSuccess { user, token } => self.store.save(user, token),
            // Only write when the store actually applied the update.
            AuthAction::UpdateUser(_) => match (&state.token, &state.user) {
                (Some(_), Some(user)) => self.store.save_user(user),
                _ => Ok(()),
            },
            AuthAction::Logout => {
                self.store.clear();
                Ok(())
            }
            AuthAction::SetLoading(_) | AuthAction::SetAuthFromStorage { .. } => Ok(()),
        };
        if let Err(err) = result {
            log::warn!("session persistence after {} failed: {err}", action.name());
        }
    }
}
