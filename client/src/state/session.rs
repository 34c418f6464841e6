//! Leptos wiring for the auth store.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionProvider`] builds one [`AuthStore`] per app with its observers
//! (token sync, storage persistence), provides a [`SessionContext`] handle,
//! and rehydrates from storage once mounted. Pages dispatch through the
//! handle; components read the `state` signal.
//!
//! After rehydration the stored user record is refreshed from `GET /auth/me`
//! so the guards act on the server's current password flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::UserRecord;
use crate::state::auth::{AuthAction, AuthState, AuthStore};
use crate::state::persistence::SessionPersistence;
use crate::state::token_sync::TokenSync;
use crate::util::config::ClientConfig;
use crate::util::session_store::SessionStore;

/// Build a store whose observers keep `api` and `storage` in step.
pub fn build_store(api: &ApiClient, storage: &SessionStore) -> AuthStore {
    AuthStore::new()
        .with_observer(TokenSync::new(api.clone()))
        .with_observer(SessionPersistence::new(storage.clone()))
}

/// Restore a persisted session into `store`.
///
/// Legacy token keys are migrated first. Loading is flagged for the
/// duration; a missing or unreadable session just clears the flag.
pub fn rehydrate(store: &mut AuthStore, storage: &SessionStore) -> AuthState {
    storage.migrate_legacy();
    store.dispatch(AuthAction::SetLoading(true));
    match storage.load() {
        Some((user, token)) => store.dispatch(AuthAction::SetAuthFromStorage { user, token }).clone(),
        None => store.dispatch(AuthAction::SetLoading(false)).clone(),
    }
}

/// Transition for a `GET /auth/me` result.
///
/// A fresh record replaces the stored one and a rejected token ends the
/// session. Any other failure keeps what storage had.
#[cfg(any(test, feature = "hydrate"))]
pub fn refreshed_user_action(result: Result<UserRecord, ApiError>) -> Option<AuthAction> {
    match result {
        Ok(user) => Some(AuthAction::UpdateUser(user)),
        Err(err) if err.is_unauthorized() => {
            log::warn!("stored token rejected on refresh, signing out: {err}");
            Some(AuthAction::Logout)
        }
        Err(err) => {
            log::warn!("user refresh failed, keeping stored record: {err}");
            None
        }
    }
}

/// Copyable handle to the app's session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Reactive mirror of the store's state, updated after every dispatch.
    pub state: RwSignal<AuthState>,
    store: StoredValue<AuthStore>,
    api: StoredValue<ApiClient>,
    storage: StoredValue<SessionStore>,
}

impl SessionContext {
    pub fn new(api: ApiClient, storage: SessionStore) -> Self {
        let store = build_store(&api, &storage);
        Self {
            state: RwSignal::new(store.state().clone()),
            store: StoredValue::new(store),
            api: StoredValue::new(api),
            storage: StoredValue::new(storage),
        }
    }

    /// Apply a transition and publish the new state.
    pub fn dispatch(&self, action: AuthAction) {
        if let Some(next) = self.store.try_update_value(|store| store.dispatch(action).clone()) {
            self.state.set(next);
        }
    }

    /// Load the persisted session into memory.
    pub fn rehydrate(&self) {
        let storage = self.storage();
        if let Some(next) = self.store.try_update_value(|store| rehydrate(store, &storage)) {
            self.state.set(next);
        }
    }

    /// Re-fetch the signed-in user in the background.
    #[cfg(feature = "hydrate")]
    pub fn refresh_user(&self) {
        if self.state.get_untracked().token.is_none() {
            return;
        }
        let session = *self;
        let api = self.api();
        leptos::task::spawn_local(async move {
            if let Some(action) = refreshed_user_action(api.fetch_me().await) {
                session.dispatch(action);
            }
        });
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn storage(&self) -> SessionStore {
        self.storage.get_value()
    }
}

/// Provides the session context and rehydrates once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let config = ClientConfig::load();
    let session = SessionContext::new(ApiClient::from_config(&config), SessionStore::browser());
    provide_context(session);

    // Effects only run in the browser, so server renders stay empty.
    Effect::new(move |_| {
        session.rehydrate();
        #[cfg(feature = "hydrate")]
        session.refresh_user();
    });

    view! { {children()} }
}

/// The session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
