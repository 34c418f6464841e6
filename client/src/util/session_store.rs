//! Typed access to the persisted session (token + user record).
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards read this on every navigation and `state::persistence` writes it on
//! login/logout. It is the only code that knows the storage key names.
//!
//! KEYS
//! ====
//! `auth_token` and `auth_user` are canonical. Older builds wrote the token
//! under `token` or `admin_token`; [`SessionStore::migrate_legacy`] folds
//! those into `auth_token` once at startup and deletes them.
//!
//! TRADE-OFFS
//! ==========
//! Storage is not transactional with in-memory state. A failed write leaves
//! the two copies out of step until the next successful write or logout.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::UserRecord;

/// Canonical bearer token key.
pub const TOKEN_KEY: &str = "auth_token";
/// Canonical serialized user record key.
pub const USER_KEY: &str = "auth_user";
/// Token keys written by older builds, in migration priority order.
pub const LEGACY_TOKEN_KEYS: [&str; 2] = ["token", "admin_token"];

/// Failure writing to persisted storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists (server render, private mode, etc.).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota, permissions).
    #[error("failed to write storage key {key}")]
    Write { key: String },

    /// The value could not be serialized.
    #[error("failed to encode {key}: {message}")]
    Encode { key: String, message: String },
}

/// Minimal string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend is missing or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Without the `hydrate` feature it behaves as an
/// absent store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Result of reading the persisted user record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredUser {
    Missing,
    /// Present but unparseable; carries the parser message.
    Malformed(String),
    Present(UserRecord),
}

impl StoredUser {
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Present(user) => Some(user),
            Self::Missing | Self::Malformed(_) => None,
        }
    }
}

/// Session view over a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// The persisted bearer token, ignoring blank values.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    pub fn user(&self) -> StoredUser {
        match self.backend.get(USER_KEY) {
            None => StoredUser::Missing,
            Some(raw) => match serde_json::from_str::<UserRecord>(&raw) {
                Ok(user) => StoredUser::Present(user),
                Err(err) => StoredUser::Malformed(err.to_string()),
            },
        }
    }

    /// Token and user together, as needed for rehydration. A malformed user
    /// record is logged and yields `None`.
    pub fn load(&self) -> Option<(UserRecord, String)> {
        let token = self.token()?;
        match self.user() {
            StoredUser::Present(user) => Some((user, token)),
            StoredUser::Malformed(message) => {
                log::error!("stored user record is malformed: {message}");
                None
            }
            StoredUser::Missing => None,
        }
    }

    /// Persist a freshly authenticated session.
    ///
    /// # Errors
    ///
    /// Returns the first failed write. The token is written first, so a
    /// failure on the user record leaves the token in place.
    pub fn save(&self, user: &UserRecord, token: &str) -> Result<(), StorageError> {
        self.backend.set(TOKEN_KEY, token)?;
        self.save_user(user)
    }

    /// Rewrite the user record only.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    pub fn save_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)
            .map_err(|err| StorageError::Encode { key: USER_KEY.to_owned(), message: err.to_string() })?;
        self.backend.set(USER_KEY, &raw)
    }

    /// Remove every session key, legacy ones included.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        for key in LEGACY_TOKEN_KEYS {
            self.backend.remove(key);
        }
    }

    /// Fold legacy token keys into [`TOKEN_KEY`].
    ///
    /// When no canonical token exists, the first non-blank legacy value is
    /// copied over. Legacy keys are removed either way, unless the copy
    /// failed. Returns the legacy key that was migrated, if any.
    pub fn migrate_legacy(&self) -> Option<&'static str> {
        let mut migrated = None;
        if self.token().is_none() {
            for key in LEGACY_TOKEN_KEYS {
                let Some(value) = self.backend.get(key).filter(|v| !v.trim().is_empty()) else {
                    continue;
                };
                if let Err(err) = self.backend.set(TOKEN_KEY, &value) {
                    log::warn!("legacy token migration from {key} failed: {err}");
                    return None;
                }
                migrated = Some(key);
                break;
            }
        }
        for key in LEGACY_TOKEN_KEYS {
            self.backend.remove(key);
        }
        if let Some(key) = migrated {
            log::info!("migrated legacy session token from {key}");
        }
        migrated
    }
}
