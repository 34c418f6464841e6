use super::*;
use crate::net::types::UserRecord;
use crate::state::auth::AuthStore;
use crate::util::session_store::{KeyValueStore, MemoryStorage, StoredUser, TOKEN_KEY, USER_KEY};

fn make_user(must_change: Option<bool>) -> UserRecord {
    UserRecord {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        must_change_password: must_change,
        ..UserRecord::default()
    }
}

fn persisted_store() -> (AuthStore, SessionStore, MemoryStorage) {
    let backend = MemoryStorage::default();
    let session = SessionStore::new(backend.clone());
    let store = AuthStore::new().with_observer(SessionPersistence::new(session.clone()));
    (store, session, backend)
}

#[test]
fn login_writes_token_and_user() {
    let (mut store, session, _) = persisted_store();
    let user = make_user(Some(true));
    store.dispatch(AuthAction::LoginSuccess { user: user.clone(), token: "abc".to_owned() });
    assert_eq!(session.load(), Some((user, "abc".to_owned())));
}

#[test]
fn update_user_rewrites_record() {
    let (mut store, session, _) = persisted_store();
    store.dispatch(AuthAction::LoginSuccess { user: make_user(Some(true)), token: "abc".to_owned() });
    store.dispatch(AuthAction::UpdateUser(make_user(Some(false))));
    assert_eq!(session.user(), StoredUser::Present(make_user(Some(false))));
}

#[test]
fn ignored_update_user_writes_nothing() {
    let (mut store, _, backend) = persisted_store();
    store.dispatch(AuthAction::UpdateUser(make_user(None)));
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn logout_clears_storage() {
    let (mut store, _, backend) = persisted_store();
    store.dispatch(AuthAction::LoginSuccess { user: make_user(None), token: "abc".to_owned() });
    store.dispatch(AuthAction::Logout);
    assert_eq!(backend.get(TOKEN_KEY), None);
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn rehydration_does_not_write_back() {
    let (mut store, _, backend) = persisted_store();
    store.dispatch(AuthAction::SetAuthFromStorage { user: make_user(None), token: "abc".to_owned() });
    assert_eq!(backend.get(TOKEN_KEY), None);
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn failed_writes_do_not_disturb_memory_state() {
    let mut store =
        AuthStore::new().with_observer(SessionPersistence::new(SessionStore::new(RejectingStorage)));
    let state = store.dispatch(AuthAction::LoginSuccess { user: make_user(None), token: "abc".to_owned() });
    assert!(state.is_authenticated);
}

struct RejectingStorage;

impl KeyValueStore for RejectingStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), crate::util::session_store::StorageError> {
        Err(crate::util::session_store::StorageError::Write { key: key.to_owned() })
    }

    fn remove(&self, _key: &str) {}
}
