use super::*;
use crate::net::types::UserRecord;
use crate::util::session_store::{KeyValueStore, MemoryStorage, TOKEN_KEY, USER_KEY};

fn fixture(entries: &[(&str, &str)]) -> (ApiClient, SessionStore, MemoryStorage) {
    let backend = MemoryStorage::default();
    for (key, value) in entries {
        backend.set(key, value).unwrap();
    }
    (ApiClient::default(), SessionStore::new(backend.clone()), backend)
}

#[test]
fn rehydrate_restores_session_and_token() {
    let (api, storage, _) = fixture(&[(TOKEN_KEY, "abc"), (USER_KEY, r#"{"id":1,"name":"Ada"}"#)]);
    let mut store = build_store(&api, &storage);

    let state = rehydrate(&mut store, &storage);

    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
    assert_eq!(api.token().as_deref(), Some("abc"));
}

#[test]
fn rehydrate_migrates_legacy_token() {
    let (api, storage, backend) = fixture(&[("token", "legacy"), (USER_KEY, r#"{"id":1}"#)]);
    let mut store = build_store(&api, &storage);

    let state = rehydrate(&mut store, &storage);

    assert_eq!(state.token.as_deref(), Some("legacy"));
    assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("legacy"));
    assert_eq!(backend.get("token"), None);
}

#[test]
fn rehydrate_without_session_clears_loading() {
    let (api, storage, _) = fixture(&[]);
    let mut store = build_store(&api, &storage);

    let state = rehydrate(&mut store, &storage);

    assert_eq!(state, AuthState::default());
    assert_eq!(api.token(), None);
}

#[test]
fn rehydrate_with_malformed_user_stays_signed_out() {
    let (api, storage, backend) = fixture(&[(TOKEN_KEY, "abc"), (USER_KEY, "{{broken")]);
    let mut store = build_store(&api, &storage);

    let state = rehydrate(&mut store, &storage);

    assert!(!state.is_authenticated);
    assert_eq!(api.token(), None);
    // Not cleared: the guards still see the token and fail open.
    assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn built_store_syncs_both_observers() {
    let (api, storage, _) = fixture(&[]);
    let mut store = build_store(&api, &storage);
    let user = UserRecord { name: "Ada".to_owned(), ..UserRecord::default() };

    store.dispatch(AuthAction::LoginSuccess { user: user.clone(), token: "abc".to_owned() });
    assert_eq!(api.token().as_deref(), Some("abc"));
    assert_eq!(storage.load(), Some((user, "abc".to_owned())));

    store.dispatch(AuthAction::Logout);
    assert_eq!(api.token(), None);
    assert_eq!(storage.load(), None);
}

// =============================================================================
// refreshed_user_action
// =============================================================================

fn restored_fixture(user_json: &str) -> (ApiClient, SessionStore, AuthStore) {
    let (api, storage, _) = fixture(&[(TOKEN_KEY, "abc"), (USER_KEY, user_json)]);
    let mut store = build_store(&api, &storage);
    rehydrate(&mut store, &storage);
    (api, storage, store)
}

#[test]
fn refreshed_user_replaces_stored_record() {
    let (_, storage, mut store) = restored_fixture(r#"{"id":1,"name":"Ada"}"#);
    let fresh = UserRecord { name: "Ada".to_owned(), must_change_password: Some(true), ..UserRecord::default() };

    let action = refreshed_user_action(Ok(fresh.clone())).unwrap();
    assert_eq!(action, AuthAction::UpdateUser(fresh.clone()));
    let state = store.dispatch(action).clone();

    assert_eq!(state.user, Some(fresh.clone()));
    assert_eq!(storage.load(), Some((fresh, "abc".to_owned())));
}

#[test]
fn rejected_token_on_refresh_signs_out() {
    let (api, storage, mut store) = restored_fixture(r#"{"id":1}"#);
    let err = ApiError::Http { status: 401, message: "expired".to_owned() };

    let action = refreshed_user_action(Err(err)).unwrap();
    assert_eq!(action, AuthAction::Logout);
    store.dispatch(action);

    assert_eq!(api.token(), None);
    assert_eq!(storage.load(), None);
}

#[test]
fn failed_refresh_keeps_stored_record() {
    assert_eq!(refreshed_user_action(Err(ApiError::Network("offline".to_owned()))), None);
    assert_eq!(refreshed_user_action(Err(ApiError::Timeout("10s".to_owned()))), None);
    assert_eq!(
        refreshed_user_action(Err(ApiError::Http { status: 500, message: "boom".to_owned() })),
        None
    );
}
