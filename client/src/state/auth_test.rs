use super::*;
use std::sync::{Arc, Mutex};

fn make_user(name: &str) -> UserRecord {
    UserRecord { name: name.to_owned(), email: format!("{name}@example.com"), ..UserRecord::default() }
}

fn logged_in() -> AuthState {
    reduce(AuthState::default(), &AuthAction::LoginSuccess { user: make_user("ada"), token: "abc".to_owned() })
}

fn invariant_holds(state: &AuthState) -> bool {
    state.is_authenticated == (state.token.is_some() && state.user.is_some())
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_empty() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_success_sets_all_fields() {
    let loading = reduce(AuthState::default(), &AuthAction::SetLoading(true));
    let state = reduce(loading, &AuthAction::LoginSuccess { user: make_user("ada"), token: "abc".to_owned() });
    assert_eq!(state.user, Some(make_user("ada")));
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
}

#[test]
fn rehydration_matches_login_result() {
    let from_storage = reduce(
        AuthState::default(),
        &AuthAction::SetAuthFromStorage { user: make_user("ada"), token: "abc".to_owned() },
    );
    assert_eq!(from_storage, logged_in());
}

#[test]
fn logout_clears_session() {
    let state = reduce(logged_in(), &AuthAction::Logout);
    assert_eq!(state, AuthState::default());
}

#[test]
fn set_loading_touches_only_loading() {
    let state = reduce(logged_in(), &AuthAction::SetLoading(true));
    assert!(state.is_loading);
    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("abc"));
}

#[test]
fn update_user_replaces_user_only() {
    let state = reduce(logged_in(), &AuthAction::UpdateUser(make_user("grace")));
    assert_eq!(state.user, Some(make_user("grace")));
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(state.is_authenticated);
}

#[test]
fn update_user_without_session_is_ignored() {
    let state = reduce(AuthState::default(), &AuthAction::UpdateUser(make_user("grace")));
    assert_eq!(state, AuthState::default());
}

// =============================================================
// Invariants over sequences
// =============================================================

fn all_actions() -> Vec<AuthAction> {
    vec![
        AuthAction::LoginSuccess { user: make_user("ada"), token: "abc".to_owned() },
        AuthAction::Logout,
        AuthAction::SetLoading(true),
        AuthAction::SetLoading(false),
        AuthAction::UpdateUser(make_user("grace")),
        AuthAction::SetAuthFromStorage { user: make_user("hopper"), token: "xyz".to_owned() },
    ]
}

#[test]
fn authenticated_flag_tracks_token_and_user_for_all_pairs() {
    for first in all_actions() {
        for second in all_actions() {
            let state = reduce(reduce(AuthState::default(), &first), &second);
            assert!(invariant_holds(&state), "{first:?} then {second:?} gave {state:?}");
        }
    }
}

#[test]
fn logout_is_not_undone_by_non_login_transitions() {
    let non_login = [
        AuthAction::SetLoading(true),
        AuthAction::UpdateUser(make_user("grace")),
        AuthAction::SetLoading(false),
        AuthAction::Logout,
    ];
    let mut state = reduce(logged_in(), &AuthAction::Logout);
    for action in &non_login {
        state = reduce(state, action);
        assert!(state.token.is_none(), "{action:?} re-set token");
        assert!(state.user.is_none(), "{action:?} re-set user");
    }
}

// =============================================================
// AuthStore
// =============================================================

#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<(&'static str, bool)>>>,
}

impl AuthObserver for Recorder {
    fn on_transition(&mut self, action: &AuthAction, state: &AuthState) {
        self.seen.lock().unwrap().push((action.name(), state.is_authenticated));
    }
}

#[test]
fn store_notifies_observers_after_applying() {
    let recorder = Recorder::default();
    let mut store = AuthStore::new().with_observer(recorder.clone());
    store.dispatch(AuthAction::LoginSuccess { user: make_user("ada"), token: "abc".to_owned() });
    store.dispatch(AuthAction::Logout);
    assert_eq!(*recorder.seen.lock().unwrap(), vec![("login_success", true), ("logout", false)]);
}

#[test]
fn store_notifies_every_observer_in_order() {
    let first = Recorder::default();
    let second = Recorder::default();
    let mut store = AuthStore::new();
    store.subscribe(first.clone());
    store.subscribe(second.clone());
    store.dispatch(AuthAction::SetLoading(true));
    assert_eq!(first.seen.lock().unwrap().len(), 1);
    assert_eq!(second.seen.lock().unwrap().len(), 1);
    assert!(store.state().is_loading);
}

#[test]
fn action_names_are_stable() {
    let names: Vec<_> = all_actions().iter().map(AuthAction::name).collect();
    assert_eq!(
        names,
        ["login_success", "logout", "set_loading", "set_loading", "update_user", "set_auth_from_storage"]
    );
}
