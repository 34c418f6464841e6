use super::*;
use crate::net::api::ApiClient;
use crate::net::types::UserRecord;
use crate::state::auth::AuthAction;
use crate::state::session::build_store;
use crate::util::guard::{CHANGE_PASSWORD_PATH, GuardDecision, GuardVariant, SessionSnapshot, evaluate};
use crate::util::session_store::{MemoryStorage, SessionStore};

#[test]
fn sign_out_leaves_forced_password_change() {
    let storage = SessionStore::new(MemoryStorage::default());
    let mut store = build_store(&ApiClient::default(), &storage);
    let user = UserRecord { must_change_password: Some(true), ..UserRecord::default() };
    store.dispatch(AuthAction::LoginSuccess { user, token: "abc".to_owned() });

    let forced = SessionSnapshot::read(&storage);
    assert_eq!(
        evaluate(GuardVariant::PasswordPolicy, &forced, SIGN_OUT_TARGET),
        GuardDecision::Redirect(CHANGE_PASSWORD_PATH)
    );

    store.dispatch(AuthAction::Logout);

    let signed_out = SessionSnapshot::read(&storage);
    assert_eq!(evaluate(GuardVariant::PasswordPolicy, &signed_out, SIGN_OUT_TARGET), GuardDecision::Allow);
}

#[test]
fn sign_out_lands_on_login() {
    assert_eq!(SIGN_OUT_TARGET, LOGIN_PATH);
}
