use client::guard::{self, GuardDecision};
use client::nav::{BASE_MENU, USERS_ITEM};
use client::token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use client::{NavState, NavigationGate, TokenStore};
use pretty_assertions::assert_eq;

use crate::common::{spawn_backend, ACCESS, REFRESH};

#[tokio::test]
async fn no_stored_token_is_signed_out_without_request() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let state = NavigationGate::new(api).resolve().await;

    assert_eq!(state, NavState::SignedOut);
    assert_eq!(server.backend.total_hits(), 0);
}

#[tokio::test]
async fn owner_sees_users_item() {
    let server = spawn_backend().await;
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, ACCESS)]);

    let state = NavigationGate::new(api.clone()).resolve().await;

    assert_eq!(state.user().map(|u| u.username.as_str()), Some("ravi"));
    assert_eq!(state.items().len(), BASE_MENU.len() + 1);
    assert!(state.items().contains(&USERS_ITEM));
    assert_eq!(server.backend.hits("GET /accounts/users/me/"), 1);
    assert!(api.session().user().is_some());
}

#[tokio::test]
async fn accountant_gets_base_menu_only() {
    let server = spawn_backend().await;
    server.backend.set_role("accountant");
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, ACCESS)]);

    let state = NavigationGate::new(api).resolve().await;

    assert_eq!(state.items(), BASE_MENU);
    assert!(!state.items().contains(&USERS_ITEM));
}

#[tokio::test]
async fn rejected_token_without_refresh_signs_out_but_keeps_persisted_token() {
    let server = spawn_backend().await;
    let (api, store) = server.client_with(&[(ACCESS_TOKEN_KEY, "expired")]);

    let state = NavigationGate::new(api.clone()).resolve().await;

    assert_eq!(state, NavState::SignedOut);
    assert!(!api.session().is_authenticated());
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("expired"));
    assert_eq!(server.backend.hits("POST /accounts/refresh/"), 0);
}

#[tokio::test]
async fn server_error_on_session_check_signs_out() {
    let server = spawn_backend().await;
    server.backend.set_me_status(500);
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, ACCESS)]);

    let state = NavigationGate::new(api.clone()).resolve().await;

    assert_eq!(state, NavState::SignedOut);
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn user_without_role_signs_out() {
    let server = spawn_backend().await;
    server.backend.set_role("");
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, ACCESS)]);

    let state = NavigationGate::new(api).resolve().await;

    assert_eq!(state, NavState::SignedOut);
}

#[tokio::test]
async fn unknown_role_gets_base_menu() {
    let server = spawn_backend().await;
    server.backend.set_role("auditor");
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, ACCESS)]);

    let state = NavigationGate::new(api).resolve().await;

    assert_eq!(state.items(), BASE_MENU);
}

#[tokio::test]
async fn logout_clears_tokens_and_revokes_refresh() {
    let server = spawn_backend().await;
    let (api, store) = server.signed_in_client();
    let gate = NavigationGate::new(api.clone());

    let outcome = gate.logout();

    assert_eq!(outcome.redirect, "/login");
    assert_eq!(outcome.access_token.as_deref(), Some(ACCESS));
    assert_eq!(outcome.refresh_token.as_deref(), Some(REFRESH));
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    assert!(!api.session().is_authenticated());

    // The logout endpoint only accepts the bearer captured before the session ended.
    let (refresh, access) = outcome.revocation().expect("both tokens were held");
    api.revoke_refresh_token(refresh, access)
        .await
        .expect("revocation should succeed");
    assert_eq!(server.backend.hits("POST /users/logout/"), 1);
    assert_eq!(*server.backend.revoked.lock().unwrap(), vec![REFRESH.to_string()]);

    // A fresh resolve after logout makes no request.
    assert_eq!(gate.resolve().await, NavState::SignedOut);
    assert_eq!(server.backend.hits("GET /accounts/users/me/"), 0);
}

#[tokio::test]
async fn logout_without_session_still_redirects() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let outcome = NavigationGate::new(api).logout();

    assert_eq!(outcome.redirect, "/login");
    assert_eq!(outcome.refresh_token, None);
    assert_eq!(outcome.revocation(), None);
}

#[tokio::test]
async fn revocation_with_stale_access_token_is_rejected() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let err = api
        .revoke_refresh_token(REFRESH, "stale-access")
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(server.backend.revoked.lock().unwrap().is_empty());
}

#[tokio::test]
async fn guard_follows_persisted_token() {
    let server = spawn_backend().await;

    let (anonymous, _) = server.anonymous_client();
    assert_eq!(guard::check(anonymous.session()), GuardDecision::Redirect("/login"));

    let (signed_in, _) = server.client_with(&[(ACCESS_TOKEN_KEY, "not-yet-checked")]);
    assert_eq!(guard::check(signed_in.session()), GuardDecision::Allow);

    // The guard only looks at storage.
    assert_eq!(server.backend.total_hits(), 0);
}

#[tokio::test]
async fn guard_does_not_revive_rejected_token() {
    let server = spawn_backend().await;
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, "expired")]);
    let gate = NavigationGate::new(api.clone());

    assert_eq!(gate.resolve().await, NavState::SignedOut);
    assert!(!api.session().is_authenticated());

    assert_eq!(guard::check(api.session()), GuardDecision::Allow);
    assert!(!api.session().is_authenticated());
    assert_eq!(api.session().access_token(), None);
}
