use client::token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use client::TokenStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, RegisterRequest, UserRole};

use crate::common::{spawn_backend, ACCESS, PASSWORD, REFRESH};

fn login_request(password: &str) -> LoginRequest {
    LoginRequest {
        username: "ravi".into(),
        password: password.into(),
    }
}

fn register_request(username: &str, password2: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.into(),
        email: format!("{username}@example.com"),
        password: PASSWORD.into(),
        password2: password2.into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn login_persists_both_tokens() {
    let server = spawn_backend().await;
    let (api, store) = server.anonymous_client();

    let user = api
        .login(&login_request(PASSWORD))
        .await
        .expect("login should succeed");

    assert_eq!(user.as_ref().map(|u| u.username.as_str()), Some("ravi"));
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some(ACCESS));
    assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some(REFRESH));
    assert!(api.session().is_authenticated());
    assert_eq!(api.session().role(), Some(UserRole::Owner));
}

#[tokio::test]
async fn wrong_password_surfaces_server_detail() {
    let server = spawn_backend().await;
    let (api, store) = server.anonymous_client();

    let err = api.login(&login_request("wrong")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "No active account found with the given credentials");
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn empty_login_fields_are_rejected_locally() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let err = api.login(&login_request("")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(server.backend.hits("POST /users/login/"), 0);
}

#[tokio::test]
async fn password_mismatch_sends_nothing() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let err = api
        .register(&register_request("meera", "different"), None)
        .await
        .unwrap_err();

    assert_eq!(
        err.field_errors.get("password2").map(String::as_str),
        Some("Passwords do not match")
    );
    assert_eq!(server.backend.total_hits(), 0);
}

#[tokio::test]
async fn known_taken_username_sends_nothing() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let err = api
        .register(&register_request("meera", PASSWORD), Some(true))
        .await
        .unwrap_err();

    assert_eq!(err.message, "Username is already taken");
    assert_eq!(server.backend.hits("POST /accounts/register/"), 0);
}

#[tokio::test]
async fn server_side_username_conflict_becomes_field_error() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let err = api
        .register(&register_request("taken", PASSWORD), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(
        err.field_errors.get("username").map(String::as_str),
        Some("A user with that username already exists.")
    );
}

#[tokio::test]
async fn registration_succeeds_without_starting_session() {
    let server = spawn_backend().await;
    let (api, store) = server.anonymous_client();

    api.register(&register_request("meera", PASSWORD), Some(false))
        .await
        .expect("registration should succeed");

    assert_eq!(server.backend.hits("POST /accounts/register/"), 1);
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
}

#[tokio::test]
async fn short_usernames_are_not_checked() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    assert_eq!(api.check_username("ab").await, None);
    assert_eq!(api.check_username("  a  ").await, None);
    assert_eq!(server.backend.total_hits(), 0);
}

#[tokio::test]
async fn username_availability() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    assert_eq!(api.check_username("taken").await, Some(false));
    assert_eq!(api.check_username("meera").await, Some(true));
    assert_eq!(server.backend.hits("GET /accounts/check-username/"), 2);
}
