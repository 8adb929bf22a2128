use client::token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use client::TokenStore;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{spawn_backend, REFRESH, ROTATED_ACCESS};

#[tokio::test]
async fn expired_access_is_refreshed_once_and_retried() {
    let server = spawn_backend().await;
    let (api, store) = server.client_with(&[(ACCESS_TOKEN_KEY, "expired"), (REFRESH_TOKEN_KEY, REFRESH)]);
    api.session().restore();

    let contacts = api.list_contacts().await.expect("retry should succeed");

    assert_eq!(contacts.len(), 2);
    assert_eq!(server.backend.hits("POST /accounts/refresh/"), 1);
    assert_eq!(server.backend.hits("GET /master/contacts/"), 2);
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some(ROTATED_ACCESS));
    assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some(REFRESH));
    assert_eq!(api.session().access_token().as_deref(), Some(ROTATED_ACCESS));
}

#[tokio::test]
async fn refreshed_token_is_used_for_later_calls() {
    let server = spawn_backend().await;
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, "expired"), (REFRESH_TOKEN_KEY, REFRESH)]);
    api.session().restore();

    api.list_contacts().await.expect("first call");
    api.list_payments().await.expect("second call");

    assert_eq!(server.backend.hits("POST /accounts/refresh/"), 1);
    assert_eq!(server.backend.hits("GET /transactions/payments/"), 1);
}

#[tokio::test]
async fn failed_refresh_ends_session() {
    let server = spawn_backend().await;
    server.backend.set_refresh_works(false);
    let (api, store) = server.client_with(&[(ACCESS_TOKEN_KEY, "expired"), (REFRESH_TOKEN_KEY, REFRESH)]);
    api.session().restore();

    let err = api.list_contacts().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Your session has expired. Please log in again.");
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    assert!(!api.session().is_authenticated());
    assert_eq!(server.backend.hits("GET /master/contacts/"), 1);
}

#[tokio::test]
async fn rejection_without_refresh_token_is_returned_as_is() {
    let server = spawn_backend().await;
    let (api, _) = server.client_with(&[(ACCESS_TOKEN_KEY, "expired")]);
    api.session().restore();

    let err = api.list_sales_orders().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Given token not valid for any token type");
    assert_eq!(server.backend.hits("POST /accounts/refresh/"), 0);
}

#[tokio::test]
async fn authorized_call_without_token_never_hits_network() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();

    let err = api.list_contacts().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(server.backend.total_hits(), 0);
}
