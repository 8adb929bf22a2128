use std::time::Duration;

use client::store::{LOGIN_TO_ADD_TO_CART, LOGIN_TO_CHECKOUT};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ProductQuery;

use crate::common::{spawn_backend, SLOW_SEARCH};

#[tokio::test]
async fn load_public_fetches_catalog_without_token() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();
    let actions = server.store_actions(api);

    actions.load_public().await;

    let store = actions.store().snapshot();
    assert_eq!(store.categories.len(), 2);
    assert_eq!(store.products.len(), 2);
    assert_eq!(store.products[0].price, 120.0);
    assert_eq!(store.products[1].price, 45.5);
    assert_eq!(store.products[0].stock, 12.0);
    assert!(!store.loading.any());
    assert_eq!(store.error, None);
}

#[tokio::test]
async fn session_data_is_skipped_without_token() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();
    let actions = server.store_actions(api);

    actions.fetch_cart().await;
    actions.fetch_orders().await;
    actions.load_session().await;

    assert_eq!(server.backend.total_hits(), 0);
    assert!(actions.store().snapshot().cart.is_empty());
}

#[tokio::test]
async fn add_to_cart_requires_login() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();
    let actions = server.store_actions(api);

    actions.add_to_cart(1, 1).await;

    assert_eq!(actions.store().snapshot().error.as_deref(), Some(LOGIN_TO_ADD_TO_CART));
    assert_eq!(server.backend.total_hits(), 0);
}

#[tokio::test]
async fn checkout_requires_login() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();
    let actions = server.store_actions(api);

    actions.checkout().await;

    assert_eq!(actions.store().snapshot().error.as_deref(), Some(LOGIN_TO_CHECKOUT));
    assert_eq!(server.backend.total_hits(), 0);
}

#[tokio::test]
async fn add_to_cart_refetches_cart() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);

    actions.add_to_cart(1, 2).await;

    let store = actions.store().snapshot();
    assert_eq!(server.backend.hits("POST /cart/"), 1);
    assert_eq!(server.backend.hits("GET /cart/"), 1);
    assert_eq!(store.cart.len(), 1);
    assert_eq!(store.cart[0].quantity, 2);
    assert_eq!(store.cart_quantity(), 2);
    assert_eq!(store.cart_total(), 240.0);
    assert_eq!(store.error, None);
}

#[tokio::test]
async fn missing_product_error_is_stored() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);

    actions.add_to_cart(404, 1).await;

    assert_eq!(actions.store().snapshot().error.as_deref(), Some("Product not found"));
    assert_eq!(server.backend.hits("GET /cart/"), 0);

    actions.clear_error();
    assert_eq!(actions.store().snapshot().error, None);
}

#[tokio::test]
async fn update_of_uncached_line_sends_nothing() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);

    actions.update_cart_item(999, 3).await;

    assert_eq!(server.backend.hits("PUT /cart/{id}/"), 0);
    assert_eq!(actions.store().snapshot().error, None);
}

#[tokio::test]
async fn update_sends_product_and_quantity() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);
    actions.add_to_cart(1, 1).await;
    let line = actions.store().snapshot().cart[0].id;

    actions.update_cart_item(line, 5).await;

    assert_eq!(
        *server.backend.last_cart_put.lock().unwrap(),
        Some(json!({"product": 1, "quantity": 5}))
    );
    assert_eq!(actions.store().snapshot().cart[0].quantity, 5);
    assert_eq!(server.backend.hits("GET /cart/"), 2);
}

#[tokio::test]
async fn remove_refetches_cart() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);
    actions.add_to_cart(1, 1).await;
    let line = actions.store().snapshot().cart[0].id;

    actions.remove_from_cart(line).await;

    assert_eq!(server.backend.hits("DELETE /cart/{id}/"), 1);
    assert!(actions.store().snapshot().cart.is_empty());
}

#[tokio::test]
async fn checkout_refreshes_cart_and_orders() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);
    actions.add_to_cart(1, 2).await;

    actions.checkout().await;

    let store = actions.store().snapshot();
    assert!(store.cart.is_empty());
    assert_eq!(store.orders.len(), 1);
    assert_eq!(store.orders[0].order_number.as_deref(), Some("ORD-0001"));
    assert_eq!(store.orders[0].total_amount, 240.0);
    assert_eq!(store.error, None);
}

#[tokio::test]
async fn checkout_of_empty_cart_reports_server_error() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);

    actions.checkout().await;

    assert_eq!(actions.store().snapshot().error.as_deref(), Some("Cart is empty"));
    assert_eq!(server.backend.hits("GET /orders/"), 0);
}

#[tokio::test]
async fn analytics_accepts_aggregate_field_names() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);

    actions.fetch_analytics().await;

    let analytics = actions.store().snapshot().analytics.expect("analytics loaded");
    assert_eq!(analytics.total_revenue, 1500.5);
    assert_eq!(analytics.total_orders, 3);
    assert_eq!(analytics.top_products.len(), 1);
    assert_eq!(analytics.top_products[0].name, "Ledger book");
    assert_eq!(analytics.top_products[0].quantity_sold, 4);
    assert_eq!(analytics.top_products[0].revenue, 480.0);
}

#[tokio::test]
async fn load_session_fetches_user_data() {
    let server = spawn_backend().await;
    let (api, _) = server.signed_in_client();
    let actions = server.store_actions(api);

    actions.load_session().await;

    assert_eq!(server.backend.hits("GET /cart/"), 1);
    assert_eq!(server.backend.hits("GET /orders/"), 1);
    assert_eq!(server.backend.hits("GET /reports/ecommerce/"), 1);
    assert!(actions.store().snapshot().analytics.is_some());
}

#[tokio::test]
async fn later_product_search_wins_over_slower_earlier_one() {
    let server = spawn_backend().await;
    let (api, _) = server.anonymous_client();
    let actions = server.store_actions(api);

    let slow = ProductQuery::default().search(SLOW_SEARCH);
    let fast = ProductQuery::default().search("pen");

    tokio::join!(actions.fetch_products(&slow), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        actions.fetch_products(&fast).await;
    });

    let store = actions.store().snapshot();
    assert_eq!(server.backend.hits("GET /products/"), 2);
    assert_eq!(store.products.len(), 1);
    assert_eq!(store.products[0].name, "Match for pen");
    assert!(!store.loading.products);
}
