use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use client::token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use client::{ApiClient, MemoryTokenStore, Session, SharedStore, StoreActions};
use serde_json::{json, Value};

pub const ACCESS: &str = "access-1";
pub const REFRESH: &str = "refresh-1";
pub const ROTATED_ACCESS: &str = "access-2";
pub const PASSWORD: &str = "s3cret-pass";

/// Search term that makes `GET /products/` answer slowly.
pub const SLOW_SEARCH: &str = "slow";

/// State of the in-process mock backend. Tests tweak it between calls and
/// read the hit counters afterwards.
pub struct Backend {
    hits: Mutex<HashMap<String, usize>>,
    pub me_status: Mutex<u16>,
    pub role: Mutex<String>,
    pub accepted_access: Mutex<String>,
    pub refresh_works: Mutex<bool>,
    pub cart: Mutex<Vec<Value>>,
    pub orders: Mutex<Vec<Value>>,
    pub last_cart_put: Mutex<Option<Value>>,
    pub revoked: Mutex<Vec<String>>,
    pub contacts: Mutex<Vec<Value>>,
    /// Last JSON body per `"METHOD /path/"`.
    bodies: Mutex<HashMap<String, Value>>,
    next_id: Mutex<i64>,
}

impl Backend {
    fn new() -> Self {
        Self {
            hits: Mutex::new(HashMap::new()),
            me_status: Mutex::new(200),
            role: Mutex::new("owner".to_string()),
            accepted_access: Mutex::new(ACCESS.to_string()),
            refresh_works: Mutex::new(true),
            cart: Mutex::new(Vec::new()),
            orders: Mutex::new(Vec::new()),
            last_cart_put: Mutex::new(None),
            revoked: Mutex::new(Vec::new()),
            contacts: Mutex::new(vec![
                json!({"id": 1, "name": "Sharma Traders", "contact_type": "vendor", "email": "accounts@sharma.example", "city": "Pune", "state": "Maharashtra", "is_active": true}),
                json!({"id": 2, "name": "Nair Retail", "contact_type": "customer", "email": "", "is_active": false}),
            ]),
            bodies: Mutex::new(HashMap::new()),
            next_id: Mutex::new(100),
        }
    }

    fn record(&self, route: &str) {
        *self.hits.lock().unwrap().entry(route.to_string()).or_default() += 1;
    }

    /// Number of requests seen for `"METHOD /path/"`.
    pub fn hits(&self, route: &str) -> usize {
        self.hits.lock().unwrap().get(route).copied().unwrap_or(0)
    }

    /// Last body posted to `"METHOD /path/"`.
    pub fn body(&self, route: &str) -> Option<Value> {
        self.bodies.lock().unwrap().get(route).cloned()
    }

    fn keep_body(&self, route: &str, body: &Value) {
        self.bodies.lock().unwrap().insert(route.to_string(), body.clone());
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    pub fn set_role(&self, role: &str) {
        *self.role.lock().unwrap() = role.to_string();
    }

    pub fn set_me_status(&self, status: u16) {
        *self.me_status.lock().unwrap() = status;
    }

    pub fn reject_all_tokens(&self) {
        *self.accepted_access.lock().unwrap() = "nothing-matches".to_string();
    }

    pub fn set_refresh_works(&self, works: bool) {
        *self.refresh_works.lock().unwrap() = works;
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    fn authorized(&self, headers: &HeaderMap) -> Result<(), Response> {
        let expected = format!("Bearer {}", self.accepted_access.lock().unwrap());
        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if presented == expected {
            Ok(())
        } else {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Given token not valid for any token type"})),
            )
                .into_response())
        }
    }
}

type Shared = State<Arc<Backend>>;

pub struct MockServer {
    pub base_url: String,
    pub backend: Arc<Backend>,
}

/// Start the mock REST backend on an ephemeral port.
pub async fn spawn_backend() -> MockServer {
    let backend = Arc::new(Backend::new());
    let app = Router::new().nest("/api", routes()).with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read mock address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend crashed");
    });

    MockServer {
        base_url: format!("http://{addr}/api"),
        backend,
    }
}

impl MockServer {
    /// Client whose token store starts with `entries`. Nothing is restored
    /// into the session yet.
    pub fn client_with(&self, entries: &[(&str, &str)]) -> (ApiClient, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::with_entries(entries.iter().copied()));
        let session = Session::new(store.clone());
        (ApiClient::with_base_url(&self.base_url, session), store)
    }

    pub fn anonymous_client(&self) -> (ApiClient, Arc<MemoryTokenStore>) {
        self.client_with(&[])
    }

    /// Client with both tokens persisted and restored into the session.
    pub fn signed_in_client(&self) -> (ApiClient, Arc<MemoryTokenStore>) {
        let (api, store) = self.client_with(&[(ACCESS_TOKEN_KEY, ACCESS), (REFRESH_TOKEN_KEY, REFRESH)]);
        api.session().restore();
        (api, store)
    }

    pub fn store_actions(&self, api: ApiClient) -> StoreActions<SharedStore> {
        StoreActions::new(api, SharedStore::new())
    }
}

fn routes() -> Router<Arc<Backend>> {
    Router::new()
        .route("/users/login/", post(login))
        .route("/users/logout/", post(logout))
        .route("/accounts/users/me/", get(me))
        .route("/accounts/users/", get(list_users))
        .route("/accounts/refresh/", post(refresh))
        .route("/accounts/register/", post(register))
        .route("/accounts/check-username/", get(check_username))
        .route("/categories/", get(categories))
        .route("/products/", get(products))
        .route("/cart/", get(get_cart).post(add_cart_item))
        .route("/cart/{id}/", put(update_cart_item).delete(remove_cart_item))
        .route("/orders/", get(orders))
        .route("/checkout/", post(checkout))
        .route("/reports/ecommerce/", get(analytics))
        .route("/master/contacts/", get(contacts).post(create_contact))
        .route("/master/contacts/{id}/", delete(delete_contact))
        .route("/master/products/", get(master_products).post(create_product))
        .route(
            "/transactions/purchase-orders/",
            get(purchase_orders).post(create_purchase_order),
        )
        .route(
            "/transactions/sales-orders/",
            get(sales_orders).post(create_sales_order),
        )
        .route("/transactions/payments/", get(payments))
}

fn user_json(id: i64, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "role": role,
        "profile_image": null,
    })
}

fn product_json(id: i64, name: &str, price: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "sales_price": price,
        "category": 1,
        "category_name": "Stationery",
        "current_stock": "12.000",
        "is_featured": false,
    })
}

async fn login(State(state): Shared, Json(body): Json<Value>) -> Response {
    state.record("POST /users/login/");
    if body["username"] == "ravi" && body["password"] == PASSWORD {
        let role = state.role.lock().unwrap().clone();
        Json(json!({
            "user": user_json(1, "ravi", &role),
            "tokens": {"access": ACCESS, "refresh": REFRESH},
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "No active account found with the given credentials"})),
        )
            .into_response()
    }
}

async fn logout(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST /users/logout/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    if let Some(token) = body["refresh_token"].as_str() {
        state.revoked.lock().unwrap().push(token.to_string());
    }
    StatusCode::RESET_CONTENT.into_response()
}

async fn me(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /accounts/users/me/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    let status = *state.me_status.lock().unwrap();
    if status != 200 {
        let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (code, Json(json!({"detail": "Server error"}))).into_response();
    }
    let role = state.role.lock().unwrap().clone();
    Json(user_json(1, "ravi", &role)).into_response()
}

async fn list_users(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /accounts/users/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(json!({
        "count": 2,
        "next": null,
        "previous": null,
        "results": [user_json(1, "ravi", "owner"), user_json(2, "anita", "accountant")],
    }))
    .into_response()
}

async fn refresh(State(state): Shared, Json(body): Json<Value>) -> Response {
    state.record("POST /accounts/refresh/");
    let works = *state.refresh_works.lock().unwrap();
    if works && body["refresh"] == REFRESH {
        *state.accepted_access.lock().unwrap() = ROTATED_ACCESS.to_string();
        Json(json!({"access": ROTATED_ACCESS})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Token is invalid or expired"})),
        )
            .into_response()
    }
}

async fn register(State(state): Shared, Json(body): Json<Value>) -> Response {
    state.record("POST /accounts/register/");
    if body["username"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"username": ["A user with that username already exists."]})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({"id": state.next_id(), "username": body["username"]})),
    )
        .into_response()
}

async fn check_username(
    State(state): Shared,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.record("GET /accounts/check-username/");
    let username = query.get("username").map(String::as_str).unwrap_or_default();
    Json(json!({"available": username != "taken"}))
}

async fn categories(State(state): Shared) -> Json<Value> {
    state.record("GET /categories/");
    Json(json!([
        {"id": 1, "name": "Stationery", "is_active": true},
        {"id": 2, "name": "Archive", "description": "Retired lines", "is_active": false},
    ]))
}

async fn products(
    State(state): Shared,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.record("GET /products/");
    let search = query.get("search").cloned().unwrap_or_default();
    if search == SLOW_SEARCH {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    if search.is_empty() {
        Json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [product_json(1, "Ledger book", json!("120.00")), product_json(2, "Fountain pen", json!(45.5))],
        }))
    } else {
        Json(json!([product_json(9, &format!("Match for {search}"), json!("10.00"))]))
    }
}

async fn get_cart(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /cart/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(Value::Array(state.cart.lock().unwrap().clone())).into_response()
}

async fn add_cart_item(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST /cart/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    let product = body["product"].as_i64().unwrap_or_default();
    if product == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Product not found"})),
        )
            .into_response();
    }
    let item = json!({
        "id": state.next_id(),
        "product": product,
        "quantity": body["quantity"],
        "product_detail": product_json(product, "Ledger book", json!("120.00")),
    });
    state.cart.lock().unwrap().push(item.clone());
    (StatusCode::CREATED, Json(item)).into_response()
}

async fn update_cart_item(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.record("PUT /cart/{id}/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    *state.last_cart_put.lock().unwrap() = Some(body.clone());
    let mut cart = state.cart.lock().unwrap();
    match cart.iter_mut().find(|item| item["id"] == id) {
        Some(item) => {
            item["quantity"] = body["quantity"].clone();
            Json(item.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn remove_cart_item(State(state): Shared, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    state.record("DELETE /cart/{id}/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    state.cart.lock().unwrap().retain(|item| item["id"] != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn orders(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /orders/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(Value::Array(state.orders.lock().unwrap().clone())).into_response()
}

async fn checkout(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("POST /checkout/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    let lines: Vec<Value> = state.cart.lock().unwrap().drain(..).collect();
    if lines.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Cart is empty"})),
        )
            .into_response();
    }
    let order = json!({
        "id": state.next_id(),
        "order_number": "ORD-0001",
        "status": "confirmed",
        "total_amount": "240.00",
        "created_at": "2024-03-18T10:15:00Z",
        "items": lines.iter().map(|l| json!({"product": l["product"], "quantity": l["quantity"]})).collect::<Vec<_>>(),
    });
    state.orders.lock().unwrap().push(order.clone());
    (StatusCode::CREATED, Json(order)).into_response()
}

async fn analytics(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /reports/ecommerce/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(json!({
        "total_revenue": "1500.50",
        "total_orders": 3,
        "top_products": [{"product__name": "Ledger book", "total_sold": 4, "revenue": "480.00"}],
    }))
    .into_response()
}

async fn contacts(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /master/contacts/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    let contacts = state.contacts.lock().unwrap().clone();
    Json(json!({
        "count": contacts.len(),
        "next": null,
        "previous": null,
        "results": contacts,
    }))
    .into_response()
}

async fn create_contact(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST /master/contacts/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    state.keep_body("POST /master/contacts/", &body);
    let mut contacts = state.contacts.lock().unwrap();
    if contacts.iter().any(|c| c["email"] == body["email"]) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"email": ["contact with this email already exists."]})),
        )
            .into_response();
    }
    let mut contact = body;
    contact["id"] = json!(state.next_id());
    contact["is_active"] = json!(true);
    contacts.push(contact.clone());
    (StatusCode::CREATED, Json(contact)).into_response()
}

async fn delete_contact(State(state): Shared, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    state.record("DELETE /master/contacts/{id}/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    let mut contacts = state.contacts.lock().unwrap();
    let before = contacts.len();
    contacts.retain(|c| c["id"] != id);
    if contacts.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn master_products(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /master/products/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    let mut ledger_book = product_json(1, "Ledger book", json!("120.00"));
    ledger_book["purchase_price"] = json!("90.00");
    ledger_book["purchase_tax_percent"] = json!("12.00");
    ledger_book["sale_tax_percent"] = json!("12.00");
    Json(json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [ledger_book],
    }))
    .into_response()
}

async fn create_product(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST /master/products/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    state.keep_body("POST /master/products/", &body);
    let mut product = body;
    product["id"] = json!(state.next_id());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn create_purchase_order(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST /transactions/purchase-orders/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    state.keep_body("POST /transactions/purchase-orders/", &body);
    (StatusCode::CREATED, Json(json!({"id": state.next_id()}))).into_response()
}

async fn create_sales_order(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST /transactions/sales-orders/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    state.keep_body("POST /transactions/sales-orders/", &body);
    (StatusCode::CREATED, Json(json!({"id": state.next_id()}))).into_response()
}

async fn purchase_orders(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /transactions/purchase-orders/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(json!([
        {"id": 5, "po_number": "PO-0005", "vendor": 1, "vendor_name": "Sharma Traders", "po_date": "2024-03-18", "status": "confirmed", "subtotal": "1000.00", "tax_amount": "180.00", "total_amount": "1180.00"},
    ]))
    .into_response()
}

async fn sales_orders(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /transactions/sales-orders/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(json!([
        {"id": 8, "so_number": "SO-0008", "customer": 2, "customer_name": "Nair Retail", "so_date": "2024-04-02", "expected_delivery_date": "2024-04-09", "status": "draft", "total_amount": 2360},
    ]))
    .into_response()
}

async fn payments(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /transactions/payments/");
    if let Err(denied) = state.authorized(&headers) {
        return denied;
    }
    Json(json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [
            {"id": 3, "payment_number": "PAY-0003", "payment_type": "customer_payment", "amount": "2360.00", "payment_method": "upi", "payment_date": "2024-04-10", "reference_number": "UPI-7781"},
        ],
    }))
    .into_response()
}
