//! Cached storefront data shared across pages.
//!
//! [`ApiStore`] is plain state: lists, loading flags and one error slot.
//! [`StoreActions`] runs the REST calls and commits results through any
//! [`StoreAccess`] (a Dioxus signal in the app, a mutex in tests).
//!
//! Every fetch takes a [`Ticket`] from its resource's generation counter.
//! A result is committed only if its ticket is still the newest for that
//! resource, so overlapping fetches resolve to the last one issued.

use std::sync::{Arc, Mutex};

use shared_types::{
    AppError, CartItem, CartItemRequest, Category, EcommerceAnalytics, Order, Product,
    ProductQuery,
};

use crate::http::ApiClient;

pub const LOGIN_TO_ADD_TO_CART: &str = "Please log in to add items to cart";
pub const LOGIN_TO_CHECKOUT: &str = "Please log in to checkout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Categories,
    Products,
    Cart,
    Orders,
    Analytics,
}

impl Resource {
    fn index(self) -> usize {
        match self {
            Resource::Categories => 0,
            Resource::Products => 1,
            Resource::Cart => 2,
            Resource::Orders => 3,
            Resource::Analytics => 4,
        }
    }
}

/// Claim on the next commit for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    resource: Resource,
    generation: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub categories: bool,
    pub products: bool,
    pub cart: bool,
    pub orders: bool,
    pub analytics: bool,
}

impl LoadingFlags {
    fn set(&mut self, resource: Resource, value: bool) {
        match resource {
            Resource::Categories => self.categories = value,
            Resource::Products => self.products = value,
            Resource::Cart => self.cart = value,
            Resource::Orders => self.orders = value,
            Resource::Analytics => self.analytics = value,
        }
    }

    pub fn any(&self) -> bool {
        self.categories || self.products || self.cart || self.orders || self.analytics
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiStore {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub analytics: Option<EcommerceAnalytics>,
    pub loading: LoadingFlags,
    pub error: Option<String>,
    generations: [u64; 5],
}

impl ApiStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch: bump the generation, raise the loading flag and clear
    /// the error slot.
    pub fn begin(&mut self, resource: Resource) -> Ticket {
        let slot = &mut self.generations[resource.index()];
        *slot += 1;
        self.loading.set(resource, true);
        self.error = None;
        Ticket {
            resource,
            generation: *slot,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generations[ticket.resource.index()] == ticket.generation
    }

    /// Apply a fetch result if `ticket` is still current. Returns whether
    /// anything was committed.
    fn finish<T>(
        &mut self,
        ticket: Ticket,
        result: Result<T, AppError>,
        apply: impl FnOnce(&mut Self, T),
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(resource = ?ticket.resource, generation = ticket.generation, "dropping stale result");
            return false;
        }
        self.loading.set(ticket.resource, false);
        match result {
            Ok(value) => apply(self, value),
            Err(e) => self.record_error(&e),
        }
        true
    }

    pub fn commit_categories(&mut self, ticket: Ticket, result: Result<Vec<Category>, AppError>) -> bool {
        self.finish(ticket, result, |s, v| s.categories = v)
    }

    pub fn commit_products(&mut self, ticket: Ticket, result: Result<Vec<Product>, AppError>) -> bool {
        self.finish(ticket, result, |s, v| s.products = v)
    }

    pub fn commit_cart(&mut self, ticket: Ticket, result: Result<Vec<CartItem>, AppError>) -> bool {
        self.finish(ticket, result, |s, v| s.cart = v)
    }

    pub fn commit_orders(&mut self, ticket: Ticket, result: Result<Vec<Order>, AppError>) -> bool {
        self.finish(ticket, result, |s, v| s.orders = v)
    }

    pub fn commit_analytics(
        &mut self,
        ticket: Ticket,
        result: Result<EcommerceAnalytics, AppError>,
    ) -> bool {
        self.finish(ticket, result, |s, v| s.analytics = Some(v))
    }

    pub fn record_error(&mut self, err: &AppError) {
        tracing::error!(kind = %err.kind, error = %err.message, "api call failed");
        self.error = Some(err.friendly_message());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Product id of a cached cart line.
    pub fn cart_product(&self, item_id: i64) -> Option<i64> {
        self.cart
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.product)
    }

    pub fn cart_quantity(&self) -> i64 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().filter_map(CartItem::line_total).sum()
    }
}

/// Read/write access to an [`ApiStore`] wherever it lives.
pub trait StoreAccess {
    fn update<R>(&self, f: impl FnOnce(&mut ApiStore) -> R) -> R;
    fn read<R>(&self, f: impl FnOnce(&ApiStore) -> R) -> R;
}

/// Thread-safe store for native callers and tests.
#[derive(Debug, Clone, Default)]
pub struct SharedStore(Arc<Mutex<ApiStore>>);

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ApiStore {
        self.read(ApiStore::clone)
    }
}

impl StoreAccess for SharedStore {
    fn update<R>(&self, f: impl FnOnce(&mut ApiStore) -> R) -> R {
        let mut store = self.0.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut store)
    }

    fn read<R>(&self, f: impl FnOnce(&ApiStore) -> R) -> R {
        let store = self.0.lock().unwrap_or_else(|e| e.into_inner());
        f(&store)
    }
}

/// The store's operations. Every operation clears the error slot when it
/// starts; failures are logged and stored as the error message.
#[derive(Clone)]
pub struct StoreActions<S> {
    api: ApiClient,
    store: S,
}

impl<S: StoreAccess> StoreActions<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn has_token(&self) -> bool {
        self.api.session().access_token().is_some()
    }

    pub async fn fetch_categories(&self) {
        let ticket = self.store.update(|s| s.begin(Resource::Categories));
        let result = self.api.get_categories().await;
        self.store.update(|s| s.commit_categories(ticket, result));
    }

    pub async fn fetch_products(&self, query: &ProductQuery) {
        let ticket = self.store.update(|s| s.begin(Resource::Products));
        let result = self.api.get_products(query).await;
        self.store.update(|s| s.commit_products(ticket, result));
    }

    pub async fn fetch_cart(&self) {
        if !self.has_token() {
            return;
        }
        let ticket = self.store.update(|s| s.begin(Resource::Cart));
        let result = self.api.get_cart().await;
        self.store.update(|s| s.commit_cart(ticket, result));
    }

    pub async fn fetch_orders(&self) {
        if !self.has_token() {
            return;
        }
        let ticket = self.store.update(|s| s.begin(Resource::Orders));
        let result = self.api.get_orders().await;
        self.store.update(|s| s.commit_orders(ticket, result));
    }

    pub async fn fetch_analytics(&self) {
        if !self.has_token() {
            return;
        }
        let ticket = self.store.update(|s| s.begin(Resource::Analytics));
        let result = self.api.get_ecommerce_analytics().await;
        self.store.update(|s| s.commit_analytics(ticket, result));
    }

    pub async fn add_to_cart(&self, product: i64, quantity: i64) {
        if !self.has_token() {
            self.store.update(|s| s.set_error(LOGIN_TO_ADD_TO_CART));
            return;
        }
        self.store.update(ApiStore::clear_error);
        let request = CartItemRequest { product, quantity };
        match self.api.add_cart_item(&request).await {
            Ok(()) => self.fetch_cart().await,
            Err(e) => self.store.update(|s| s.record_error(&e)),
        }
    }

    pub async fn remove_from_cart(&self, item_id: i64) {
        if !self.has_token() {
            return;
        }
        self.store.update(ApiStore::clear_error);
        match self.api.remove_cart_item(item_id).await {
            Ok(()) => self.fetch_cart().await,
            Err(e) => self.store.update(|s| s.record_error(&e)),
        }
    }

    /// Change a cart line's quantity. Lines missing from the cached cart
    /// are ignored.
    pub async fn update_cart_item(&self, item_id: i64, quantity: i64) {
        if !self.has_token() {
            return;
        }
        self.store.update(ApiStore::clear_error);
        let Some(product) = self.store.read(|s| s.cart_product(item_id)) else {
            tracing::debug!(item_id, "cart line not cached, skipping update");
            return;
        };
        let request = CartItemRequest { product, quantity };
        match self.api.update_cart_item(item_id, &request).await {
            Ok(()) => self.fetch_cart().await,
            Err(e) => self.store.update(|s| s.record_error(&e)),
        }
    }

    pub async fn checkout(&self) {
        if !self.has_token() {
            self.store.update(|s| s.set_error(LOGIN_TO_CHECKOUT));
            return;
        }
        self.store.update(ApiStore::clear_error);
        match self.api.checkout().await {
            Ok(()) => {
                self.fetch_cart().await;
                self.fetch_orders().await;
            }
            Err(e) => self.store.update(|s| s.record_error(&e)),
        }
    }

    pub fn clear_error(&self) {
        self.store.update(ApiStore::clear_error);
    }

    /// Public catalog data, loaded when the provider mounts.
    pub async fn load_public(&self) {
        self.fetch_categories().await;
        self.fetch_products(&ProductQuery::default()).await;
    }

    /// Per-user data, loaded once a session token is available.
    pub async fn load_session(&self) {
        if !self.has_token() {
            return;
        }
        self.fetch_cart().await;
        self.fetch_orders().await;
        self.fetch_analytics().await;
    }
}
