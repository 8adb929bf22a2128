use shared_types::{
    AppError, CartItem, CartItemRequest, Category, EcommerceAnalytics, ListResponse, Order,
    Product, ProductQuery,
};

use crate::http::ApiClient;

pub const CATEGORIES_PATH: &str = "/categories/";
pub const PRODUCTS_PATH: &str = "/products/";
pub const CART_PATH: &str = "/cart/";
pub const ORDERS_PATH: &str = "/orders/";
pub const CHECKOUT_PATH: &str = "/checkout/";
pub const ECOMMERCE_REPORT_PATH: &str = "/reports/ecommerce/";

fn cart_item_path(item_id: i64) -> String {
    format!("{CART_PATH}{item_id}/")
}

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, AppError> {
        let list: ListResponse<Category> = self.get_public(CATEGORIES_PATH, &[]).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Vec<Product>, AppError> {
        let list: ListResponse<Product> = self.get_public(PRODUCTS_PATH, &query.to_pairs()).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<Vec<CartItem>, AppError> {
        let list: ListResponse<CartItem> = self.get_authorized(CART_PATH).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<Vec<Order>, AppError> {
        let list: ListResponse<Order> = self.get_authorized(ORDERS_PATH).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_ecommerce_analytics(&self) -> Result<EcommerceAnalytics, AppError> {
        self.get_authorized(ECOMMERCE_REPORT_PATH).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_cart_item(&self, item: &CartItemRequest) -> Result<(), AppError> {
        self.post_authorized_empty(CART_PATH, Some(item)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_cart_item(&self, item_id: i64, item: &CartItemRequest) -> Result<(), AppError> {
        self.put_authorized_empty(&cart_item_path(item_id), item).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_cart_item(&self, item_id: i64) -> Result<(), AppError> {
        self.delete_authorized(&cart_item_path(item_id)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn checkout(&self) -> Result<(), AppError> {
        self.post_authorized_empty::<()>(CHECKOUT_PATH, None).await
    }
}
