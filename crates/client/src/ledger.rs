use std::collections::HashMap;

use shared_types::{
    AppError, Contact, ContactRequest, ListResponse, OrderLineRequest, Payment, Product,
    ProductRequest, PurchaseOrder, PurchaseOrderRequest, SalesOrder, SalesOrderRequest, User,
};
use validator::Validate;

use crate::http::ApiClient;

pub const CONTACTS_PATH: &str = "/master/contacts/";
pub const MASTER_PRODUCTS_PATH: &str = "/master/products/";
pub const PURCHASE_ORDERS_PATH: &str = "/transactions/purchase-orders/";
pub const SALES_ORDERS_PATH: &str = "/transactions/sales-orders/";
pub const PAYMENTS_PATH: &str = "/transactions/payments/";
pub const USERS_PATH: &str = "/accounts/users/";

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let list: ListResponse<Contact> = self.get_authorized(CONTACTS_PATH).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip_all)]
    pub async fn create_contact(&self, request: &ContactRequest) -> Result<(), AppError> {
        request.validate()?;
        self.post_authorized_empty(CONTACTS_PATH, Some(request)).await?;
        tracing::info!(name = %request.name, "contact created");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_contact(&self, id: i64) -> Result<(), AppError> {
        self.delete_authorized(&format!("{CONTACTS_PATH}{id}/")).await
    }

    /// Product master with purchase pricing, for order forms.
    #[tracing::instrument(skip(self))]
    pub async fn list_master_products(&self) -> Result<Vec<Product>, AppError> {
        let list: ListResponse<Product> = self.get_authorized(MASTER_PRODUCTS_PATH).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip_all)]
    pub async fn create_product(&self, request: &ProductRequest) -> Result<(), AppError> {
        request.validate()?;
        self.post_authorized_empty(MASTER_PRODUCTS_PATH, Some(request)).await?;
        tracing::info!(name = %request.name, "product created");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>, AppError> {
        let list: ListResponse<PurchaseOrder> = self.get_authorized(PURCHASE_ORDERS_PATH).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip_all)]
    pub async fn create_purchase_order(&self, request: &PurchaseOrderRequest) -> Result<(), AppError> {
        request.validate()?;
        validate_lines(&request.items)?;
        self.post_authorized_empty(PURCHASE_ORDERS_PATH, Some(request)).await?;
        tracing::info!(vendor = request.vendor, total = request.total_amount, "purchase order created");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_sales_orders(&self) -> Result<Vec<SalesOrder>, AppError> {
        let list: ListResponse<SalesOrder> = self.get_authorized(SALES_ORDERS_PATH).await?;
        Ok(list.into_vec())
    }

    #[tracing::instrument(skip_all)]
    pub async fn create_sales_order(&self, request: &SalesOrderRequest) -> Result<(), AppError> {
        request.validate()?;
        validate_lines(&request.items)?;
        self.post_authorized_empty(SALES_ORDERS_PATH, Some(request)).await?;
        tracing::info!(customer = request.customer, "sales order created");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        let list: ListResponse<Payment> = self.get_authorized(PAYMENTS_PATH).await?;
        Ok(list.into_vec())
    }

    /// All accounts. Owner only; the role is checked before any request.
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        if !self.session().role().is_some_and(|r| r.is_owner()) {
            return Err(AppError::forbidden("Only owners can manage users"));
        }
        let list: ListResponse<User> = self.get_authorized(USERS_PATH).await?;
        Ok(list.into_vec())
    }
}

/// Check every order line; the first failure is reported under `items`.
pub fn validate_lines(items: &[OrderLineRequest]) -> Result<(), AppError> {
    for line in items {
        if let Err(errors) = line.validate() {
            let err = AppError::from(errors);
            let message = err
                .field_errors
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| "Invalid order line".to_string());
            let mut fields = HashMap::new();
            fields.insert("items".to_string(), message.clone());
            return Err(AppError::validation(message, fields));
        }
    }
    Ok(())
}
