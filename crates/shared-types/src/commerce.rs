use serde::{Deserialize, Serialize};

use crate::common::{de_amount, de_opt_amount};

/// Product category from `GET /categories/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// A catalog product from `GET /products/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "sales_price", deserialize_with = "de_amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "de_opt_amount", skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_amount", skip_serializing_if = "Option::is_none")]
    pub sale_tax_percent: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_amount", skip_serializing_if = "Option::is_none")]
    pub purchase_tax_percent: Option<f64>,
    /// Category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, alias = "current_stock", deserialize_with = "de_amount")]
    pub stock: f64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0.0
    }
}

/// Filters for `GET /products/`. Empty fields are left off the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<i64>,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

impl ProductQuery {
    pub fn category(mut self, id: i64) -> Self {
        self.category = Some(id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Key/value pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.filter(|c| *c != 0) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }
}

/// A line in the signed-in user's cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: i64,
    /// Product id.
    pub product: i64,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_detail: Option<Product>,
}

impl CartItem {
    /// Price times quantity when the product detail was embedded.
    pub fn line_total(&self) -> Option<f64> {
        self.product_detail
            .as_ref()
            .map(|p| p.price * self.quantity as f64)
    }
}

/// Body of `POST /cart/` and `PUT /cart/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItemRequest {
    pub product: i64,
    pub quantity: i64,
}

/// A placed order from `GET /orders/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// `order_number` when the backend assigned one, `#id` otherwise.
    pub fn display_number(&self) -> String {
        self.order_number
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    #[serde(default)]
    pub product: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub price: Option<f64>,
}

/// Storefront analytics from `GET /reports/ecommerce/`. Every field is
/// optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EcommerceAnalytics {
    #[serde(default, deserialize_with = "de_amount")]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_customers: i64,
    #[serde(default)]
    pub top_products: Vec<ProductSales>,
}

impl EcommerceAnalytics {
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders > 0 {
            self.total_revenue / self.total_orders as f64
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSales {
    #[serde(default, alias = "product__name")]
    pub name: String,
    #[serde(default, alias = "total_sold")]
    pub quantity_sold: i64,
    #[serde(default, deserialize_with = "de_amount")]
    pub revenue: f64,
}
