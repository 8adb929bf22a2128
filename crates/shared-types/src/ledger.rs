use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{de_amount, de_opt_amount};

/// Customer / vendor master record from `GET /master/contacts/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    /// `customer`, `vendor` or `both`.
    #[serde(default = "default_contact_type")]
    pub contact_type: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_contact_type() -> String {
    "customer".to_string()
}

fn default_true() -> bool {
    true
}

impl Contact {
    /// `City, State` with whichever parts are present.
    pub fn location(&self) -> String {
        [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `active` / `inactive`, for the status badge.
    pub fn status(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Purchase order from `GET /transactions/purchase-orders/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: i64,
    pub po_number: String,
    /// Vendor contact id.
    #[serde(default)]
    pub vendor: Option<i64>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    pub po_date: NaiveDate,
    #[serde(default)]
    pub expected_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub subtotal: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub tax_amount: Option<f64>,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_amount: f64,
}

/// Sales order from `GET /transactions/sales-orders/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    pub id: i64,
    pub so_number: String,
    /// Customer contact id.
    #[serde(default)]
    pub customer: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub so_date: NaiveDate,
    #[serde(default)]
    pub expected_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub subtotal: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub tax_amount: Option<f64>,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_amount: f64,
}

/// Payment against a vendor bill or customer invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub payment_number: String,
    /// `vendor_payment` or `customer_payment`.
    #[serde(default)]
    pub payment_type: String,
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    pub payment_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

impl Payment {
    pub fn is_incoming(&self) -> bool {
        self.payment_type == "customer_payment"
    }
}

/// `POST /master/contacts/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ContactRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    pub contact_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pincode: String,
}

impl Default for ContactRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact_type: "vendor".to_string(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
        }
    }
}

impl Contact {
    pub fn is_vendor(&self) -> bool {
        matches!(self.contact_type.as_str(), "vendor" | "both")
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.contact_type.as_str(), "customer" | "both")
    }
}

/// `POST /master/products/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ProductRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    /// `goods` or `service`.
    #[serde(rename = "type")]
    pub product_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Sales price cannot be negative"))
    )]
    pub sales_price: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Purchase price cannot be negative"))
    )]
    pub purchase_price: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, max = 100.0, message = "Tax must be between 0 and 100"))
    )]
    pub sale_tax_percent: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, max = 100.0, message = "Tax must be between 0 and 100"))
    )]
    pub purchase_tax_percent: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hsn_code: String,
}

impl Default for ProductRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            product_type: "goods".to_string(),
            sales_price: 0.0,
            purchase_price: 0.0,
            sale_tax_percent: 0.0,
            purchase_tax_percent: 0.0,
            hsn_code: String::new(),
        }
    }
}

/// One line of a purchase or sales order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct OrderLineRequest {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select all products"))
    )]
    pub product: i64,
    #[cfg_attr(
        feature = "validation",
        validate(range(exclusive_min = 0.0, message = "Quantity must be positive"))
    )]
    pub quantity: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price cannot be negative"))
    )]
    pub unit_price: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, max = 100.0, message = "Tax must be between 0 and 100"))
    )]
    pub tax_percent: f64,
}

impl OrderLineRequest {
    pub fn new(product: i64, quantity: f64, unit_price: f64, tax_percent: f64) -> Self {
        Self {
            product,
            quantity,
            unit_price,
            tax_percent,
        }
    }

    /// Quantity times price, tax included.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price * (1.0 + self.tax_percent / 100.0)
    }
}

pub fn order_total(items: &[OrderLineRequest]) -> f64 {
    items.iter().map(OrderLineRequest::line_total).sum()
}

/// `POST /transactions/purchase-orders/`. Orders are created unpaid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct PurchaseOrderRequest {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select a vendor"))
    )]
    pub vendor: i64,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Add at least one item"))
    )]
    pub items: Vec<OrderLineRequest>,
    pub total_amount: f64,
    pub paid: bool,
    pub paid_amount: f64,
    pub payment_method: String,
}

impl PurchaseOrderRequest {
    pub fn new(
        vendor: i64,
        order_date: NaiveDate,
        expected_date: Option<NaiveDate>,
        items: Vec<OrderLineRequest>,
        payment_method: impl Into<String>,
    ) -> Self {
        let total_amount = order_total(&items);
        Self {
            vendor,
            order_date,
            expected_date,
            items,
            total_amount,
            paid: false,
            paid_amount: 0.0,
            payment_method: payment_method.into(),
        }
    }
}

/// `POST /transactions/sales-orders/`. New orders start as drafts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SalesOrderRequest {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select a customer"))
    )]
    pub customer: i64,
    pub order_date: NaiveDate,
    pub status: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Add at least one item"))
    )]
    pub items: Vec<OrderLineRequest>,
}

impl SalesOrderRequest {
    pub fn new(customer: i64, order_date: NaiveDate, items: Vec<OrderLineRequest>) -> Self {
        Self {
            customer,
            order_date,
            status: "draft".to_string(),
            items,
        }
    }
}
