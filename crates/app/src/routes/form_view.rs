use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::config::format_currency;
use shared_types::{AppError, Contact, OrderLineRequest, Product};
use shared_ui::{Button, ButtonVariant, Input, SelectInput};

/// Select options from a `(key, label)` table.
pub fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

/// Contacts matching `keep`, behind an empty placeholder option.
pub fn contact_options(
    contacts: &[Contact],
    keep: impl Fn(&Contact) -> bool,
    placeholder: &str,
) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(
            contacts
                .iter()
                .filter(|c| c.is_active && keep(c))
                .map(|c| (c.id.to_string(), c.name.clone())),
        )
        .collect()
}

pub fn product_options(products: &[Product]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select product".to_string()))
        .chain(products.iter().map(|p| (p.id.to_string(), p.name.clone())))
        .collect()
}

/// Selected id; unset or unparsable selects nothing (0).
pub fn parse_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Numeric form field. Blank counts as zero.
pub fn parse_number(field: &str, raw: &str) -> Result<f64, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            let mut fields = HashMap::new();
            fields.insert(field.to_string(), "Enter a number".to_string());
            AppError::validation("Enter a number", fields)
        })
}

/// Field message when there is one, for forms that show a single alert.
pub fn first_error(err: &AppError) -> String {
    let mut fields: Vec<_> = err.field_errors.iter().collect();
    fields.sort();
    fields
        .first()
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| err.friendly_message())
}

/// Order line as typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDraft {
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
    pub tax_percent: String,
}

impl Default for LineDraft {
    fn default() -> Self {
        Self {
            product: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
            tax_percent: String::new(),
        }
    }
}

impl LineDraft {
    /// Select a product and pre-fill its price and tax. Purchases use the
    /// purchase side of the product master.
    pub fn pick(&mut self, product_id: String, products: &[Product], purchase: bool) {
        if let Some(product) = products.iter().find(|p| p.id.to_string() == product_id) {
            let (price, tax) = if purchase {
                (product.purchase_price.unwrap_or(product.price), product.purchase_tax_percent)
            } else {
                (product.price, product.sale_tax_percent)
            };
            self.unit_price = price.to_string();
            self.tax_percent = tax.unwrap_or(0.0).to_string();
        }
        self.product = product_id;
    }

    pub fn to_request(&self) -> Result<OrderLineRequest, AppError> {
        Ok(OrderLineRequest::new(
            parse_id(&self.product),
            parse_number("items", &self.quantity)?,
            parse_number("items", &self.unit_price)?,
            parse_number("items", &self.tax_percent)?,
        ))
    }

    pub fn total(&self) -> f64 {
        self.to_request().map(|line| line.line_total()).unwrap_or(0.0)
    }
}

pub fn line_requests(lines: &[LineDraft]) -> Result<Vec<OrderLineRequest>, AppError> {
    lines.iter().map(LineDraft::to_request).collect()
}

/// Editable order lines with a running tax-inclusive total.
#[component]
pub fn OrderLines(lines: Signal<Vec<LineDraft>>, products: Vec<Product>, purchase: bool) -> Element {
    let mut lines = lines;
    let choices = product_options(&products);
    let total: f64 = lines.read().iter().map(LineDraft::total).sum();
    let count = lines.read().len();

    rsx! {
        div { class: "order-lines",
            for (idx, line) in lines().into_iter().enumerate() {
                div { key: "{idx}", class: "order-line",
                    SelectInput {
                        name: "product-{idx}",
                        value: line.product.clone(),
                        options: choices.clone(),
                        on_change: {
                            let products = products.clone();
                            move |value: String| {
                                if let Some(line) = lines.write().get_mut(idx) {
                                    line.pick(value, &products, purchase);
                                }
                            }
                        },
                    }
                    Input {
                        name: "quantity-{idx}",
                        placeholder: "Qty",
                        input_type: "number",
                        value: line.quantity.clone(),
                        on_input: move |e: FormEvent| {
                            if let Some(line) = lines.write().get_mut(idx) {
                                line.quantity = e.value();
                            }
                        },
                    }
                    Input {
                        name: "price-{idx}",
                        placeholder: "Price",
                        input_type: "number",
                        value: line.unit_price.clone(),
                        on_input: move |e: FormEvent| {
                            if let Some(line) = lines.write().get_mut(idx) {
                                line.unit_price = e.value();
                            }
                        },
                    }
                    Input {
                        name: "tax-{idx}",
                        placeholder: "Tax %",
                        input_type: "number",
                        value: line.tax_percent.clone(),
                        on_input: move |e: FormEvent| {
                            if let Some(line) = lines.write().get_mut(idx) {
                                line.tax_percent = e.value();
                            }
                        },
                    }
                    span { class: "order-line-total", {format_currency(line.total())} }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: count == 1,
                        onclick: move |_| {
                            let mut lines = lines.write();
                            if lines.len() > 1 && idx < lines.len() {
                                lines.remove(idx);
                            }
                        },
                        "Remove"
                    }
                }
            }
            div { class: "order-lines-footer",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| lines.write().push(LineDraft::default()),
                    "Add item"
                }
                span { class: "order-total", "Total: " {format_currency(total)} }
            }
        }
    }
}
