use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::config::{format_currency, format_date, parse_date};
use shared_types::{Contact, SalesOrderRequest};
use shared_ui::{
    Button, DataTable, DataTableBody, DataTableCell, DataTableHeader, DataTableRow, Input,
    SelectInput, StatusBadge,
};

use super::form_view::{contact_options, first_error, line_requests, parse_id, LineDraft, OrderLines};
use super::list_view::{columns, list_rows};
use crate::auth::use_auth;

const COLUMNS: &[&str] = &["SO Number", "Customer", "Date", "Status", "Tax", "Total"];

const SALES_CREATED: &str = "Sales order created successfully!";

#[component]
pub fn Sales() -> Element {
    let api = use_auth().api;
    let mut orders = use_resource(move || {
        let api = api.clone();
        async move { api.list_sales_orders().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./ledger.css") }
        div { class: "page-header",
            p { class: "page-subtitle", "Sales orders" }
        }
        SalesOrderForm { on_created: move |_| orders.restart() }
        DataTable {
            DataTableHeader { columns: columns(COLUMNS) }
            DataTableBody {
                {list_rows(&orders.read(), COLUMNS.len(), "No sales orders yet", |so| {
                    let customer = so.customer_name.clone().unwrap_or_else(|| "-".to_string());
                    let tax = so.tax_amount.map(format_currency).unwrap_or_default();
                    rsx! {
                        DataTableRow { key: "{so.id}",
                            DataTableCell { "{so.so_number}" }
                            DataTableCell { "{customer}" }
                            DataTableCell { {format_date(&so.so_date)} }
                            DataTableCell {
                                StatusBadge { status: so.status.clone() }
                            }
                            DataTableCell { numeric: true, "{tax}" }
                            DataTableCell { numeric: true, {format_currency(so.total_amount)} }
                        }
                    }
                })}
            }
        }
    }
}

/// New draft sales order for a customer.
#[component]
fn SalesOrderForm(on_created: EventHandler<()>) -> Element {
    let auth = use_auth();
    let masters_api = auth.api.clone();
    let masters = use_resource(move || {
        let api = masters_api.clone();
        async move {
            let contacts = api.list_contacts().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "customer list failed");
                Vec::new()
            });
            let products = api.list_master_products().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "product list failed");
                Vec::new()
            });
            (contacts, products)
        }
    });

    let mut customer = use_signal(String::new);
    let mut order_date = use_signal(String::new);
    let mut lines = use_signal(|| vec![LineDraft::default()]);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let api = auth.api.clone();
    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            notice.set(None);
            field_errors.set(HashMap::new());

            let Some(date) = parse_date(&order_date()) else {
                let mut fields = HashMap::new();
                fields.insert("order_date".to_string(), "Order date is required".to_string());
                field_errors.set(fields);
                return;
            };
            let items = match line_requests(&lines.read()) {
                Ok(items) => items,
                Err(e) => {
                    error_msg.set(Some(first_error(&e)));
                    return;
                }
            };
            let request = SalesOrderRequest::new(parse_id(&customer()), date, items);

            loading.set(true);
            match api.create_sales_order(&request).await {
                Ok(()) => {
                    customer.set(String::new());
                    lines.set(vec![LineDraft::default()]);
                    notice.set(Some(SALES_CREATED.to_string()));
                    on_created.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sales order rejected");
                    error_msg.set(Some(first_error(&e)));
                }
            }
            loading.set(false);
        }
    };

    let (contacts, products) = masters.read().clone().unwrap_or_default();
    let total_label = format_currency(lines.read().iter().map(LineDraft::total).sum());

    rsx! {
        if let Some(message) = notice() {
            div { class: "ledger-notice", role: "status", "{message}" }
        }
        if let Some(err) = error_msg() {
            div { class: "page-error", role: "alert", "{err}" }
        }
        form { class: "ledger-form", onsubmit: handle_submit,
            SelectInput {
                name: "customer",
                label: "Customer",
                value: customer(),
                options: contact_options(&contacts, Contact::is_customer, "Select customer"),
                on_change: move |value: String| customer.set(value),
            }
            Input {
                name: "order_date",
                label: "Order date",
                input_type: "date",
                value: order_date(),
                required: true,
                error: field_errors().get("order_date").cloned(),
                on_input: move |e: FormEvent| order_date.set(e.value()),
            }
            OrderLines { lines, products, purchase: false }
            Button {
                button_type: "submit",
                loading: loading(),
                "Create sales order ({total_label})"
            }
        }
    }
}
