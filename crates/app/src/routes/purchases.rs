use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::config::{format_currency, format_date, parse_date, PAYMENT_METHODS};
use shared_types::{Contact, PurchaseOrderRequest};
use shared_ui::{
    Button, DataTable, DataTableBody, DataTableCell, DataTableHeader, DataTableRow, Input,
    SelectInput, StatusBadge,
};

use super::form_view::{
    contact_options, first_error, line_requests, options, parse_id, LineDraft, OrderLines,
};
use super::list_view::{columns, list_rows};
use crate::auth::use_auth;

const COLUMNS: &[&str] = &["PO Number", "Vendor", "Date", "Expected", "Status", "Total"];

const PURCHASE_CREATED: &str = "Purchase order created successfully!";

/// Purchase orders raised against vendors, with a form for new ones.
#[component]
pub fn Purchases() -> Element {
    let api = use_auth().api;
    let mut orders = use_resource(move || {
        let api = api.clone();
        async move { api.list_purchase_orders().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./ledger.css") }
        div { class: "page-header",
            p { class: "page-subtitle", "Purchase orders" }
        }
        PurchaseOrderForm { on_created: move |_| orders.restart() }
        DataTable {
            DataTableHeader { columns: columns(COLUMNS) }
            DataTableBody {
                {list_rows(&orders.read(), COLUMNS.len(), "No purchase orders yet", |po| {
                    let vendor = po.vendor_name.clone().unwrap_or_else(|| "-".to_string());
                    let expected = po.expected_delivery_date.as_ref().map(format_date).unwrap_or_default();
                    rsx! {
                        DataTableRow { key: "{po.id}",
                            DataTableCell { "{po.po_number}" }
                            DataTableCell { "{vendor}" }
                            DataTableCell { {format_date(&po.po_date)} }
                            DataTableCell { "{expected}" }
                            DataTableCell {
                                StatusBadge { status: po.status.clone() }
                            }
                            DataTableCell { numeric: true, {format_currency(po.total_amount)} }
                        }
                    }
                })}
            }
        }
    }
}

#[component]
fn PurchaseOrderForm(on_created: EventHandler<()>) -> Element {
    let auth = use_auth();
    let masters_api = auth.api.clone();
    let masters = use_resource(move || {
        let api = masters_api.clone();
        async move {
            let contacts = api.list_contacts().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "vendor list failed");
                Vec::new()
            });
            let products = api.list_master_products().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "product list failed");
                Vec::new()
            });
            (contacts, products)
        }
    });

    let mut vendor = use_signal(String::new);
    let mut order_date = use_signal(String::new);
    let mut expected_date = use_signal(String::new);
    let mut payment_method = use_signal(|| "cash".to_string());
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
            let request = PurchaseOrderRequest::new(
                parse_id(&vendor()),
                date,
                parse_date(&expected_date()),
                items,
                payment_method(),
            );

            loading.set(true);
            match api.create_purchase_order(&request).await {
                Ok(()) => {
                    vendor.set(String::new());
                    expected_date.set(String::new());
                    lines.set(vec![LineDraft::default()]);
                    notice.set(Some(PURCHASE_CREATED.to_string()));
                    on_created.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "purchase order rejected");
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
                name: "vendor",
                label: "Vendor",
                value: vendor(),
                options: contact_options(&contacts, Contact::is_vendor, "Select vendor"),
                on_change: move |value: String| vendor.set(value),
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
            Input {
                name: "expected_date",
                label: "Expected delivery",
                input_type: "date",
                value: expected_date(),
                on_input: move |e: FormEvent| expected_date.set(e.value()),
            }
            SelectInput {
                name: "payment_method",
                label: "Payment method",
                value: payment_method(),
                options: options(PAYMENT_METHODS),
                on_change: move |value: String| payment_method.set(value),
            }
            OrderLines { lines, products, purchase: true }
            Button {
                button_type: "submit",
                loading: loading(),
                "Create purchase order ({total_label})"
            }
        }
    }
}
