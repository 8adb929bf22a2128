use dioxus::prelude::*;
use shared_types::config::{format_currency, format_date, payment_method_label};
use shared_types::Payment;
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableHeader, DataTableRow,
};

use super::list_view::{columns, list_rows};
use crate::auth::use_auth;

const COLUMNS: &[&str] = &["Number", "Direction", "Method", "Date", "Reference", "Amount"];

fn direction(payment: &Payment) -> (&'static str, BadgeVariant) {
    if payment.is_incoming() {
        ("Received", BadgeVariant::Primary)
    } else {
        ("Paid", BadgeVariant::Secondary)
    }
}

/// Incoming customer payments and outgoing vendor payments.
#[component]
pub fn Payments() -> Element {
    let api = use_auth().api;
    let payments = use_resource(move || {
        let api = api.clone();
        async move { api.list_payments().await }
    });

    rsx! {
        div { class: "page-header",
            p { class: "page-subtitle", "Payments" }
        }
        DataTable {
            DataTableHeader { columns: columns(COLUMNS) }
            DataTableBody {
                {list_rows(&payments.read(), COLUMNS.len(), "No payments recorded", |payment| {
                    let (label, variant) = direction(payment);
                    let reference = payment.reference_number.clone().unwrap_or_default();
                    rsx! {
                        DataTableRow { key: "{payment.id}",
                            DataTableCell { "{payment.payment_number}" }
                            DataTableCell {
                                Badge { variant, "{label}" }
                            }
                            DataTableCell { {payment_method_label(&payment.payment_method)} }
                            DataTableCell { {format_date(&payment.payment_date)} }
                            DataTableCell { "{reference}" }
                            DataTableCell { numeric: true, {format_currency(payment.amount)} }
                        }
                    }
                })}
            }
        }
    }
}
