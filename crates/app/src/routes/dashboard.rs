use dioxus::prelude::*;
use shared_types::config::{format_currency, format_timestamp};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableHeader, DataTableRow, EmptyRow, StatCard, StatusBadge,
};

use super::list_view::columns;
use crate::api_context::{use_api, use_store};

const RECENT_ORDERS: usize = 5;
const TOP_PRODUCT_COLUMNS: &[&str] = &["Product", "Sold", "Revenue"];
const ORDER_COLUMNS: &[&str] = &["Order", "Placed", "Status", "Total"];

#[component]
pub fn Dashboard() -> Element {
    let actions = use_api();
    let store = use_store();
    let (analytics, loading, recent, error) = {
        let snapshot = store.read();
        (
            snapshot.analytics.clone().unwrap_or_default(),
            snapshot.loading.analytics && snapshot.analytics.is_none(),
            snapshot
                .orders
                .iter()
                .take(RECENT_ORDERS)
                .cloned()
                .collect::<Vec<_>>(),
            snapshot.error.clone(),
        )
    };

    let refresh = move |_| {
        let actions = actions.clone();
        spawn(async move {
            actions.fetch_analytics().await;
            actions.fetch_orders().await;
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "page-header",
            p { class: "page-subtitle", "Store performance at a glance" }
            Button { variant: ButtonVariant::Outline, onclick: refresh, "Refresh" }
        }

        if let Some(message) = error {
            div { class: "page-error", role: "alert", "{message}" }
        }

        div { class: "stat-grid",
            StatCard {
                label: "Revenue",
                value: format_currency(analytics.total_revenue),
                loading,
            }
            StatCard {
                label: "Orders",
                value: analytics.total_orders.to_string(),
                hint: format!("Avg. {}", format_currency(analytics.average_order_value())),
                loading,
            }
            StatCard {
                label: "Products",
                value: analytics.total_products.to_string(),
                loading,
            }
            StatCard {
                label: "Customers",
                value: analytics.total_customers.to_string(),
                loading,
            }
        }

        div { class: "dashboard-panels",
            Card {
                CardHeader { CardTitle { "Top products" } }
                CardContent {
                    DataTable {
                        DataTableHeader { columns: columns(TOP_PRODUCT_COLUMNS) }
                        DataTableBody {
                            if analytics.top_products.is_empty() {
                                EmptyRow { colspan: TOP_PRODUCT_COLUMNS.len(), message: "No sales yet" }
                            }
                            for (idx, product) in analytics.top_products.iter().enumerate() {
                                DataTableRow { key: "{idx}",
                                    DataTableCell { "{product.name}" }
                                    DataTableCell { numeric: true, "{product.quantity_sold}" }
                                    DataTableCell { numeric: true, {format_currency(product.revenue)} }
                                }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Recent orders" } }
                CardContent {
                    DataTable {
                        DataTableHeader { columns: columns(ORDER_COLUMNS) }
                        DataTableBody {
                            if recent.is_empty() {
                                EmptyRow { colspan: ORDER_COLUMNS.len(), message: "No orders yet" }
                            }
                            for order in recent {
                                DataTableRow { key: "{order.id}",
                                    DataTableCell { {order.display_number()} }
                                    DataTableCell { {format_timestamp(&order.created_at)} }
                                    DataTableCell {
                                        StatusBadge { status: order.status.clone() }
                                    }
                                    DataTableCell { numeric: true, {format_currency(order.total_amount)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
