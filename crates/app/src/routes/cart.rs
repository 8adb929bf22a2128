use dioxus::prelude::*;
use shared_types::config::{format_currency, format_timestamp};
use shared_types::CartItem;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableHeader, DataTableRow, EmptyRow, SkeletonRows,
    StatusBadge,
};

use super::list_view::columns;
use crate::api_context::{use_api, use_store};

const CART_COLUMNS: &[&str] = &["Product", "Price", "Quantity", "Line total", ""];
const ORDER_COLUMNS: &[&str] = &["Order", "Placed", "Items", "Status", "Total"];

/// Cart lines with quantity controls, checkout and order history.
#[component]
pub fn Cart() -> Element {
    let actions = use_api();
    let store = use_store();
    let mut checking_out = use_signal(|| false);

    let (cart, orders, cart_loading, total, quantity, error) = {
        let snapshot = store.read();
        (
            snapshot.cart.clone(),
            snapshot.orders.clone(),
            snapshot.loading.cart && snapshot.cart.is_empty(),
            snapshot.cart_total(),
            snapshot.cart_quantity(),
            snapshot.error.clone(),
        )
    };

    let checkout = {
        let actions = actions.clone();
        move |_| {
            let actions = actions.clone();
            spawn(async move {
                checking_out.set(true);
                actions.checkout().await;
                checking_out.set(false);
            });
        }
    };
    let dismiss = move |_| actions.clear_error();
    let total_label = format_currency(total);

    rsx! {
        if let Some(message) = error {
            div { class: "page-error", role: "alert",
                span { "{message}" }
                button { class: "page-error-dismiss", r#type: "button", onclick: dismiss, "Dismiss" }
            }
        }

        Card {
            CardHeader { CardTitle { "Cart ({quantity})" } }
            CardContent {
                DataTable {
                    DataTableHeader { columns: columns(CART_COLUMNS) }
                    DataTableBody {
                        if cart_loading {
                            SkeletonRows { rows: 3, columns: CART_COLUMNS.len() }
                        } else if cart.is_empty() {
                            EmptyRow { colspan: CART_COLUMNS.len(), message: "Your cart is empty" }
                        }
                        for item in cart.iter().cloned() {
                            CartLine { key: "{item.id}", item }
                        }
                    }
                }
            }
            CardFooter {
                span { class: "cart-total", "Total: {total_label}" }
                Button {
                    disabled: cart.is_empty(),
                    loading: checking_out(),
                    onclick: checkout,
                    "Checkout"
                }
            }
        }

        Card { class: "cart-orders",
            CardHeader { CardTitle { "Orders" } }
            CardContent {
                DataTable {
                    DataTableHeader { columns: columns(ORDER_COLUMNS) }
                    DataTableBody {
                        if orders.is_empty() {
                            EmptyRow { colspan: ORDER_COLUMNS.len(), message: "No orders yet" }
                        }
                        for order in orders.iter() {
                            DataTableRow { key: "{order.id}",
                                DataTableCell { {order.display_number()} }
                                DataTableCell { {format_timestamp(&order.created_at)} }
                                DataTableCell { numeric: true, {order.items.len().to_string()} }
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

#[component]
fn CartLine(item: CartItem) -> Element {
    let actions = use_api();
    let item_id = item.id;
    let quantity = item.quantity;
    let name = item
        .product_detail
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Product #{}", item.product));
    let price = item
        .product_detail
        .as_ref()
        .map(|p| format_currency(p.price))
        .unwrap_or_default();
    let line_total = item.line_total().map(format_currency).unwrap_or_default();

    let set_quantity = {
        let actions = actions.clone();
        move |next: i64| {
            let actions = actions.clone();
            spawn(async move {
                if next < 1 {
                    actions.remove_from_cart(item_id).await;
                } else {
                    actions.update_cart_item(item_id, next).await;
                }
            });
        }
    };
    let decrement = {
        let set_quantity = set_quantity.clone();
        move |_| set_quantity(quantity - 1)
    };
    let increment = move |_| set_quantity(quantity + 1);
    let remove = move |_| {
        let actions = actions.clone();
        spawn(async move {
            actions.remove_from_cart(item_id).await;
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{name}" }
            DataTableCell { numeric: true, "{price}" }
            DataTableCell {
                div { class: "cart-quantity",
                    button { r#type: "button", "aria-label": "Decrease quantity", onclick: decrement, "-" }
                    span { "{quantity}" }
                    button { r#type: "button", "aria-label": "Increase quantity", onclick: increment, "+" }
                }
            }
            DataTableCell { numeric: true, "{line_total}" }
            DataTableCell {
                Button { variant: ButtonVariant::Destructive, onclick: remove, "Remove" }
            }
        }
    }
}
