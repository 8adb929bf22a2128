use dioxus::prelude::*;
use shared_types::config::role_label;
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableHeader, DataTableRow,
};

use super::list_view::{columns, list_rows};
use crate::auth::{use_auth, use_is_owner};

const COLUMNS: &[&str] = &["Username", "Email", "Role"];

/// Account list. Only owners get here from the menu; anyone else sees the
/// forbidden message from the client.
#[component]
pub fn Users() -> Element {
    let auth = use_auth();
    let is_owner = use_is_owner();
    let nav = auth.nav;
    let api = auth.api;
    // The role check needs the resolved user, so wait for the navigation.
    let users = use_resource(move || {
        let api = api.clone();
        let pending = nav.read().is_pending();
        async move {
            if pending {
                return None;
            }
            Some(api.list_users().await)
        }
    });
    let state = users.read().clone().flatten();

    rsx! {
        div { class: "page-header",
            p { class: "page-subtitle",
                if is_owner { "Manage who can access the books" } else { "Users" }
            }
        }
        DataTable {
            DataTableHeader { columns: columns(COLUMNS) }
            DataTableBody {
                {list_rows(&state, COLUMNS.len(), "No users found", |user| {
                    let variant = if user.role().is_some_and(|r| r.is_owner()) {
                        BadgeVariant::Primary
                    } else {
                        BadgeVariant::Outline
                    };
                    rsx! {
                        DataTableRow { key: "{user.id}",
                            DataTableCell { "{user.username}" }
                            DataTableCell { "{user.email}" }
                            DataTableCell {
                                Badge { variant, {role_label(&user.role)} }
                            }
                        }
                    }
                })}
            }
        }
    }
}
