use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Sidebar, SidebarFooter, SidebarHeader, SidebarMenu, SidebarMenuItem,
};

use super::{MenuIconView, UserProfile};
use crate::auth::use_auth;
use crate::routes::Route;

/// Desktop sidebar driven by the resolved navigation state: nothing while
/// the session check runs, a Sign In link when signed out, the role's menu
/// and a logout control when signed in.
#[component]
pub fn NavSidebar(collapsed: bool, on_toggle: EventHandler<()>) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let current_path = route.to_string();
    let state = (auth.nav)();

    if state.is_pending() {
        return rsx! {};
    }

    let app_name = client::config().app_name.clone();
    let user = state.user().cloned();

    rsx! {
        Sidebar { collapsed, on_toggle,
            SidebarHeader {
                span { class: "sidebar-brand-mark", "₹" }
                span { class: "sidebar-label sidebar-brand-name", "{app_name}" }
            }
            SidebarMenu {
                for item in state.items().iter().copied() {
                    SidebarMenuItem { key: "{item.path}", active: item.is_active(&current_path),
                        Link { to: Route::from_path(item.path),
                            MenuIconView { icon: item.icon }
                            span { class: "sidebar-label", "{item.name}" }
                        }
                    }
                }
            }
            SidebarFooter {
                if let Some(user) = user {
                    UserProfile { user }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "sidebar-logout",
                        onclick: move |_| auth.logout(),
                        span { class: "sidebar-label", "Logout" }
                    }
                } else {
                    Link { to: Route::Login {}, class: "button sidebar-signin",
                        span { class: "sidebar-label", "Sign In" }
                    }
                }
            }
        }
    }
}
