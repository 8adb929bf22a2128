use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Drawer, Separator};

use super::{MenuIconView, UserProfile};
use crate::auth::use_auth;
use crate::routes::Route;

/// Slide-in menu for small screens. Same items as the sidebar; following a
/// link closes it.
#[component]
pub fn MobileNav(open: bool, on_close: EventHandler<()>) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let current_path = route.to_string();
    let state = (auth.nav)();

    if state.is_pending() {
        return rsx! {};
    }

    let user = state.user().cloned();

    rsx! {
        Drawer { open, on_close, title: client::config().app_name.clone(),
            if let Some(user) = user {
                div { class: "mobile-nav-profile",
                    UserProfile { user }
                }
                Separator {}
            }
            nav { class: "mobile-nav",
                for item in state.items().iter().copied() {
                    Link {
                        key: "{item.path}",
                        to: Route::from_path(item.path),
                        class: if item.is_active(&current_path) { "mobile-nav-link active" } else { "mobile-nav-link" },
                        onclick: move |_| on_close.call(()),
                        MenuIconView { icon: item.icon }
                        span { "{item.name}" }
                    }
                }
            }
            div { class: "mobile-nav-footer",
                if state.user().is_some() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            on_close.call(());
                            auth.logout();
                        },
                        "Logout"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "button mobile-nav-signin",
                        onclick: move |_| on_close.call(()),
                        "Sign In"
                    }
                }
            }
        }
    }
}
