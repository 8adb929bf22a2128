pub mod cart;
pub mod contacts;
pub mod dashboard;
mod form_view;
mod list_view;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod products;
pub mod purchases;
pub mod register;
pub mod sales;
pub mod users;

use client::guard::{self, GuardDecision};
use client::PanelToggle;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_ui::SidebarInset;

use crate::auth::use_auth;
use crate::components::{MobileNav, NavSidebar};

use cart::Cart;
use contacts::Contacts;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use payments::Payments;
use products::Products;
use purchases::Purchases;
use sales::Sales;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
        #[layout(AppLayout)]
            #[redirect("/", || Route::Dashboard {})]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/purchases")]
            Purchases {},
            #[route("/sales")]
            Sales {},
            #[route("/payments")]
            Payments {},
            #[route("/contacts")]
            Contacts {},
            #[route("/products")]
            Products {},
            #[route("/users")]
            Users {},
            #[route("/cart")]
            Cart {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Sign In",
            Route::Dashboard {} => "Dashboard",
            Route::Purchases {} => "Purchases",
            Route::Sales {} => "Sales",
            Route::Payments {} => "Payments",
            Route::Contacts {} => "Contacts",
            Route::Products {} => "Products",
            Route::Users {} => "Users",
            Route::Cart {} => "Cart",
            Route::NotFound { .. } => "Not Found",
        }
    }

    /// Route for a menu path; unknown paths fall back to the dashboard.
    pub fn from_path(path: &str) -> Route {
        path.parse().unwrap_or(Route::Dashboard {})
    }
}

/// Lets a route render only when a token is stored. Renders nothing while
/// redirecting.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    match guard::check(auth.session()) {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(path) => {
            navigator().replace(Route::from_path(path));
            rsx! {}
        }
    }
}

/// Sidebar, mobile top bar and the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let mut sidebar = use_signal(|| PanelToggle::new(true));
    let mut mobile_menu = use_signal(PanelToggle::default);

    // Session check once per layout mount; logging in remounts the layout.
    use_effect(move || auth.resolve_nav());

    let collapsed = !sidebar().is_open();
    let title = route.title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        NavSidebar {
            collapsed,
            on_toggle: move |_| sidebar.write().toggle(),
        }
        MobileNav {
            open: mobile_menu().is_open(),
            on_close: move |_| mobile_menu.write().close(),
        }

        SidebarInset { collapsed,
            header { class: "topbar",
                button {
                    class: "topbar-menu",
                    r#type: "button",
                    "aria-label": "Open menu",
                    onclick: move |_| mobile_menu.write().toggle(),
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
                h1 { class: "topbar-title", "{title}" }
            }
            div { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
