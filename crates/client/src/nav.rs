//! Session-gated navigation.
//!
//! The sidebar and mobile menu render from a [`NavState`] produced by
//! [`NavigationGate::resolve`]: no stored token means signed out without a
//! request; a stored token is checked against `GET /accounts/users/me/` and
//! any failure falls back to signed out.

use shared_types::{User, UserRole};

use crate::http::ApiClient;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Icon slot for a menu entry; the UI maps each to a concrete icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Purchases,
    Sales,
    Payments,
    Contacts,
    Products,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: MenuIcon,
}

impl MenuItem {
    const fn new(name: &'static str, path: &'static str, icon: MenuIcon) -> Self {
        Self { name, path, icon }
    }

    /// Active when the current path is this item's path or below it.
    pub fn is_active(&self, current_path: &str) -> bool {
        let current = current_path.trim_end_matches('/');
        current == self.path
            || current
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Menu for every signed-in role.
pub const BASE_MENU: &[MenuItem] = &[
    MenuItem::new("Dashboard", "/dashboard", MenuIcon::Dashboard),
    MenuItem::new("Purchases", "/purchases", MenuIcon::Purchases),
    MenuItem::new("Sales", "/sales", MenuIcon::Sales),
    MenuItem::new("Payments", "/payments", MenuIcon::Payments),
    MenuItem::new("Contacts", "/contacts", MenuIcon::Contacts),
    MenuItem::new("Products", "/products", MenuIcon::Products),
];

pub const USERS_ITEM: MenuItem = MenuItem::new("Users", "/users", MenuIcon::Users);

pub fn menu_for_role(role: &UserRole) -> Vec<MenuItem> {
    let mut items = BASE_MENU.to_vec();
    if role.is_owner() {
        items.push(USERS_ITEM);
    }
    items
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavState {
    /// The session check has not finished; render nothing.
    #[default]
    Pending,
    SignedOut,
    SignedIn { user: User, items: Vec<MenuItem> },
}

impl NavState {
    pub fn is_pending(&self) -> bool {
        matches!(self, NavState::Pending)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            NavState::SignedIn { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        match self {
            NavState::SignedIn { items, .. } => items,
            _ => &[],
        }
    }
}

/// Result of a logout: where to go next and the tokens needed to revoke
/// the refresh token server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct Logout {
    pub redirect: &'static str,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Logout {
    /// Both tokens, when revocation is possible.
    pub fn revocation(&self) -> Option<(&str, &str)> {
        Some((self.refresh_token.as_deref()?, self.access_token.as_deref()?))
    }
}

#[derive(Clone)]
pub struct NavigationGate {
    api: ApiClient,
}

impl NavigationGate {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// Decide what the navigation shows. Never fails: errors are logged and
    /// treated as an invalid session.
    pub async fn resolve(&self) -> NavState {
        if self.session().restore().is_none() {
            tracing::debug!("no stored token, navigation signed out");
            return NavState::SignedOut;
        }

        match self.api.current_user().await {
            Ok(user) => match user.role() {
                Some(role) => {
                    tracing::debug!(role = role.as_str(), "navigation signed in");
                    NavState::SignedIn {
                        items: menu_for_role(&role),
                        user,
                    }
                }
                None => {
                    tracing::warn!(user_id = user.id, "current user has no role, treating session as invalid");
                    self.session().invalidate();
                    NavState::SignedOut
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "session check failed");
                self.session().invalidate();
                NavState::SignedOut
            }
        }
    }

    /// Clear persisted and in-memory credentials.
    pub fn logout(&self) -> Logout {
        let ended = self.session().end();
        tracing::info!("logged out");
        Logout {
            redirect: LOGIN_PATH,
            access_token: ended.access,
            refresh_token: ended.refresh,
        }
    }
}

/// Open/closed flag for a collapsible panel (mobile menu, sidebar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelToggle {
    open: bool,
}

impl PanelToggle {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
