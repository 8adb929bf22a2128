pub mod config;
pub mod http;
pub mod session;
pub mod token_store;

// Endpoint groups (each adds methods to `ApiClient`)
pub mod auth;
pub mod commerce;
pub mod ledger;

// Navigation, route guarding and the shared data store
pub mod guard;
pub mod nav;
pub mod store;

pub use config::{config, load_config, ClientConfig};
pub use guard::GuardDecision;
pub use http::ApiClient;
pub use nav::{Logout, MenuIcon, MenuItem, NavState, NavigationGate, PanelToggle};
pub use session::{EndedSession, Session};
pub use store::{ApiStore, SharedStore, StoreAccess, StoreActions};
#[cfg(feature = "web")]
pub use token_store::BrowserTokenStore;
pub use token_store::{MemoryTokenStore, TokenStore};
