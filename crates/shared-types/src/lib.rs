pub mod error;

// Account and auth types
pub mod models;

// Accountrix domain modules
pub mod commerce;
pub mod common;
pub mod config;
pub mod ledger;

pub use error::*;
pub use models::*;

pub use commerce::*;
pub use common::*;
// config stays qualified: shared_types::config::CURRENCY_SYMBOL etc.
pub use ledger::*;
