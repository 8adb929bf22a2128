// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod separator;
pub mod skeleton;

// Layout shells
pub mod drawer;
pub mod sidebar;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use drawer::*;
pub use input::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
