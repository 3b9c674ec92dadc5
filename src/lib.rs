//! ParishHub
//!
//! Parish groups, events and group chat over an in-memory snapshot.
//! The core is a set of pure visibility and permission rules deciding which
//! events and messages a user sees and which group actions they may take;
//! the views compose those rules into the dashboard, group, calendar and
//! chat screens.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod services;
pub mod data;
pub mod views;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ParishError, Result};

// Re-export main components for easy access
pub use data::Snapshot;
pub use views::ViewKind;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
