//! Snapshot data module
//!
//! Holds the in-memory collections the rules are evaluated over, how they
//! are loaded from disk and the built-in seed dataset.

pub mod snapshot;
pub mod loader;
pub mod seed;

pub use snapshot::{Snapshot, SnapshotData};
pub use loader::{load_snapshot, parse_snapshot, SnapshotFormat};
