//! Data models module
//!
//! Users, groups, events and messages as read from a snapshot. None of these
//! are mutated by the visibility and permission rules.

pub mod ids;
pub mod user;
pub mod group;
pub mod event;
pub mod message;

// Re-export commonly used models
pub use ids::{UserId, GroupId, EventId, MessageId};
pub use user::{User, Role};
pub use group::Group;
pub use event::Event;
pub use message::{Message, MessageType};
