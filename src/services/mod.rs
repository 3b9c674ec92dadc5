//! Visibility and permission rules
//!
//! Stateless queries over a snapshot. Each function takes the acting user
//! explicitly and never mutates its inputs.

pub mod visibility;
pub mod permissions;
pub mod hierarchy;

// Re-export the evaluator surface
pub use visibility::{
    is_event_visible, visible_events, upcoming_events, events_within, events_on_day,
    visible_messages,
};
pub use permissions::{
    can_post, can_manage_group, can_create_group, can_request_join, is_member,
    effective_display_role, member_groups,
};
pub use hierarchy::{group_children, group_tree, is_own_ancestor, TreeNode};
