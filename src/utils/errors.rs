//! Error handling for ParishHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::fmt;
use thiserror::Error;
use crate::models::{EventId, GroupId, MessageId, UserId};

/// Main error type for ParishHub
#[derive(Error, Debug)]
pub enum ParishError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid snapshot: {}", format_issues(.0))]
    InvalidSnapshot(Vec<SnapshotIssue>),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: UserId },

    #[error("Group not found: {group_id}")]
    GroupNotFound { group_id: GroupId },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: EventId },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single problem found while validating a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    DuplicateUser(UserId),
    DuplicateGroup(GroupId),
    DuplicateEvent(EventId),
    DuplicateMessage(MessageId),
    UnknownParent { group_id: GroupId, parent_id: GroupId },
    ParentCycle { group_id: GroupId },
    UnknownMember { group_id: GroupId, user_id: UserId },
    UnknownAdmin { group_id: GroupId, user_id: UserId },
    EventUnknownGroup { event_id: EventId, group_id: GroupId },
    EventUnknownCreator { event_id: EventId, user_id: UserId },
    MessageUnknownGroup { message_id: MessageId, group_id: GroupId },
    MessageUnknownSender { message_id: MessageId, user_id: UserId },
    InvalidEmail { user_id: UserId, email: String },
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotIssue::DuplicateUser(id) => write!(f, "duplicate user id {}", id),
            SnapshotIssue::DuplicateGroup(id) => write!(f, "duplicate group id {}", id),
            SnapshotIssue::DuplicateEvent(id) => write!(f, "duplicate event id {}", id),
            SnapshotIssue::DuplicateMessage(id) => write!(f, "duplicate message id {}", id),
            SnapshotIssue::UnknownParent { group_id, parent_id } => {
                write!(f, "group {} has unknown parent {}", group_id, parent_id)
            }
            SnapshotIssue::ParentCycle { group_id } => {
                write!(f, "group {} is its own ancestor", group_id)
            }
            SnapshotIssue::UnknownMember { group_id, user_id } => {
                write!(f, "group {} lists unknown member {}", group_id, user_id)
            }
            SnapshotIssue::UnknownAdmin { group_id, user_id } => {
                write!(f, "group {} lists unknown admin {}", group_id, user_id)
            }
            SnapshotIssue::EventUnknownGroup { event_id, group_id } => {
                write!(f, "event {} belongs to unknown group {}", event_id, group_id)
            }
            SnapshotIssue::EventUnknownCreator { event_id, user_id } => {
                write!(f, "event {} was created by unknown user {}", event_id, user_id)
            }
            SnapshotIssue::MessageUnknownGroup { message_id, group_id } => {
                write!(f, "message {} belongs to unknown group {}", message_id, group_id)
            }
            SnapshotIssue::MessageUnknownSender { message_id, user_id } => {
                write!(f, "message {} was sent by unknown user {}", message_id, user_id)
            }
            SnapshotIssue::InvalidEmail { user_id, email } => {
                write!(f, "user {} has invalid email {:?}", user_id, email)
            }
        }
    }
}

fn format_issues(issues: &[SnapshotIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for ParishHub operations
pub type Result<T> = std::result::Result<T, ParishError>;

impl ParishError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ParishError::Config(_) => false,
            ParishError::ConfigLoad(_) => false,
            ParishError::Io(_) => true,
            ParishError::Json(_) => false,
            ParishError::Toml(_) => false,
            ParishError::InvalidSnapshot(_) => false,
            ParishError::UserNotFound { .. } => false,
            ParishError::GroupNotFound { .. } => true,
            ParishError::EventNotFound { .. } => true,
            ParishError::PermissionDenied(_) => true,
            ParishError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ParishError::Config(_) => ErrorSeverity::Critical,
            ParishError::ConfigLoad(_) => ErrorSeverity::Critical,
            ParishError::InvalidSnapshot(_) => ErrorSeverity::Critical,
            ParishError::PermissionDenied(_) => ErrorSeverity::Warning,
            ParishError::GroupNotFound { .. } => ErrorSeverity::Warning,
            ParishError::EventNotFound { .. } => ErrorSeverity::Warning,
            ParishError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
