//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ParishHub application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::{GroupId, MessageId, UserId};
use crate::utils::errors::{ParishError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer when dropped and must be held
/// until the process exits.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ParishError::Config(format!("Invalid log filter {:?}: {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "parish-hub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ParishError::Config(format!("Failed to install log subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an evaluated permission decision
pub fn log_permission_check(
    user_id: &UserId,
    action: &str,
    group_id: Option<&GroupId>,
    allowed: bool,
) {
    debug!(
        user_id = %user_id,
        action = action,
        group_id = group_id.map(|id| id.as_str()),
        allowed = allowed,
        "Permission evaluated"
    );
}

/// Log a loaded snapshot
pub fn log_snapshot_loaded(
    source: &str,
    users: usize,
    groups: usize,
    events: usize,
    messages: usize,
) {
    info!(
        source = source,
        users = users,
        groups = groups,
        events = events,
        messages = messages,
        "Snapshot loaded"
    );
}

/// Log a difference between `User.groups` and the group member lists
pub fn log_membership_drift(user_id: &UserId, declared: &[GroupId], derived: &[GroupId]) {
    warn!(
        user_id = %user_id,
        declared = ?declared,
        derived = ?derived,
        "User group list differs from group member lists, using member lists"
    );
}

/// Log a message posted into a group
pub fn log_message_sent(
    message_id: &MessageId,
    group_id: &GroupId,
    sender_id: &UserId,
    length: usize,
) {
    info!(
        message_id = %message_id,
        group_id = %group_id,
        sender_id = %sender_id,
        length = length,
        "Message sent to group"
    );
}
