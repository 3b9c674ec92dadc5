//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{ParishError, Result};
use super::Settings;

/// Longest accepted reminder window: one year
pub const MAX_REMINDER_WINDOW_HOURS: i64 = 24 * 365;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_app_config(&settings.app)?;
    validate_data_config(&settings.data)?;
    validate_dashboard_config(&settings.dashboard)?;
    validate_groups_config(&settings.groups)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn validate_app_config(config: &super::AppConfig) -> Result<()> {
    if config.current_user.trim().is_empty() {
        return Err(ParishError::Config(
            "Current user id is required".to_string()
        ));
    }

    Ok(())
}

fn validate_data_config(config: &super::DataConfig) -> Result<()> {
    if let Some(path) = &config.snapshot_path {
        if path.trim().is_empty() {
            return Err(ParishError::Config(
                "Snapshot path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.upcoming_limit == 0 {
        return Err(ParishError::Config(
            "Upcoming event limit must be greater than 0".to_string()
        ));
    }

    if config.reminder_window_hours <= 0 {
        return Err(ParishError::Config(
            "Reminder window must be greater than 0 hours".to_string()
        ));
    }

    if config.reminder_window_hours > MAX_REMINDER_WINDOW_HOURS {
        return Err(ParishError::Config(
            format!("Reminder window must be at most {} hours", MAX_REMINDER_WINDOW_HOURS)
        ));
    }

    if config.refresh_interval_seconds == 0 {
        return Err(ParishError::Config(
            "Refresh interval must be greater than 0".to_string()
        ));
    }

    Ok(())
}

fn validate_groups_config(config: &super::GroupsConfig) -> Result<()> {
    if config.max_tree_depth == 0 {
        return Err(ParishError::Config(
            "Group tree depth must be greater than 0".to_string()
        ));
    }

    Ok(())
}

fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ParishError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ParishError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
