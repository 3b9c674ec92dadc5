//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::views::ViewKind;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub app: AppConfig,
    pub data: DataConfig,
    pub dashboard: DashboardConfig,
    pub groups: GroupsConfig,
    pub logging: LoggingConfig,
}

/// Session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Id of the user whose view is rendered
    pub current_user: String,
    pub default_view: ViewKind,
}

/// Snapshot source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// JSON or TOML snapshot; the built-in seed data is used when absent
    pub snapshot_path: Option<String>,
}

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub upcoming_limit: usize,
    pub reminder_window_hours: i64,
    pub refresh_interval_seconds: u64,
}

/// Group tree configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupsConfig {
    pub max_tree_depth: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when absent
    pub directory: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("PARISH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ParishError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppConfig {
                current_user: "u3".to_string(),
                default_view: ViewKind::Dashboard,
            },
            data: DataConfig {
                snapshot_path: None,
            },
            dashboard: DashboardConfig {
                upcoming_limit: 3,
                reminder_window_hours: 48,
                refresh_interval_seconds: 60,
            },
            groups: GroupsConfig {
                max_tree_depth: 16,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                json: false,
            },
        }
    }
}
