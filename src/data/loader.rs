//! Snapshot file loading
//!
//! JSON and TOML are accepted, chosen by file extension.

use std::path::Path;
use tracing::debug;
use crate::utils::errors::{ParishError, Result};
use crate::utils::logging::log_snapshot_loaded;
use super::snapshot::{Snapshot, SnapshotData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "json" => Ok(SnapshotFormat::Json),
            Some(ext) if ext == "toml" => Ok(SnapshotFormat::Toml),
            _ => Err(ParishError::InvalidInput(format!(
                "Unsupported snapshot file {}: expected .json or .toml",
                path.display()
            ))),
        }
    }
}

/// Parse snapshot text in the given format
pub fn parse_snapshot(contents: &str, format: SnapshotFormat) -> Result<SnapshotData> {
    let data = match format {
        SnapshotFormat::Json => serde_json::from_str(contents)?,
        SnapshotFormat::Toml => toml::from_str(contents)?,
    };
    Ok(data)
}

/// Read, parse and validate a snapshot file
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let format = SnapshotFormat::from_path(path)?;
    debug!(path = %path.display(), format = ?format, "Loading snapshot");

    let contents = tokio::fs::read_to_string(path).await?;
    let data = parse_snapshot(&contents, format)?;
    let snapshot = Snapshot::from_data(data)?;

    log_snapshot_loaded(
        &path.display().to_string(),
        snapshot.users().len(),
        snapshot.groups().len(),
        snapshot.events().len(),
        snapshot.messages().len(),
    );
    Ok(snapshot)
}
