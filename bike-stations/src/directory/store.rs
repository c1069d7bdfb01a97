//! JSON file store for the station directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::StationRecord;

use super::DirectoryStore;
use super::error::DirectoryError;

/// Default snapshot file name.
const DEFAULT_FILE_NAME: &str = "stations-list.json";

/// Snapshot written by [`JsonFileStore::save`].
#[derive(Debug, Serialize, Deserialize)]
struct CachedStations {
    /// When the snapshot was written.
    cached_at: DateTime<Utc>,
    stations: Vec<StationRecord>,
}

/// Documents accepted on load: our own snapshot, or a bare station
/// listing as downloaded from the provider.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Snapshot(CachedStations),
    Listing(Vec<StationRecord>),
}

/// Configuration for the station file store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the snapshot file.
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

/// Station directory persisted as a single JSON document.
///
/// Every save replaces the whole document. The new content is written to a
/// uniquely named temporary file in the same directory and renamed over the
/// target, so a reader sees either the previous snapshot or the new one,
/// even when several saves race.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Get the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Directory that holds the snapshot and its temporary files.
    fn parent_dir(&self) -> &Path {
        match self.config.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl DirectoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<StationRecord>, DirectoryError> {
        let contents =
            std::fs::read_to_string(&self.config.path).map_err(|e| DirectoryError::Read {
                message: format!("{}: {}", self.config.path.display(), e),
            })?;

        let document: StoredDocument =
            serde_json::from_str(&contents).map_err(|e| DirectoryError::Parse {
                message: format!("{}: {}", self.config.path.display(), e),
            })?;

        let stations = match document {
            StoredDocument::Snapshot(cached) => {
                let age = Utc::now().signed_duration_since(cached.cached_at);
                debug!(
                    stations = cached.stations.len(),
                    age_hours = age.num_hours(),
                    "Loaded station snapshot"
                );
                cached.stations
            }
            StoredDocument::Listing(stations) => {
                debug!(stations = stations.len(), "Loaded raw station listing");
                stations
            }
        };

        Ok(stations)
    }

    fn save(&self, stations: &[StationRecord]) -> Result<(), DirectoryError> {
        let cached = CachedStations {
            cached_at: Utc::now(),
            stations: stations.to_vec(),
        };

        // Create parent directories if needed
        let parent = self.parent_dir();
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| DirectoryError::Write {
                message: format!("failed to create directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(&cached).map_err(|e| DirectoryError::Write {
            message: format!("failed to serialize snapshot: {}", e),
        })?;

        let write_error = |e: std::io::Error| DirectoryError::Write {
            message: format!("{}: {}", parent.display(), e),
        };
        let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
        temp.write_all(json.as_bytes()).map_err(write_error)?;
        temp.persist(&self.config.path).map_err(|e| DirectoryError::Write {
            message: format!("{}: {}", self.config.path.display(), e.error),
        })?;

        Ok(())
    }
}
