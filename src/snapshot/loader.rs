use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::config::SearchConfig;
use crate::error::{FacetdexError, Result};
use crate::models::envelope::RESERVED_RESULT_KEYS;
use crate::models::{Record, SnapshotDocument};

/// Immutable record set plus the envelope fields that surrounded it on disk
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub records: Vec<Record>,
    /// Top-level keys next to `result` (`help`, `success`, ...)
    pub extra: Map<String, Value>,
    /// Keys inside `result` other than the ones the engine computes
    pub body_extra: Map<String, Value>,
}

impl Snapshot {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse a snapshot from JSON text
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        let document: SnapshotDocument = serde_json::from_str(raw)?;
        Ok(Self::from(document))
    }
}

impl From<SnapshotDocument> for Snapshot {
    fn from(document: SnapshotDocument) -> Self {
        let mut body_extra = document.result.extra;
        for key in RESERVED_RESULT_KEYS {
            body_extra.remove(key);
        }
        Self {
            records: document.result.results,
            extra: document.extra,
            body_extra,
        }
    }
}

/// Outcome of a health check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy { reason: String },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Reads the snapshot file named by the search configuration
#[derive(Clone, Debug)]
pub struct SnapshotLoader {
    path: PathBuf,
}

impl SnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.snapshot_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot file
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FacetdexError::SnapshotUnavailable(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot =
            Snapshot::from_json_str(&raw).map_err(|source| FacetdexError::SnapshotMalformed {
                path: self.path.clone(),
                source,
            })?;

        info!(records = snapshot.len(), "snapshot loaded");
        Ok(snapshot)
    }

    /// Check that the snapshot file is still on disk
    pub fn check(&self) -> HealthStatus {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => HealthStatus::Healthy,
            Ok(_) => {
                let reason = format!("{} is not a regular file", self.path.display());
                warn!(%reason, "snapshot health check failed");
                HealthStatus::Unhealthy { reason }
            }
            Err(e) => {
                let reason = format!("{}: {}", self.path.display(), e);
                warn!(%reason, "snapshot health check failed");
                HealthStatus::Unhealthy { reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_snapshot(dir: &TempDir, body: &Value) -> PathBuf {
        let path = dir.path().join("packages.json");
        fs::write(&path, serde_json::to_string(body).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write_snapshot(
            &dir,
            &json!({
                "help": "package_search",
                "success": true,
                "result": {
                    "count": 99,
                    "facets": {"stale": {}},
                    "sort": "score desc",
                    "results": [
                        {"id": "a", "title": "A", "groups": [], "resources": []},
                        {"id": "b", "title": "B", "groups": [], "resources": []}
                    ]
                }
            }),
        );

        let snapshot = SnapshotLoader::new(&path).load().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records[1].id, "b");
        assert_eq!(snapshot.extra.get("success"), Some(&json!(true)));
        assert_eq!(snapshot.body_extra.get("sort"), Some(&json!("score desc")));
        assert!(!snapshot.body_extra.contains_key("facets"));
        assert!(!snapshot.body_extra.contains_key("count"));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let loader = SnapshotLoader::new(dir.path().join("absent.json"));

        assert!(matches!(
            loader.load(),
            Err(FacetdexError::SnapshotUnavailable(_))
        ));
        assert!(!loader.check().is_healthy());
    }

    #[test]
    fn test_unparsable_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("packages.json");
        fs::write(&path, "{\"result\": [").unwrap();

        let err = SnapshotLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, FacetdexError::SnapshotMalformed { .. }));
    }

    #[test]
    fn test_check_tracks_file_presence() {
        let dir = TempDir::new().unwrap();
        let path = write_snapshot(&dir, &json!({"result": {"results": []}}));
        let loader = SnapshotLoader::new(&path);
        assert_eq!(loader.check(), HealthStatus::Healthy);

        fs::remove_file(&path).unwrap();
        assert!(matches!(loader.check(), HealthStatus::Unhealthy { .. }));

        let dir_loader = SnapshotLoader::new(dir.path());
        assert!(!dir_loader.check().is_healthy());
    }
}
