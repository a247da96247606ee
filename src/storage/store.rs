//! Durable Store - JSON load/save with atomic replacement

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::types::{Event, Settings};
use crate::utils::{atomic_write, cleanup_temp_files};

/// File-backed store for the events collection and the settings record.
///
/// Holds no state beyond its paths; callers are responsible for
/// serializing access.
#[derive(Debug, Clone)]
pub struct DurableStore {
    config: StoreConfig,
}

impl DurableStore {
    /// Create a store rooted at the configured data directory
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load the events collection
    ///
    /// Fails with `NotFound` if the file is missing and `CorruptData` if it
    /// does not parse as an array of events.
    pub fn load_events(&self) -> StoreResult<Vec<Event>> {
        read_json(&self.config.events_path())
    }

    /// Load the settings record
    pub fn load_settings(&self) -> StoreResult<Settings> {
        read_json(&self.config.settings_path())
    }

    /// Persist the full events collection atomically
    pub fn save_events(&self, events: &[Event]) -> StoreResult<()> {
        write_json(&self.config.events_path(), events)
    }

    /// Persist the settings record atomically
    pub fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        write_json(&self.config.settings_path(), settings)
    }

    /// Remove `.tmp` files left behind by an interrupted write
    pub fn cleanup_temp_files(&self) -> StoreResult<usize> {
        Ok(cleanup_temp_files(self.config.data_dir())?)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let data = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.display().to_string()),
        _ => StoreError::Io(e),
    })?;

    serde_json::from_slice(&data).map_err(|source| StoreError::CorruptData {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let data = serde_json::to_vec_pretty(value).map_err(StoreError::Serialization)?;
    atomic_write(path, &data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use tempfile::TempDir;

    fn test_store() -> (DurableStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DurableStore::new(StoreConfig::new(temp_dir.path().join("data")));
        (store, temp_dir)
    }

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_load_missing_files_is_not_found() {
        let (store, _dir) = test_store();

        assert!(store.load_events().unwrap_err().is_not_found());
        assert!(store.load_settings().unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_corrupt_file() {
        let (store, _dir) = test_store();
        fs::create_dir_all(store.config().data_dir()).unwrap();
        fs::write(store.config().events_path(), "{ not json").unwrap();
        fs::write(store.config().settings_path(), "[1, 2, 3]").unwrap();

        assert!(matches!(store.load_events(), Err(StoreError::CorruptData { .. })));
        assert!(matches!(store.load_settings(), Err(StoreError::CorruptData { .. })));
    }

    #[test]
    fn test_events_round_trip() {
        let (store, _dir) = test_store();

        let mut event = Event::new(
            "Review",
            ts("2025-03-10T09:00:00-07:00"),
            ts("2025-03-10T10:00:00-07:00"),
        );
        event.id = "evt-review".to_string();
        event.project = Some("Orion".to_string());
        event.created_at = ts("2025-03-01T12:00:00.123456789-08:00");
        event.updated_at = event.created_at;

        store.save_events(std::slice::from_ref(&event)).unwrap();
        let loaded = store.load_events().unwrap();

        assert_eq!(loaded, vec![event]);
        assert!(!store.config().data_dir().join("events.json.tmp").exists());
    }

    #[test]
    fn test_persisted_format() {
        let (store, _dir) = test_store();
        let event = Event::new(
            "Review",
            ts("2025-03-10T09:00:00Z"),
            ts("2025-03-10T10:00:00Z"),
        );

        store.save_events(&[event]).unwrap();
        let raw = fs::read_to_string(store.config().events_path()).unwrap();

        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"transcriptRefs\": []"));
        assert!(raw.contains("\"start\": \"2025-03-10T09:00:00Z\"") || raw.contains("\"start\": \"2025-03-10T09:00:00+00:00\""));
        assert!(!raw.contains("null"));
        assert!(!raw.contains("\"deadline\""));
    }

    #[test]
    fn test_settings_round_trip() {
        let (store, _dir) = test_store();

        store.save_settings(&Settings::builtin()).unwrap();

        assert_eq!(store.load_settings().unwrap(), Settings::builtin());
        assert!(!store.config().data_dir().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_save_into_unwritable_location_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "regular file").unwrap();
        let store = DurableStore::new(StoreConfig::new(blocker.join("data")));

        let err = store.save_settings(&Settings::builtin()).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_cleanup_temp_files() {
        let (store, _dir) = test_store();
        fs::create_dir_all(store.config().data_dir()).unwrap();
        fs::write(store.config().data_dir().join("events.json.tmp"), "[").unwrap();

        assert_eq!(store.cleanup_temp_files().unwrap(), 1);
    }
}
