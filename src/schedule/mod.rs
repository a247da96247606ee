//! Schedule - the in-memory Domain Store
//!
//! Holds the authoritative copy of the events collection and the settings
//! record, each behind its own `RwLock`. Reads are served from memory;
//! every mutation is written through the [`DurableStore`] before it returns.
//!
//! # Lifecycle
//!
//! Construct once at process start with [`Schedule::open`], share it behind
//! an `Arc`, and drop it at exit. Nothing is buffered, so there is nothing
//! to flush on shutdown.
//!
//! # Locking
//!
//! The events lock and the settings lock are independent and no operation
//! takes both. Mutations hold the write lock across the file write.

mod events;
mod seed;
mod settings;

use std::collections::HashSet;

use chrono::Local;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::storage::DurableStore;
use crate::types::{Event, Settings};

pub use seed::seed_events;

/// Domain Store for events and settings
pub struct Schedule {
    pub(crate) storage: DurableStore,
    pub(crate) events: RwLock<Vec<Event>>,
    pub(crate) settings: RwLock<Settings>,
}

impl Schedule {
    /// Open the schedule rooted at `config.data_dir`.
    ///
    /// Missing or unreadable files are replaced: events with the seed set,
    /// settings with the builtin defaults. Load errors never reach the
    /// caller; they are logged.
    pub fn open(config: StoreConfig) -> Self {
        let storage = DurableStore::new(config);

        match storage.cleanup_temp_files() {
            Ok(0) => {}
            Ok(n) => info!(count = n, "removed stale temp files"),
            Err(e) => warn!(error = %e, "failed to clean up temp files"),
        }

        let events = Self::load_or_seed_events(&storage);
        let settings = Self::load_or_default_settings(&storage);

        Self {
            storage,
            events: RwLock::new(events),
            settings: RwLock::new(settings),
        }
    }

    /// Open the schedule at the directory named by `TAKEOFF_DATA_DIR`
    pub fn from_env() -> Self {
        Self::open(StoreConfig::from_env())
    }

    fn load_or_seed_events(storage: &DurableStore) -> Vec<Event> {
        let loaded = match storage.load_events() {
            Ok(events) if !events.is_empty() => Some(events),
            Ok(_) => None,
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                warn!(error = %e, "failed to load events, reseeding");
                None
            }
        };

        let mut events = match loaded {
            Some(events) => {
                let (mut events, dropped) = dedup_last_wins(events);
                events.iter_mut().for_each(Event::normalize);
                if dropped > 0 {
                    warn!(dropped, "dropped events with duplicate ids");
                    if let Err(e) = storage.save_events(&events) {
                        warn!(error = %e, "failed to persist deduplicated events");
                    }
                }
                info!(count = events.len(), "loaded events");
                events
            }
            None => {
                let seeded = seed_events(Local::now());
                if let Err(e) = storage.save_events(&seeded) {
                    warn!(error = %e, "failed to persist seeded events");
                }
                info!(count = seeded.len(), "seeded events");
                seeded
            }
        };

        events.sort_by(Event::chronological);
        events
    }

    fn load_or_default_settings(storage: &DurableStore) -> Settings {
        match storage.load_settings() {
            Ok(loaded) => {
                let settings = loaded.clone().merged_over(&Settings::builtin());
                if settings != loaded {
                    info!("filled unset settings fields with defaults");
                    if let Err(e) = storage.save_settings(&settings) {
                        warn!(error = %e, "failed to persist filled settings");
                    }
                }
                return settings;
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => warn!(error = %e, "failed to load settings, using defaults"),
        }

        let settings = Settings::builtin();
        if let Err(e) = storage.save_settings(&settings) {
            warn!(error = %e, "failed to persist default settings");
        }
        info!("using default settings");
        settings
    }

    /// Get the underlying durable store
    pub fn storage(&self) -> &DurableStore {
        &self.storage
    }
}

/// Keep the last occurrence of each id in file order; returns the number
/// of records dropped.
fn dedup_last_wins(events: Vec<Event>) -> (Vec<Event>, usize) {
    let total = events.len();
    let mut seen = HashSet::new();
    let mut kept: Vec<Event> = events
        .into_iter()
        .rev()
        .filter(|e| seen.insert(e.id.clone()))
        .collect();
    kept.reverse();
    let dropped = total - kept.len();
    (kept, dropped)
}

// Public operations, implemented in the submodules
impl Schedule {
    /// Snapshot of all events in `(start, id)` order
    pub fn list_events(&self) -> Vec<Event> {
        events::list_events(self)
    }

    /// Look up a single event by id
    pub fn get_event(&self, id: &str) -> Option<Event> {
        events::get_event(self, id)
    }

    /// Insert or replace an event and persist the collection
    pub fn save_event(&self, event: Event) -> StoreResult<Event> {
        events::save_event(self, event)
    }

    /// Remove an event by id and persist the collection
    pub fn delete_event(&self, id: &str) -> StoreResult<()> {
        events::delete_event(self, id)
    }

    /// Current settings snapshot
    pub fn get_settings(&self) -> Settings {
        settings::get_settings(self)
    }

    /// Merge an update over the current settings and persist the result
    pub fn save_settings(&self, update: Settings) -> StoreResult<Settings> {
        settings::save_settings(self, update)
    }
}
