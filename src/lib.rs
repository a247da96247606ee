//! Takeoff scheduler core
//!
//! The persistence and mutation core of the Takeoff desktop scheduler:
//! a concurrent in-memory store of events and settings, written through
//! to crash-safe JSON files on every mutation.
//!
//! # Modules
//!
//! - `types`: Core records (Event, Reminder, Settings)
//! - `storage`: Durable Store with atomic JSON writes
//! - `schedule`: Domain Store with identity, merge and ordering rules
//! - `api`: HTTP endpoints for the frontend
//! - `config`: Data directory and bind address
//! - `utils`: Atomic writes, clock and id helpers
//!
//! # Example
//!
//! ```no_run
//! use takeoff::{Schedule, StoreConfig};
//! use takeoff::types::Settings;
//!
//! let schedule = Schedule::open(StoreConfig::new("data"));
//! for event in schedule.list_events() {
//!     println!("{} {}", event.start, event.title);
//! }
//! let settings = schedule.save_settings(Settings::default()).unwrap();
//! assert_eq!(settings.default_slot_min, 60);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod schedule;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ServerConfig, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use schedule::Schedule;
pub use storage::DurableStore;
pub use types::{Event, Reminder, Settings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
