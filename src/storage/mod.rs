//! Durable Store - file-backed persistence
//!
//! Reads and writes the two JSON collections:
//!
//! ```text
//! data/
//! ├── events.json      # array of events, sorted by (start, id)
//! └── settings.json    # single settings object
//! ```
//!
//! Every write goes through [`crate::utils::atomic_write`], so a crash
//! mid-write leaves the previous file intact.

mod store;

pub use store::DurableStore;
