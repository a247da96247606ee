//! Utility functions and helpers
//!
//! Atomic file writes, clock helpers and identifier generation.

pub mod atomic;
pub mod id;
pub mod time;

pub use atomic::{atomic_write, cleanup_temp_files, AtomicError, AtomicResult};
pub use id::{generate_token, new_event_id};
pub use time::{is_zero_time, now, zero_time};
