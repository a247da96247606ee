//! Data types for the Takeoff scheduler
//!
//! This module contains the records that are held in memory by the
//! schedule and persisted to disk by the storage layer.

mod event;
mod settings;

use serde::{Deserialize, Deserializer};

pub use event::{Event, Reminder};
pub use settings::Settings;

/// Deserialize a field that the frontend may send as `null`, treating it as
/// the type's default (empty collection, empty string).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
