//! Settings operations for the schedule

use tracing::debug;

use crate::error::StoreResult;
use crate::types::Settings;

use super::Schedule;

pub fn get_settings(schedule: &Schedule) -> Settings {
    schedule.settings.read().clone()
}

/// Replace the stored settings with `update` merged over them (holds write
/// lock during entire operation). The in-memory record changes only once
/// the file write succeeds.
pub fn save_settings(schedule: &Schedule, update: Settings) -> StoreResult<Settings> {
    let mut current = schedule.settings.write();
    let merged = update.merged_over(&current);

    schedule.storage.save_settings(&merged)?;
    *current = merged.clone();

    debug!(timezone = %merged.timezone, "saved settings");
    Ok(merged)
}
