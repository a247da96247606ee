//! Global scheduling settings

use serde::{Deserialize, Serialize};

/// Singleton configuration record governing scheduling defaults
///
/// `Default` yields the all-zero record, which is what an empty update
/// looks like. Use [`Settings::builtin`] for the shipped defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timezone: String,
    /// Time of day as "HH:MM"
    #[serde(rename = "workdayStart")]
    pub workday_start: String,
    /// Time of day as "HH:MM"
    #[serde(rename = "workdayEnd")]
    pub workday_end: String,
    #[serde(rename = "defaultSlotMin")]
    pub default_slot_min: u32,
    #[serde(rename = "maxHoursPerDay")]
    pub max_hours_per_day: u32,
    #[serde(rename = "deepWorkAM")]
    pub deep_work_am: bool,
}

impl Settings {
    /// Hardcoded defaults used on first run and as the last fallback
    pub fn builtin() -> Self {
        Self {
            timezone: "America/Los_Angeles".to_string(),
            workday_start: "08:00".to_string(),
            workday_end: "17:00".to_string(),
            default_slot_min: 60,
            max_hours_per_day: 5,
            deep_work_am: true,
        }
    }

    /// Fill every zero-valued scalar from `current`, then from the builtin
    /// defaults. `deep_work_am` is taken as given.
    pub fn merged_over(mut self, current: &Settings) -> Self {
        let builtin = Self::builtin();

        fill_str(&mut self.timezone, &current.timezone, builtin.timezone);
        fill_str(&mut self.workday_start, &current.workday_start, builtin.workday_start);
        fill_str(&mut self.workday_end, &current.workday_end, builtin.workday_end);
        fill_num(&mut self.default_slot_min, current.default_slot_min, builtin.default_slot_min);
        fill_num(&mut self.max_hours_per_day, current.max_hours_per_day, builtin.max_hours_per_day);

        self
    }
}

fn fill_str(field: &mut String, current: &str, fallback: String) {
    if field.is_empty() {
        *field = if current.is_empty() {
            fallback
        } else {
            current.to_string()
        };
    }
}

fn fill_num(field: &mut u32, current: u32, fallback: u32) {
    if *field == 0 {
        *field = if current == 0 { fallback } else { current };
    }
}
