//! Event types for the schedule

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::utils::time::{is_zero_time, zero_time};

/// Reminder attached to an event, relative to its start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default)]
    pub id: String,
    /// Minutes relative to the event start (negative = before)
    #[serde(rename = "offsetMinutes", default)]
    pub offset_minutes: i64,
    #[serde(default)]
    pub label: String,
}

impl Reminder {
    /// Create a new reminder
    pub fn new(id: impl Into<String>, offset_minutes: i64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            offset_minutes,
            label: label.into(),
        }
    }
}

/// A schedulable work item
///
/// `status`, `priority` and `owner` are free-form strings; the store does not
/// validate them. Optional fields are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "zero_time")]
    pub start: DateTime<FixedOffset>,
    #[serde(default = "zero_time")]
    pub end: DateTime<FixedOffset>,
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Ids of events this one depends on
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(
        rename = "transcriptRefs",
        default,
        deserialize_with = "null_as_default"
    )]
    pub transcript_refs: Vec<String>,
    #[serde(rename = "aiNotes", default, skip_serializing_if = "Option::is_none")]
    pub ai_notes: Option<String>,
    #[serde(rename = "createdAt", default = "zero_time")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(rename = "updatedAt", default = "zero_time")]
    pub updated_at: DateTime<FixedOffset>,
}

impl Event {
    /// Create a new unsaved event (empty id) spanning `start..end`
    pub fn new(
        title: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            start,
            end,
            all_day: false,
            status: String::new(),
            priority: String::new(),
            deadline: None,
            reminders: Vec::new(),
            owner: String::new(),
            assignees: Vec::new(),
            project: None,
            dependencies: Vec::new(),
            description: String::new(),
            instructions: String::new(),
            transcript_refs: Vec::new(),
            ai_notes: None,
            created_at: zero_time(),
            updated_at: zero_time(),
        }
    }

    /// Collapse empty optional values to absent.
    ///
    /// Collection fields cannot be null once deserialized, so only
    /// `project` and `deadline` need attention here.
    pub fn normalize(&mut self) {
        if self.project.as_deref().is_some_and(str::is_empty) {
            self.project = None;
        }
        if self.deadline.as_ref().is_some_and(is_zero_time) {
            self.deadline = None;
        }
    }

    /// Ordering used for the stored collection: start ascending, then id.
    pub fn chronological(a: &Event, b: &Event) -> Ordering {
        a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id))
    }
}
