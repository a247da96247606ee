//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::schedule::Schedule;

/// State handed to every handler
pub struct AppState {
    /// The schedule, constructed once at startup
    pub schedule: Arc<Schedule>,
}

impl AppState {
    pub fn new(schedule: Arc<Schedule>) -> Self {
        Self { schedule }
    }
}
