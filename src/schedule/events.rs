//! Event operations for the schedule
//!
//! Mutations are staged on a copy of the collection and swapped in only
//! after the durable write succeeds, so a failed write leaves memory and
//! disk in agreement.

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::types::Event;
use crate::utils::{new_event_id, now};

use super::Schedule;

/// Snapshot of all events (shared lock)
pub fn list_events(schedule: &Schedule) -> Vec<Event> {
    schedule.events.read().clone()
}

/// Find one event by id (shared lock)
pub fn get_event(schedule: &Schedule, id: &str) -> Option<Event> {
    schedule.events.read().iter().find(|e| e.id == id).cloned()
}

/// Upsert an event (holds write lock during entire operation)
///
/// An empty id gets a fresh `evt-` id. An id that matches an existing event
/// keeps that event's `created_at`; an unknown id is inserted as new.
pub fn save_event(schedule: &Schedule, mut event: Event) -> StoreResult<Event> {
    let mut events = schedule.events.write();
    let now = now();

    if event.id.is_empty() {
        event.id = unused_id(&events);
    }

    let existing = events.iter().position(|e| e.id == event.id);
    event.created_at = match existing {
        Some(i) => events[i].created_at,
        None => now,
    };
    event.updated_at = now;
    event.normalize();

    let mut next = events.clone();
    match existing {
        Some(i) => next[i] = event.clone(),
        None => next.push(event.clone()),
    }
    next.sort_by(Event::chronological);

    schedule.storage.save_events(&next)?;
    *events = next;

    debug!(id = %event.id, created = existing.is_none(), "saved event");
    Ok(event)
}

/// Delete an event by id (holds write lock during entire operation)
pub fn delete_event(schedule: &Schedule, id: &str) -> StoreResult<()> {
    if id.is_empty() {
        return Err(StoreError::NotFound("event id is required".to_string()));
    }

    let mut events = schedule.events.write();
    let index = events
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| StoreError::NotFound(format!("event {} not found", id)))?;

    let mut next = events.clone();
    next.remove(index);

    schedule.storage.save_events(&next)?;
    *events = next;

    debug!(id = %id, "deleted event");
    Ok(())
}

fn unused_id(events: &[Event]) -> String {
    loop {
        let id = new_event_id();
        if !events.iter().any(|e| e.id == id) {
            return id;
        }
    }
}
