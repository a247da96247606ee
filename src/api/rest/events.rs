//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{run_blocking, ApiError};
use crate::api::state::AppState;
use crate::types::Event;

/// GET /api/events - List all events
pub async fn list_events(State(state): State<Arc<AppState>>) -> Json<Vec<Event>> {
    Json(state.schedule.list_events())
}

/// GET /api/events/:id - Get single event
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    state
        .schedule
        .get_event(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("event {} not found", id)))
}

/// POST /api/events - Create (empty id) or update an event
pub async fn save_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<Event>,
) -> Result<Json<Event>, ApiError> {
    let schedule = Arc::clone(&state.schedule);
    let saved = run_blocking(move || schedule.save_event(event)).await?;
    Ok(Json(saved))
}

/// DELETE /api/events/:id - Delete an event
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let schedule = Arc::clone(&state.schedule);
    run_blocking(move || schedule.delete_event(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
