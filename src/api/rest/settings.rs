//! Settings endpoints

use std::sync::Arc;

use axum::{extract::State, Json};

use super::{run_blocking, ApiError};
use crate::api::state::AppState;
use crate::types::Settings;

/// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.schedule.get_settings())
}

/// PUT /api/settings - Zero-valued fields keep their stored value
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<Settings>,
) -> Result<Json<Settings>, ApiError> {
    let schedule = Arc::clone(&state.schedule);
    let saved = run_blocking(move || schedule.save_settings(update)).await?;
    Ok(Json(saved))
}
