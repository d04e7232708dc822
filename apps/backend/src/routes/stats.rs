//! Statistics endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StudyStats;
use crate::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> Result<Json<StudyStats>> {
    let tracker = state.lock()?;
    Ok(Json(tracker.statistics()))
}
