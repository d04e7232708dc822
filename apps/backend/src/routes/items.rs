//! Item collection endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::models::{AddItemRequest, LearnableItem};
use crate::AppState;

/// GET /api/items
/// Returns every item in insertion order
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<LearnableItem>>> {
    let tracker = state.lock()?;
    Ok(Json(tracker.tracker().items().to_vec()))
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<LearnableItem>)> {
    let mut tracker = state.lock()?;
    let item = tracker.add_item(&payload.chinese, &payload.pinyin, &payload.english)?;

    tracing::info!("Added item {}", item.id);

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/items/:id
/// Deleting an unknown id is not an error
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let mut tracker = state.lock()?;
    if tracker.delete_item(&id)? {
        tracing::info!("Deleted item {}", id);
    }
    Ok(StatusCode::NO_CONTENT)
}
