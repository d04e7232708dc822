//! Study endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{DueItemsResponse, Quality, ReviewRecord, ReviewRequest};
use crate::AppState;

/// GET /api/study/due
pub async fn due(State(state): State<AppState>) -> Result<Json<DueItemsResponse>> {
    let tracker = state.lock()?;
    let items: Vec<_> = tracker.due_items().into_iter().cloned().collect();

    Ok(Json(DueItemsResponse {
        count: items.len(),
        items,
    }))
}

/// POST /api/study/review
pub async fn review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ReviewRecord>> {
    let quality = Quality::try_from(payload.quality)?;

    let mut tracker = state.lock()?;
    let record = tracker.grade_item(&payload.card_id, quality)?;

    tracing::debug!(
        "Graded {} as {:?}, next review in {} days",
        payload.card_id,
        quality,
        record.interval_days
    );

    Ok(Json(record))
}
