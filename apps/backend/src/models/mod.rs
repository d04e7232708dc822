//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from ink-memory-core
pub use ink_memory_core::types::{LearnableItem, Quality, ReviewRecord, StudyStats};

/// Body of POST /api/items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub chinese: String,
    pub pinyin: String,
    pub english: String,
}

/// Body of POST /api/study/review
///
/// `quality` is taken as a wide raw number so out-of-range grades, negative
/// or beyond a byte, get a descriptive 400 instead of a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub card_id: String,
    pub quality: i64,
}

/// Response of GET /api/study/due
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueItemsResponse {
    pub items: Vec<LearnableItem>,
    pub count: usize,
}
