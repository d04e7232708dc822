//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};

/// 2024-01-01T00:00:00Z in epoch milliseconds.
pub const T0: i64 = 1_704_067_200_000;

pub const DAY_MS: i64 = 86_400_000;

/// Body for POST /api/items.
pub fn add_item_request(chinese: &str, pinyin: &str, english: &str) -> Value {
    json!({
        "chinese": chinese,
        "pinyin": pinyin,
        "english": english,
    })
}

/// Body for POST /api/study/review.
pub fn review_request(card_id: &str, quality: i64) -> Value {
    json!({
        "cardId": card_id,
        "quality": quality,
    })
}
