//! Starter vocabulary for a fresh install.

use crate::types::LearnableItem;
use chrono::{DateTime, Utc};

/// `(id, prompt, hint, meaning)` for each starter item.
pub const DEFAULT_VOCABULARY: [(&str, &str, &str, &str); 8] = [
    ("1", "你好", "nǐ hǎo", "Hello"),
    ("2", "谢谢", "xiè xiè", "Thank you"),
    ("3", "再见", "zài jiàn", "Goodbye"),
    ("4", "是", "shì", "To be / Yes"),
    ("5", "不", "bù", "No / Not"),
    ("6", "我", "wǒ", "I / Me"),
    ("7", "你", "nǐ", "You"),
    ("8", "好", "hǎo", "Good"),
];

/// The starter items, all stamped with `now`.
pub fn default_items(now: DateTime<Utc>) -> Vec<LearnableItem> {
    DEFAULT_VOCABULARY
        .iter()
        .map(|(id, prompt, hint, meaning)| LearnableItem {
            id: id.to_string(),
            prompt: prompt.to_string(),
            hint: hint.to_string(),
            meaning: meaning.to_string(),
            created_at: now,
        })
        .collect()
}
