//! Core types for the vocabulary tracker.
//!
//! Field names on the wire match the layout already persisted by earlier
//! clients, hence the renames.

use crate::error::TrackerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ease factor assigned to an item that has never been graded.
pub const INITIAL_EASE: f64 = 2.5;

/// Lower bound for the ease factor.
pub const MINIMUM_EASE: f64 = 1.3;

/// A vocabulary entry the learner studies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnableItem {
    pub id: String,
    #[serde(rename = "chinese")]
    pub prompt: String,
    #[serde(rename = "pinyin")]
    pub hint: String,
    #[serde(rename = "english")]
    pub meaning: String,
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Scheduling state of an item that has been graded at least once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "cardId")]
    pub item_id: String,
    #[serde(rename = "interval")]
    pub interval_days: u32,
    #[serde(rename = "easeFactor")]
    pub ease_factor: f64,
    #[serde(rename = "nextReview", with = "chrono::serde::ts_milliseconds")]
    pub next_review_at: DateTime<Utc>,
    pub repetitions: u32,
}

impl ReviewRecord {
    /// The record an item is treated as having before its first grading.
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            interval_days: 0,
            ease_factor: INITIAL_EASE,
            next_review_at: DateTime::<Utc>::default(),
            repetitions: 0,
        }
    }

    /// Whether the item is due at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}

/// Recall grade for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quality {
    Again,
    Hard,
    Good,
    Easy,
}

impl Quality {
    /// Numeric value on the 0-3 scale.
    pub fn to_value(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Hard => 1,
            Self::Good => 2,
            Self::Easy => 3,
        }
    }

    /// Create from the 0-3 scale.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Again),
            1 => Some(Self::Hard),
            2 => Some(Self::Good),
            3 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Good and Easy count as successful recall.
    pub fn is_passing(self) -> bool {
        self >= Self::Good
    }
}

impl TryFrom<u8> for Quality {
    type Error = TrackerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| {
            TrackerError::InvalidArgument(format!("quality must be 0-3, got {value}"))
        })
    }
}

impl TryFrom<i64> for Quality {
    type Error = TrackerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| {
                TrackerError::InvalidArgument(format!("quality must be 0-3, got {value}"))
            })
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.to_value()
    }
}

/// Number of gradings recorded on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub count: u32,
}

/// Aggregate statistics over the tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub total_cards: usize,
    pub due_count: usize,
    pub reviewed_today: u32,
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quality_round_trips_through_value() {
        for value in 0..=3u8 {
            let quality = Quality::from_value(value).unwrap();
            assert_eq!(quality.to_value(), value);
        }
        assert!(Quality::from_value(4).is_none());
    }

    #[test]
    fn quality_rejects_out_of_range() {
        let err = Quality::try_from(7u8).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidArgument(_)));
    }

    #[test]
    fn wide_quality_does_not_wrap() {
        assert_eq!(Quality::try_from(3i64).unwrap(), Quality::Easy);
        for value in [-1i64, 4, 256, 258, i64::MAX, i64::MIN] {
            let err = Quality::try_from(value).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid argument: quality must be 0-3, got {value}")
            );
        }
    }

    #[test]
    fn passing_grades() {
        assert!(!Quality::Again.is_passing());
        assert!(!Quality::Hard.is_passing());
        assert!(Quality::Good.is_passing());
        assert!(Quality::Easy.is_passing());
    }

    #[test]
    fn item_uses_persisted_field_names() {
        let item = LearnableItem {
            id: "1".to_string(),
            prompt: "你好".to_string(),
            hint: "nǐ hǎo".to_string(),
            meaning: "Hello".to_string(),
            created_at: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "chinese": "你好",
                "pinyin": "nǐ hǎo",
                "english": "Hello",
                "createdAt": 1_700_000_000_123i64,
            })
        );
    }

    #[test]
    fn record_reads_legacy_json() {
        let json = r#"{"cardId":"abc","interval":6,"easeFactor":2.18,
            "nextReview":1704067200000,"repetitions":2}"#;
        let record: ReviewRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.item_id, "abc");
        assert_eq!(record.interval_days, 6);
        assert_eq!(record.repetitions, 2);
        assert_eq!(record.next_review_at.timestamp_millis(), 1_704_067_200_000);
    }

    #[test]
    fn default_record_is_due_immediately() {
        let record = ReviewRecord::new("x");
        assert_eq!(record.ease_factor, INITIAL_EASE);
        assert!(record.is_due(Utc::now()));
    }
}
