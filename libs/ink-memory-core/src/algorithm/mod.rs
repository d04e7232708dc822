//! Review scheduling.

pub mod sm2;

use crate::error::Result;
use crate::types::{Quality, ReviewRecord};
use chrono::{DateTime, Utc};

pub use sm2::Sm2;

/// Trait for review schedulers.
pub trait ReviewScheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// Record an item is treated as having before its first grading.
    fn initial_record(&self, item_id: &str) -> ReviewRecord;

    /// Calculate the record that follows a grading at `now`.
    fn next_review(
        &self,
        current: &ReviewRecord,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> ReviewRecord;
}

/// Compute the next record for an item, treating a missing record as the
/// scheduler's initial one.
pub fn compute_next_review(
    current: Option<&ReviewRecord>,
    item_id: &str,
    quality: Quality,
    now: DateTime<Utc>,
) -> ReviewRecord {
    let sm2 = Sm2::default();
    match current {
        Some(record) => sm2.next_review(record, quality, now),
        None => sm2.next_review(&sm2.initial_record(item_id), quality, now),
    }
}

/// Like [`compute_next_review`] but takes the grade as a raw 0-3 value.
pub fn compute_next_review_raw(
    current: &ReviewRecord,
    quality: u8,
    now: DateTime<Utc>,
) -> Result<ReviewRecord> {
    let quality = Quality::try_from(quality)?;
    Ok(Sm2::default().next_review(current, quality, now))
}
