//! SM-2 review scheduler.
//!
//! Grades are on a 0-3 scale but the ease update keeps the classic 0-5 shaped
//! formula, so every grade lowers the ease (Easy by 0.14, Good by 0.32).
//! Records persisted by earlier clients were produced this way.

use super::ReviewScheduler;
use crate::types::{Quality, ReviewRecord, INITIAL_EASE, MINIMUM_EASE};
use chrono::{DateTime, Duration, Utc};

/// SM-2 scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub first_interval: u32,
    pub second_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: INITIAL_EASE,
            minimum_ease: MINIMUM_EASE,
            first_interval: 1,
            second_interval: 6,
        }
    }
}

impl ReviewScheduler for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_record(&self, item_id: &str) -> ReviewRecord {
        ReviewRecord {
            ease_factor: self.initial_ease,
            ..ReviewRecord::new(item_id)
        }
    }

    fn next_review(
        &self,
        current: &ReviewRecord,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> ReviewRecord {
        let (interval_days, repetitions) = if quality.is_passing() {
            let interval = match current.repetitions {
                0 => self.first_interval,
                1 => self.second_interval,
                _ => (f64::from(current.interval_days) * current.ease_factor).round() as u32,
            };
            (interval, current.repetitions.saturating_add(1))
        } else {
            (self.first_interval, 0)
        };

        let ease_factor = self.next_ease(current.ease_factor, quality);

        // Always measured from now, never from the previous due date. Intervals
        // keep growing while the ease sits at its floor, so the date saturates.
        let next_review_at = now
            .checked_add_signed(Duration::days(i64::from(interval_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        ReviewRecord {
            item_id: current.item_id.clone(),
            interval_days,
            ease_factor,
            next_review_at,
            repetitions,
        }
    }
}

impl Sm2 {
    fn next_ease(&self, ease: f64, quality: Quality) -> f64 {
        let q = f64::from(quality.to_value());
        let updated = ease + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
        updated.max(self.minimum_ease)
    }
}
