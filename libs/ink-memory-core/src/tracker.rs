//! Study tracker: owns the items, their review records and the daily
//! review counts.

use crate::algorithm::{ReviewScheduler, Sm2};
use crate::calendar::Calendar;
use crate::error::{Result, TrackerError};
use crate::store::{Clock, IdGenerator};
use crate::streak::compute_streak;
use crate::types::{DailyStat, LearnableItem, Quality, ReviewRecord, StudyStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Items in insertion order.
    pub items: Vec<LearnableItem>,
    /// Review records keyed by item id.
    pub records: BTreeMap<String, ReviewRecord>,
    /// Daily review counts, in insertion order.
    pub stats: Vec<DailyStat>,
}

/// In-memory study state and the operations over it.
pub struct StudyTracker {
    state: TrackerState,
    scheduler: Box<dyn ReviewScheduler>,
    calendar: Calendar,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl StudyTracker {
    /// Empty tracker using the SM-2 scheduler and the local calendar.
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: TrackerState::default(),
            scheduler: Box::new(Sm2::default()),
            calendar: Calendar::default(),
            clock,
            ids,
        }
    }

    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Replace the state, dropping review records whose item no longer exists.
    pub fn with_state(mut self, state: TrackerState) -> Self {
        self.state = state;
        let before = self.state.records.len();
        let items = &self.state.items;
        self.state
            .records
            .retain(|id, _| items.iter().any(|item| &item.id == id));
        let pruned = before - self.state.records.len();
        if pruned > 0 {
            tracing::debug!(pruned, "dropped review records without an item");
        }
        self
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn items(&self) -> &[LearnableItem] {
        &self.state.items
    }

    pub fn item(&self, id: &str) -> Option<&LearnableItem> {
        self.state.items.iter().find(|item| item.id == id)
    }

    pub fn record(&self, id: &str) -> Option<&ReviewRecord> {
        self.state.records.get(id)
    }

    /// Stored record for `id`, or the scheduler's initial record.
    pub fn record_or_default(&self, id: &str) -> ReviewRecord {
        self.state
            .records
            .get(id)
            .cloned()
            .unwrap_or_else(|| self.scheduler.initial_record(id))
    }

    pub fn daily_stats(&self) -> &[DailyStat] {
        &self.state.stats
    }

    /// Add a new item stamped with a fresh id and the current time.
    pub fn add_item(
        &mut self,
        prompt: impl Into<String>,
        hint: impl Into<String>,
        meaning: impl Into<String>,
    ) -> LearnableItem {
        let item = LearnableItem {
            id: self.ids.next_id(),
            prompt: prompt.into(),
            hint: hint.into(),
            meaning: meaning.into(),
            created_at: self.clock.now(),
        };
        tracing::debug!(id = %item.id, "added item");
        self.state.items.push(item.clone());
        item
    }

    /// Remove an item and its review record. Daily counts are kept.
    ///
    /// Returns whether an item was removed; an unknown id is not an error.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.id != id);
        self.state.records.remove(id);
        let removed = self.state.items.len() != before;
        if removed {
            tracing::debug!(id, "deleted item");
        }
        removed
    }

    /// Items never graded or whose next review is at or before `now`, in
    /// insertion order.
    pub fn due_items(&self, now: DateTime<Utc>) -> Vec<&LearnableItem> {
        self.state
            .items
            .iter()
            .filter(|item| self.is_due(&item.id, now))
            .collect()
    }

    fn is_due(&self, id: &str, now: DateTime<Utc>) -> bool {
        self.state
            .records
            .get(id)
            .map_or(true, |record| record.is_due(now))
    }

    /// Grade an item at `now`, updating its record and today's count.
    pub fn grade_item(
        &mut self,
        id: &str,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> Result<ReviewRecord> {
        if self.item(id).is_none() {
            return Err(TrackerError::NotFound(id.to_string()));
        }

        let current = self.record_or_default(id);
        let next = self.scheduler.next_review(&current, quality, now);
        self.state.records.insert(id.to_string(), next.clone());

        let today = self.calendar.date_string(now);
        match self.state.stats.iter_mut().find(|stat| stat.date == today) {
            Some(stat) => stat.count = stat.count.saturating_add(1),
            None => self.state.stats.push(DailyStat { date: today, count: 1 }),
        }

        tracing::debug!(
            id,
            scheduler = self.scheduler.name(),
            quality = quality.to_value(),
            interval_days = next.interval_days,
            ease_factor = next.ease_factor,
            "graded item"
        );
        Ok(next)
    }

    /// Totals, due count, today's reviews and the current streak.
    pub fn statistics(&self, now: DateTime<Utc>) -> StudyStats {
        let today = self.calendar.date_of(now);
        let today_str = crate::calendar::format_date(today);
        let reviewed_today = self
            .state
            .stats
            .iter()
            .find(|stat| stat.date == today_str)
            .map_or(0, |stat| stat.count);

        StudyStats {
            total_cards: self.state.items.len(),
            due_count: self.due_items(now).len(),
            reviewed_today,
            streak: compute_streak(&self.state.stats, today),
        }
    }
}
