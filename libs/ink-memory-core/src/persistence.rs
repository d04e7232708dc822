//! Loading and saving tracker state through a [`KeyValueStore`].
//!
//! Each collection lives under its own key as JSON. Collections are decoded
//! independently so one corrupt entry never blocks the other two, and empty
//! collections are never written.

use crate::error::{Result, StoreError};
use crate::seed::default_items;
use crate::store::KeyValueStore;
use crate::tracker::{StudyTracker, TrackerState};
use crate::types::{LearnableItem, Quality, ReviewRecord, StudyStats};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const ITEMS_KEY: &str = "chinese_flashcards_cards";
pub const RECORDS_KEY: &str = "chinese_flashcards_reviews";
pub const STATS_KEY: &str = "chinese_flashcards_stats";

/// Read one collection. Missing keys give `None`, malformed entries are
/// logged and treated as empty, and store failures are returned.
fn read<T, S>(store: &S, key: &str) -> std::result::Result<Option<T>, StoreError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(bytes) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed collection, using empty");
            Ok(Some(T::default()))
        }
    }
}

fn write<T, S>(store: &mut S, key: &str, value: &T) -> std::result::Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes)
}

/// Load all three collections, seeding the starter vocabulary when no item
/// collection has ever been stored.
pub fn load_state<S: KeyValueStore + ?Sized>(
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<TrackerState> {
    let items = match read::<Vec<LearnableItem>, _>(&*store, ITEMS_KEY)? {
        Some(items) => items,
        None => {
            let items = default_items(now);
            write(store, ITEMS_KEY, &items)?;
            tracing::info!(count = items.len(), "seeded default vocabulary");
            items
        }
    };
    let records = read(&*store, RECORDS_KEY)?.unwrap_or_default();
    let stats = read(&*store, STATS_KEY)?.unwrap_or_default();

    Ok(TrackerState {
        items,
        records,
        stats,
    })
}

/// Write every non-empty collection.
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, state: &TrackerState) -> Result<()> {
    if !state.items.is_empty() {
        write(store, ITEMS_KEY, &state.items)?;
    }
    if !state.records.is_empty() {
        write(store, RECORDS_KEY, &state.records)?;
    }
    if !state.stats.is_empty() {
        write(store, STATS_KEY, &state.stats)?;
    }
    Ok(())
}

/// A [`StudyTracker`] bound to a store: state is loaded on open and saved
/// after every mutation.
///
/// When a save fails the in-memory change has already been applied; the
/// error is returned so the caller can decide what to do.
pub struct PersistentTracker<S> {
    tracker: StudyTracker,
    store: S,
}

impl<S: KeyValueStore> PersistentTracker<S> {
    /// Load state from `store` into `tracker`.
    pub fn open(mut store: S, tracker: StudyTracker) -> Result<Self> {
        let now = tracker.clock().now();
        let state = load_state(&mut store, now)?;
        tracing::info!(
            items = state.items.len(),
            records = state.records.len(),
            days = state.stats.len(),
            "loaded study state"
        );
        Ok(Self {
            tracker: tracker.with_state(state),
            store,
        })
    }

    pub fn tracker(&self) -> &StudyTracker {
        &self.tracker
    }

    fn now(&self) -> DateTime<Utc> {
        self.tracker.clock().now()
    }

    /// Persist the current state.
    pub fn save(&mut self) -> Result<()> {
        save_state(&mut self.store, self.tracker.state())
    }

    pub fn add_item(&mut self, prompt: &str, hint: &str, meaning: &str) -> Result<LearnableItem> {
        let item = self.tracker.add_item(prompt, hint, meaning);
        self.save()?;
        Ok(item)
    }

    pub fn delete_item(&mut self, id: &str) -> Result<bool> {
        let removed = self.tracker.delete_item(id);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn due_items(&self) -> Vec<&LearnableItem> {
        self.tracker.due_items(self.now())
    }

    pub fn grade_item(&mut self, id: &str, quality: Quality) -> Result<ReviewRecord> {
        let now = self.now();
        let record = self.tracker.grade_item(id, quality, now)?;
        self.save()?;
        Ok(record)
    }

    pub fn statistics(&self) -> StudyStats {
        self.tracker.statistics(self.now())
    }
}
