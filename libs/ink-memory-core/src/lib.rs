//! Core of the vocabulary trainer.
//!
//! Provides:
//! - SM-2 review scheduling
//! - The study tracker (items, review records, daily counts, streak)
//! - Loading and saving tracker state through a key-value store

pub mod algorithm;
pub mod calendar;
pub mod error;
pub mod persistence;
pub mod seed;
pub mod store;
pub mod streak;
pub mod tracker;
pub mod types;

pub use algorithm::{compute_next_review, ReviewScheduler, Sm2};
pub use calendar::Calendar;
pub use error::{Result, StoreError, TrackerError};
pub use persistence::{load_state, save_state, PersistentTracker};
pub use store::{
    Clock, FixedClock, IdGenerator, KeyValueStore, MemoryStore, SequentialIds, SystemClock,
    UuidGenerator,
};
pub use streak::compute_streak;
pub use tracker::{StudyTracker, TrackerState};
pub use types::{DailyStat, LearnableItem, Quality, ReviewRecord, StudyStats};
