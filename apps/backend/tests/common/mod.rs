//! Common test utilities for integration tests.
//!
//! Every context runs against an in-memory store with a fixed clock at
//! 2024-01-01T00:00:00Z and a UTC calendar, so no external services are
//! needed.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Duration};

use ink_memory_backend::{router, AppState};
use ink_memory_core::persistence::ITEMS_KEY;
use ink_memory_core::{
    Calendar, FixedClock, KeyValueStore, MemoryStore, PersistentTracker, SequentialIds,
    StudyTracker,
};

/// Test context holding the app state and handles to its collaborators.
pub struct TestContext {
    pub clock: Arc<FixedClock>,
    pub store: MemoryStore,
    state: AppState,
}

impl TestContext {
    /// Fresh install: the store is empty, so the starter vocabulary is seeded.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Store with an item collection that is present but empty.
    pub fn empty() -> Self {
        let mut store = MemoryStore::new();
        store.set(ITEMS_KEY, b"[]").expect("memory store write");
        Self::with_store(store)
    }

    /// Open a tracker on an existing store.
    pub fn with_store(store: MemoryStore) -> Self {
        let start = DateTime::from_timestamp_millis(fixtures::T0).expect("valid timestamp");
        let clock = Arc::new(FixedClock::new(start));
        let tracker = StudyTracker::new(clock.clone(), Arc::new(SequentialIds::new()))
            .with_calendar(Calendar::utc());
        let boxed: Box<dyn KeyValueStore> = Box::new(store.clone());
        let tracker = PersistentTracker::open(boxed, tracker).expect("failed to open tracker");

        Self {
            clock,
            store,
            state: AppState::new(tracker),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("failed to start test server")
    }

    pub fn advance_days(&self, days: i64) {
        self.clock.advance(Duration::days(days));
    }
}
