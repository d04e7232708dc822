pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{delete, get, post},
    Router,
};
use ink_memory_core::{KeyValueStore, PersistentTracker, StudyTracker, SystemClock, UuidGenerator};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::store::SqliteStore;

/// Tracker bound to whichever store the service was started with.
pub type Tracker = PersistentTracker<Box<dyn KeyValueStore>>;

/// Shared application state
///
/// Every request goes through the one lock, so a grading is never observed
/// half-applied by a concurrent due-items or stats query.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    pub fn lock(&self) -> error::Result<MutexGuard<'_, Tracker>> {
        self.tracker
            .lock()
            .map_err(|_| ApiError::Internal("tracker lock poisoned".to_string()))
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/items", get(routes::items::list).post(routes::items::create))
        .route("/api/items/:id", delete(routes::items::delete))
        .route("/api/study/due", get(routes::study::due))
        .route("/api/study/review", post(routes::study::review))
        .route("/api/stats", get(routes::stats::get))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Opening study data at {}", config.data_path.display());
    let store = SqliteStore::open(&config.data_path)?;

    let tracker = StudyTracker::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
        .with_calendar(config.calendar);
    let store: Box<dyn KeyValueStore> = Box::new(store);
    let tracker = PersistentTracker::open(store, tracker)?;

    let app = router(AppState::new(tracker));

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
