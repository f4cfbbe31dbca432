//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::navigation::{NavigationConfig, NavigationController};
use crate::store::RecordStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Hospital records
    pub store: Arc<RecordStore>,
    /// Current view and scheduled renders
    pub navigation: Arc<NavigationController>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>, config: ApiConfig, navigation: NavigationConfig) -> Self {
        Self {
            navigation: Arc::new(NavigationController::new(Arc::clone(&store), navigation)),
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// State over a freshly seeded store with default settings
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(RecordStore::seeded()),
            ApiConfig::default(),
            NavigationConfig::default(),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
