//! # Medboard
//!
//! Hospital administration dashboard - an in-memory record store for
//! patients, doctors, appointments, bills, and reports, rendered into
//! navigable dashboard sections and served over HTTP.
//!
//! ## Modules
//!
//! - [`store`]: In-memory record collections and the stats snapshot
//! - [`render`]: Section renderers producing display trees and HTML
//! - [`navigation`]: Current view and cancellable scheduled renders
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use medboard::render::render_section;
//! use medboard::store::RecordStore;
//!
//! let store = RecordStore::seeded();
//!
//! let stats = store.get_stats();
//! assert_eq!(stats.total_patients, 156);
//!
//! let patients = render_section(&store, "patients", None);
//! assert_eq!(patients.find_by_class("table-row").len(), 5);
//! println!("{}", patients.to_html());
//! ```

pub mod api;
pub mod config;
pub mod navigation;
pub mod render;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    CollectionName, FieldMap, Record, RecordId, RecordStore, StatsSnapshot, StoreError,
    StoreResult,
};

pub use render::{render_section, Node, ReportTab, Section};

pub use navigation::{NavigationConfig, NavigationController, View};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, NavigationSettings};
