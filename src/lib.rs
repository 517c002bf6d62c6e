//! Catalog API - A read-only catalog server
//!
//! Serves a filterable, paginated catalog from a JSON dataset that is
//! reloaded lazily once it is older than a configurable TTL.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use catalog::DatasetCache;
pub use config::Config;
