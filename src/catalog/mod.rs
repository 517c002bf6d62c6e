//! Catalog Module
//!
//! Loads the dataset, keeps it cached with a TTL, and answers queries over it.

pub mod accessors;
mod cache;
pub mod loader;
pub mod query;
mod record;
mod source;
mod stats;


// Re-export public types
pub use cache::{DatasetCache, Snapshot, DEFAULT_TTL};
pub use query::{query, QueryResult, QuerySpec, DEFAULT_PAGE_SIZE};
pub use record::{Dataset, Meta, Record, Taxonomy};
pub use source::{FileSource, MemorySource, SourceReader};
pub use stats::CacheStats;
pub(crate) use stats::StatsCounter;
