//! Cache Module
//!
//! Provides the in-memory key-value store underlying all shell commands.

mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::CacheStore;
