//! Cache Shell - an interactive test shell for an in-memory key-value cache
//!
//! Provides a single-node string cache with size accounting and hit/miss
//! statistics, driven by a line-oriented console for ad-hoc resilience and
//! capacity testing.

pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod shell;

pub use cache::{CacheStats, CacheStore};
pub use command::Command;
pub use config::Config;
pub use executor::{CommandExecutor, Outcome};
pub use shell::Shell;
