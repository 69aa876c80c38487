//! Token store backends.
//!
//! Provides three [`crate::domain::ports::TokenStore`] implementations:
//! - [`FileTokenStore`] - JSON file on disk (default)
//! - [`RedisTokenStore`] - Shared Redis instance
//! - [`MemoryTokenStore`] - Process-local map for tests and dry runs

mod file_store;
mod memory_store;
mod redis_store;

pub use file_store::{DEFAULT_TOKEN_FILE, FileTokenStore};
pub use memory_store::MemoryTokenStore;
pub use redis_store::RedisTokenStore;
