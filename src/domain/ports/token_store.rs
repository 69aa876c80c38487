//! Key-value storage for issued tokens.

use crate::error::StoreResult;
use async_trait::async_trait;

/// Durable string key-value store shared by the whole process.
///
/// The login flow only ever writes the `access_token` and `refresh_token` keys,
/// overwriting previous values. Nothing is merged and no expiry is recorded.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileTokenStore`] - JSON file on disk
/// - [`crate::infrastructure::storage::RedisTokenStore`] - Redis `GET`/`SET`
/// - [`crate::infrastructure::storage::MemoryTokenStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key is present
    /// - `Ok(None)` if it was never written
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError`] if the backend cannot be read.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError`] if the write did not persist.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
