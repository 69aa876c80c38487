//! Redis-backed token store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::ports::TokenStore;
use crate::error::{StoreError, StoreResult};

/// Token store using plain Redis strings.
///
/// Keys are written with `SET` and no TTL, mirroring the no-expiry semantics of
/// the other backends. Unlike a cache, failures are surfaced: a login whose
/// tokens were not persisted must not count as a success.
pub struct RedisTokenStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisTokenStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `key_prefix` - Namespace prepended to every key (may be empty)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        info!("Connecting to Redis token store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| StoreError::Operation(format!("Redis GET {} failed: {}", full_key, e)))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&full_key, value)
            .await
            .map_err(|e| StoreError::Operation(format!("Redis SET {} failed: {}", full_key, e)))?;

        debug!(key = %full_key, "Token stored in Redis");
        Ok(())
    }
}
