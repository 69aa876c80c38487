//! In-process token store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::TokenStore;
use crate::error::StoreResult;

/// A token store backed by a `HashMap`.
///
/// Contents are lost when the process exits.
///
/// # Use Cases
///
/// - Integration tests asserting on stored values
/// - `TOKEN_STORE=memory` for dry runs that must not touch disk or Redis
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored entry.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
