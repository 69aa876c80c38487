//! Wiring of concrete adapters into a ready-to-use [`LoginService`].
//!
//! Mirrors the startup sequence of the CLI: build the token store selected by
//! configuration, the HTTP token endpoint, then the controller.

use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::LoginService;
use crate::config::{Config, StoreBackend};
use crate::domain::ports::{Navigator, Notifier, TokenEndpoint, TokenStore};
use crate::infrastructure::http::HttpTokenEndpoint;
use crate::infrastructure::storage::{FileTokenStore, MemoryTokenStore, RedisTokenStore};

/// Builds the token store selected by `config.token_store`.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and the connection or
/// PING fails. Unlike a cache, the store is not optional, so there is no
/// fallback backend.
pub async fn build_token_store(config: &Config) -> Result<Arc<dyn TokenStore>> {
    let store: Arc<dyn TokenStore> = match config.token_store {
        StoreBackend::File => {
            tracing::info!("Token store: file ({})", config.token_store_path);
            Arc::new(FileTokenStore::new(&config.token_store_path))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("TOKEN_STORE=redis requires REDIS_URL or REDIS_HOST")?;
            let store = RedisTokenStore::connect(redis_url, config.token_key_prefix.clone())
                .await
                .context("Failed to open Redis token store")?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("Token store: memory, tokens will not outlive this process");
            Arc::new(MemoryTokenStore::new())
        }
    };

    Ok(store)
}

/// Builds the HTTP token endpoint from `config`.
///
/// # Errors
///
/// Returns an error if the token URL is invalid or the HTTP client cannot be built.
pub fn build_token_endpoint(config: &Config) -> Result<Arc<dyn TokenEndpoint>> {
    let url = config.token_url()?;
    let endpoint = HttpTokenEndpoint::new(url, config.request_timeout())
        .context("Failed to build HTTP client")?;
    Ok(Arc::new(endpoint))
}

/// Builds a [`LoginService`] from `config` with the given front-end adapters.
///
/// # Errors
///
/// Propagates errors from [`build_token_endpoint`].
pub fn build_login_service(
    config: &Config,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
) -> Result<LoginService> {
    let endpoint = build_token_endpoint(config)?;

    Ok(LoginService::new(
        endpoint,
        store,
        navigator,
        notifier,
        config.login_settings(),
    ))
}

/// Drives `work` to completion unless `interrupt` fires first.
///
/// Returns `None` when interrupted. If `interrupt` resolves with an error (the
/// signal handler could not be installed) the error is logged and `work` is
/// awaited without interruption.
pub async fn until_interrupted<F, I>(work: F, interrupt: I) -> Option<F::Output>
where
    F: Future,
    I: Future<Output = io::Result<()>>,
{
    tokio::pin!(work);

    tokio::select! {
        output = &mut work => Some(output),
        signal = interrupt => match signal {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Interrupt handler unavailable, waiting for completion");
                Some(work.await)
            }
        },
    }
}
