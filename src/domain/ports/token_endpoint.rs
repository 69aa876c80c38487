//! Remote token-issuing service.

use crate::domain::entities::{Credentials, TokenPair};
use crate::error::LoginError;
use async_trait::async_trait;

/// Exchanges credentials for a [`TokenPair`].
///
/// One call issues exactly one request. Implementations must not retry and
/// must map every non-success outcome to a [`LoginError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Requests a token pair for `credentials`.
    ///
    /// Takes ownership so the credentials can be dropped as soon as the
    /// request body is built.
    ///
    /// # Errors
    ///
    /// - [`LoginError::Transport`] if no response arrived
    /// - [`LoginError::Rejected`] on a non-2xx status
    /// - [`LoginError::MalformedResponse`] if the body is not a token pair
    async fn obtain_pair(&self, credentials: Credentials) -> Result<TokenPair, LoginError>;
}
