//! `reqwest`-backed client for the token-obtain endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::entities::{Credentials, TokenPair};
use crate::domain::ports::TokenEndpoint;
use crate::error::LoginError;

/// Posts credentials as JSON to a token-obtain URL and decodes the token pair.
///
/// Exactly one request per call, no retries. Without an explicit timeout the
/// request waits as long as the connection stays open.
pub struct HttpTokenEndpoint {
    client: Client,
    url: Url,
}

impl HttpTokenEndpoint {
    /// Creates a client for the given token URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl TokenEndpoint for HttpTokenEndpoint {
    async fn obtain_pair(&self, credentials: Credentials) -> Result<TokenPair, LoginError> {
        debug!(url = %self.url, "Requesting token pair");

        let request = self.client.post(self.url.clone()).json(&credentials);
        drop(credentials);

        let response = request.send().await?;

        let status = response.status();
        debug!(%status, "Token service responded");

        if !status.is_success() {
            return Err(LoginError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<TokenPair>().await?)
    }
}
