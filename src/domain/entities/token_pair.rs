//! Access/refresh token pair issued by the token service.

use serde::Deserialize;
use std::fmt;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Bearer tokens returned on a successful login.
///
/// Deserialized from `{"access": .., "refresh": ..}`; any other fields in the
/// response are ignored. Both values are opaque to this crate.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// Store entries in write order: access first, then refresh.
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            (ACCESS_TOKEN_KEY, self.access.as_str()),
            (REFRESH_TOKEN_KEY, self.refresh.as_str()),
        ]
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &mask_token(&self.access))
            .field("refresh", &mask_token(&self.refresh))
            .finish()
    }
}

/// Keeps the first few characters of a token for display and hides the rest.
///
/// `eyJhbGciOiJIUzI1NiJ9.payload.sig` → `eyJhbG…`
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 6;

    if token.chars().count() <= VISIBLE {
        return "***".to_string();
    }

    let prefix: String = token.chars().take(VISIBLE).collect();
    format!("{prefix}…")
}
