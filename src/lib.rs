//! # Dashboard Login
//!
//! Login client for a JWT token service: submits a username and password,
//! stores the returned access/refresh pair and opens the dashboard, or shows a
//! single failure alert.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Credentials, token pair, collaborator traits, request lifecycle
//! - **Application Layer** ([`application`]) - Login form state and the login controller
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, token stores, terminal adapters
//!
//! ## Login Flow
//!
//! 1. The form fields are snapshotted into [`domain::entities::Credentials`]
//! 2. One `POST {base}/api/token/` is sent with the credentials as JSON
//! 3. On a 2xx token pair, `access_token` then `refresh_token` are written to the store
//! 4. The navigator is sent to `/dashboard`
//! 5. Any failure (network, status, body, store) shows the same alert instead
//!
//! ## Quick Start
//!
//! ```bash
//! export LOGIN_API_BASE_URL="http://localhost:8000"
//!
//! cargo run -- login
//! cargo run -- status
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::{LoginError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginForm, LoginService, LoginSettings, SubmitOutcome};
    pub use crate::domain::entities::{
        ACCESS_TOKEN_KEY, Credentials, REFRESH_TOKEN_KEY, TokenPair,
    };
    pub use crate::domain::ports::{Navigator, Notifier, TokenEndpoint, TokenStore};
    pub use crate::domain::request_state::{RequestState, SubmitPolicy};
    pub use crate::error::{LoginError, StoreError};
}
