//! Collaborator traits injected into the login controller.
//!
//! Each external dependency of the login flow is a trait so it can be swapped:
//! real adapters live in [`crate::infrastructure`], and mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Ports
//!
//! - [`TokenEndpoint`] - Credentials → token pair over the network
//! - [`TokenStore`] - Persistent key-value storage for tokens
//! - [`Navigator`] - View transitions
//! - [`Notifier`] - Blocking user alerts

pub mod navigator;
pub mod notifier;
pub mod token_endpoint;
pub mod token_store;

pub use navigator::Navigator;
pub use notifier::Notifier;
pub use token_endpoint::TokenEndpoint;
pub use token_store::TokenStore;

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use notifier::MockNotifier;
#[cfg(test)]
pub use token_endpoint::MockTokenEndpoint;
#[cfg(test)]
pub use token_store::MockTokenStore;
