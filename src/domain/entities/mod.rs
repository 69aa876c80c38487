//! Data carried through a login attempt.
//!
//! - [`Credentials`] - What the user typed into the form
//! - [`TokenPair`] - What the token service hands back on success
//!
//! Neither is retained after the attempt finishes. The token endpoint takes the
//! credentials by value and drops them once the request body is built; tokens
//! live on only in the token store.

pub mod credentials;
pub mod token_pair;

pub use credentials::Credentials;
pub use token_pair::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenPair, mask_token};
