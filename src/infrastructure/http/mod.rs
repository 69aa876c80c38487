//! HTTP adapters.

mod token_client;

pub use token_client::HttpTokenEndpoint;
