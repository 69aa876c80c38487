//! Domain layer: login data, collaborator contracts and submission lifecycle.
//!
//! Nothing here knows about HTTP, Redis or the terminal.
//!
//! # Architecture
//!
//! - [`entities`] - Credentials and token pair
//! - [`ports`] - Traits for the token service, token store, navigator and notifier
//! - [`request_state`] - Tri-state request lifecycle and overlapping-submit policy

pub mod entities;
pub mod ports;
pub mod request_state;
