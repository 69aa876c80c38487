//! Infrastructure layer: concrete adapters for the domain ports.
//!
//! # Modules
//!
//! - [`http`] - Token service client over HTTP
//! - [`storage`] - Token store backends (file, Redis, memory)
//! - [`terminal`] - Navigator and notifier for the CLI

pub mod http;
pub mod storage;
pub mod terminal;
