//! Application layer orchestrating the login flow.
//!
//! Services consume the domain ports and never touch a concrete adapter, so the
//! same controller runs against the real token service and against mocks.
//!
//! # Available Services
//!
//! - [`services::login_form::LoginForm`] - Form state bound to user input
//! - [`services::login_service::LoginService`] - Submit handling and outcome reactions

pub mod services;
