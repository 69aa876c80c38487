//! Services driving the login flow.

pub mod login_form;
pub mod login_service;

pub use login_form::LoginForm;
pub use login_service::{
    DEFAULT_DASHBOARD_ROUTE, DEFAULT_FAILURE_MESSAGE, LoginService, LoginSettings, SubmitOutcome,
};
