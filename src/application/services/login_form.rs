//! Mutable form state bound to user input.

use crate::domain::entities::Credentials;

/// The two text fields of the login form.
///
/// Input handlers mutate the fields; submitting only reads them through
/// [`LoginForm::credentials`], so the form keeps its contents after a submit.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Snapshots the current field values for a submission.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}
