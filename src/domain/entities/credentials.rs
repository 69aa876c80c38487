//! Credentials captured from the login form.

use serde::Serialize;
use std::fmt;

/// Username and password sent to the token service.
///
/// Built from the form fields at submit time and serialized as the JSON request
/// body `{"username": .., "password": ..}`. No validation is applied: empty
/// strings are sent as-is and the server decides. Ownership moves into the
/// token endpoint, which drops the value after serializing the body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
