//! Blocking user notifications.

/// Shows a blocking alert to the user.
///
/// The login flow only uses it for the failure message, which carries no
/// detail about the cause.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
