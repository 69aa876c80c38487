//! View transitions.

/// Moves the application to another view.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigates to `route` (e.g. `/dashboard`) with no parameters.
    fn navigate(&self, route: &str);
}
