//! Terminal adapters for the CLI front end.
//!
//! - [`TerminalNavigator`] - Announces the view the user lands on
//! - [`TerminalNotifier`] - Prints the failure alert, optionally waiting for acknowledgement

use std::sync::{Mutex, PoisonError};

use colored::Colorize;
use dialoguer::Input;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::debug;

use crate::domain::ports::{Navigator, Notifier};

/// Prints the target route and remembers it as the current view.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    current: Mutex<Option<String>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route of the last navigation, if any.
    pub fn current_route(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        println!("{} {}", "→".bright_cyan().bold(), route.bright_white().bold());
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route.to_string());
    }
}

/// Writes alerts to stderr in red.
///
/// When `acknowledge` is set the alert blocks until the user presses Enter,
/// which is the terminal equivalent of a modal dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    acknowledge: bool,
}

impl TerminalNotifier {
    pub fn new(acknowledge: bool) -> Self {
        Self { acknowledge }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "✖".red().bold(), message.red().bold());

        if self.acknowledge {
            let answer = run_blocking(|| {
                Input::<String>::new()
                    .with_prompt("Press Enter to continue")
                    .allow_empty(true)
                    .report(false)
                    .interact_text()
            });

            if let Err(e) = answer {
                debug!(error = %e, "Alert acknowledgement prompt failed");
            }
        }
    }
}

/// Runs a blocking call, moving other tasks off the current worker first when
/// called from a multi-threaded runtime.
fn run_blocking<R>(f: impl FnOnce() -> R) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}
