//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with the prompts and results the
/// CLI prints on stdout. `log_format` is `"json"` for one JSON object per event,
/// anything else for human-readable text.
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("error"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
