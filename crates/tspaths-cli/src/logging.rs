//! Logging initialization for the CLI.
//!
//! Logging is owned by the CLI crate to keep library crates lightweight.
//! Library crates only emit `tracing` events; this installs the subscriber.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates whose events follow the verbosity flag.
const TARGETS: &[&str] = &["tspaths_cli", "tspaths_core"];

/// Initialize the tracing subscriber based on configuration.
///
/// # Arguments
/// * `verbosity` - 0 = INFO, 1 = DEBUG, 2+ = TRACE
/// * `json` - If true, output JSON lines to stderr
///
/// Logs always go to stderr so `--json` results on stdout stay parseable.
///
/// # Panics
/// Panics if the subscriber cannot be initialized (e.g., called twice).
pub fn init(verbosity: u8, json: bool) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Support RUST_LOG env var, with verbosity flag as override
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    for target in TARGETS {
        filter = filter.add_directive(format!("{target}={level}").parse().unwrap());
    }

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
