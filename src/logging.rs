//! Diagnostic logging
//!
//! Every diagnostic goes to stderr through a `tracing` fmt layer, so index
//! records written to stdout (`--output -`) stay clean.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the log level from the verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the level chosen on the command line.
pub fn init_logging(level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
