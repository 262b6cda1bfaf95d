//! Logging setup.
//!
//! Log events from zippath-core go to stderr through a `tracing-subscriber`
//! fmt layer so stdout stays clean for `--json`. `RUST_LOG` overrides the
//! level picked from the flags.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::util::TryInitError;

/// Default filter directive for the given verbosity flags.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Installs the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(verbose: bool, quiet: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(console::colors_enabled_stderr())
                .with_writer(std::io::stderr),
        )
        .try_init()
}
