//! Diagnostic logging setup.
//!
//! Standard output carries data, so every log line goes to standard error.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "TM_TOOLS_LOG";

/// Level used when `TM_TOOLS_LOG` is not set
pub fn default_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level(verbose, quiet).into()));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .with_ansi(std::env::var_os("NO_COLOR").is_none());

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
