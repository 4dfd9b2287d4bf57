//! Stderr logging for the `sealnote` binary.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global `tracing` subscriber.
///
/// `SEALNOTE_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the default is `warn`, so normal runs print only the command's output.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
