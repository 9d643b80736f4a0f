//! Logging setup
//!
//! Logs go to stderr so `--dump` output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber
///
/// `-v` flags win over `RUST_LOG`; without them `RUST_LOG` applies, then
/// `warn`.
pub fn init_logging(verbosity: u8) {
    let filter = if verbosity > 0 {
        EnvFilter::new(level_for(verbosity))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
