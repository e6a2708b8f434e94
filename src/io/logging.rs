//! Tracing subscriber setup for the command-line tool
//!
//! The library only emits events. Installing a subscriber is left to the
//! binary, which writes human-readable lines to stderr so stdout stays clean.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maximum level for the given verbosity flags; `quiet` wins over `verbose`
pub const fn log_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global stderr subscriber
///
/// Returns false when a global subscriber was already installed, in which case
/// the existing one keeps receiving events.
pub fn init_logging(level: Level, ansi: bool) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
