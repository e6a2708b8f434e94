//! Configuration, errors, logging, export and the command-line surface

/// Command-line interface and card batch processing
pub mod cli;
/// Geometry constants, thresholds and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
