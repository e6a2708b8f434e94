//! Numeric utilities shared by the drawing stages

/// Sine-based deterministic random stream
pub mod random;
/// Float loop ranges with accumulated steps
pub mod stepping;

pub use random::SeededRandom;
