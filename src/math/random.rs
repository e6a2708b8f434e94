//! Sine-based seeded random stream
//!
//! Each step computes `state = sin(state) * 10000` and yields the fractional
//! part. The generator is weak (short cycles exist for some seeds) but stored
//! seeds map to portraits through it, so it must not be replaced.

use crate::io::error::{Result, ensure_finite_seed};
use crate::palette::Choices;

/// Deterministic stream of floats conventionally in `[0, 1)`
///
/// When the scaled state sits a hair below an integer the subtraction can
/// round up to exactly `1.0`. [`Self::below`] clamps for that case; raw
/// [`Self::next_f64`] values are returned untouched.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: f64,
    draws: usize,
}

impl SeededRandom {
    /// Start a stream from a finite seed
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is NaN or infinite
    pub fn new(seed: f64) -> Result<Self> {
        Ok(Self {
            state: ensure_finite_seed(seed)?,
            draws: 0,
        })
    }

    /// Advance the stream and return the next value
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.sin() * 10000.0;
        self.draws += 1;
        self.state - self.state.floor()
    }

    /// Uniform index in `0..len`, computed as `floor(next * len)` and clamped
    pub fn below(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64).floor();
        if index <= 0.0 {
            0
        } else {
            (index as usize).min(len.saturating_sub(1))
        }
    }

    /// Draw once and report whether the value exceeds `threshold`
    pub fn above(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }

    /// Draw once and report whether the value is below `threshold`
    pub fn under(&mut self, threshold: f64) -> bool {
        self.next_f64() < threshold
    }

    /// Pick one entry of a non-empty list with a single draw
    pub fn pick<T: Copy>(&mut self, choices: &Choices<T>) -> T {
        choices.get(self.below(choices.len()))
    }

    /// Number of values produced so far
    pub const fn draws(&self) -> usize {
        self.draws
    }
}
