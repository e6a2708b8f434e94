//! Seeded pixel-art bear portrait generator
//!
//! A single seed and rarity tier fully determine a 100x100 logical-grid
//! portrait: background tiles, aura, body, head, face, accessories and rarity
//! effects, drawn in a fixed order from one sine-based random stream and
//! magnified onto a 900x900 surface.

#![forbid(unsafe_code)]

/// Trait generation stages and the portrait orchestrator
pub mod algorithm;
/// Configuration, errors, logging, export and the command-line surface
pub mod io;
/// Random stream and float loop helpers
pub mod math;
/// Colours, rarities and palettes
pub mod palette;
/// Drawing surfaces and shape primitives
pub mod raster;

pub use algorithm::{Portrait, generate_portrait};
pub use io::error::{PortraitError, Result};
pub use palette::Rarity;
