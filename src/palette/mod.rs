//! Colours, rarity tiers and the per-rarity palette table

/// Non-empty choice lists
pub mod choices;
/// RGBA colour value type
pub mod color;
/// Fixed feature and accessory colours
pub mod named;
/// Rarity tiers
pub mod rarity;
/// Rarity to palette lookup
pub mod table;

pub use choices::Choices;
pub use color::Color;
pub use rarity::Rarity;
pub use table::{Palette, palette};
