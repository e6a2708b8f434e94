//! Trait generation stages driven by one seeded random stream

/// Background tiles, accent stars and aura rings
pub mod background;
/// Arms, body accessories and feet
pub mod body;
/// Indexed trait catalogs
pub mod catalog;
/// Rarity overlays and bling chains
pub mod effects;
/// Facial features
pub mod face;
/// Ears, fur patches and head accessories
pub mod head;
/// Stage orchestration and the generation result
pub mod portrait;

pub use portrait::{BodyLayout, Face, HeadLayout, Portrait, generate_portrait};
