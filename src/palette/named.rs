//! Fixed colours used by features and accessories
//!
//! These are the only colours besides the rarity palettes and the rarity
//! effect overlays that may appear in a portrait.

use crate::palette::Color;

/// Surface clear colour behind the background tiles
pub const CLEAR: Color = Color::hex(0x1A1A2E);

/// Pure black outlines, pupils and mouths
pub const BLACK: Color = Color::hex(0x000000);
/// Pure white highlights
pub const WHITE: Color = Color::hex(0xFFFFFF);
/// Jewels and red shoes
pub const RED: Color = Color::hex(0xFF0000);
/// Blue shoes
pub const BLUE: Color = Color::hex(0x0000FF);
/// Pink socks
pub const HOT_PINK: Color = Color::hex(0xFF69B4);
/// Heart eyes
pub const DEEP_PINK: Color = Color::hex(0xFF1493);
/// Dollar eyes
pub const LIME: Color = Color::hex(0x00FF00);
/// Diamonds and mythic trim
pub const CYAN: Color = Color::hex(0x00FFFF);
/// Diamond shimmer
pub const LIGHT_CYAN: Color = Color::hex(0xE0FFFF);
/// Diamond stud highlight
pub const SKY_BLUE: Color = Color::hex(0x87CEEB);
/// Gold chains and crowns
pub const GOLD: Color = Color::hex(0xFFD700);
/// Silver chains
pub const SILVER: Color = Color::hex(0xC0C0C0);
/// Epic crown
pub const LAVENDER: Color = Color::hex(0xC77DFF);
/// Tan inner ears
pub const TAN: Color = Color::hex(0xD2B48C);
/// Pink inner ears and cat noses
pub const LIGHT_PINK: Color = Color::hex(0xFFB6C1);
/// Dark inner ears
pub const DARK_BROWN: Color = Color::hex(0x4B2F20);
/// Eye bags and toe beans
pub const BEAN_BROWN: Color = Color::hex(0x4A3C28);
/// Default snout
pub const SNOUT_BROWN: Color = Color::hex(0x6B5637);
/// Suspender straps
pub const DARK_RED: Color = Color::hex(0x8B0000);
/// Tattoo ink
pub const INK: Color = Color::hex(0x1C1C3C);
/// Healed scars
pub const SCAR: Color = Color::hex(0xA0522D);
/// Bandage cloth
pub const BANDAGE: Color = Color::hex(0xF5DEB3);
/// Blushing cheeks
pub const BLUSH: Color = Color::hex(0xFF9AA2);
/// Freckles and moles
pub const FRECKLE: Color = Color::hex(0x8B4513);
/// Tear drops
pub const TEAR: Color = Color::hex(0x4FC3F7);
/// Stubble dots
pub const STUBBLE: Color = Color::hex(0x5C4A3A);
/// Horns
pub const IVORY: Color = Color::hex(0xF5F5DC);
/// Headphones and monocle chain
pub const CHARCOAL: Color = Color::hex(0x333333);
/// Cigarette ash and smoke puffs
pub const SMOKE: Color = Color::hex(0xBEBEBE);
/// Cigarette ember
pub const EMBER: Color = Color::hex(0xFF4500);
/// Flower crown leaves
pub const LEAF: Color = Color::hex(0x32CD32);
/// Flower crown petals
pub const PETAL: Color = Color::hex(0xFFFF00);
/// Bright purple for third eyes and antenna tips
pub const VIOLET: Color = Color::hex(0x9400D3);
/// Bandana and cap fabric
pub const CRIMSON: Color = Color::hex(0xDC143C);
/// Beanie wool
pub const TEAL: Color = Color::hex(0x008080);
/// Darker strand of rope chains
pub const GOLDENROD: Color = Color::hex(0xDAA520);

/// Every named auxiliary colour
pub const AUXILIARY: &[Color] = &[
    BLACK, WHITE, RED, BLUE, HOT_PINK, DEEP_PINK, LIME, CYAN, LIGHT_CYAN, SKY_BLUE, GOLD, SILVER,
    LAVENDER, TAN, LIGHT_PINK, DARK_BROWN, BEAN_BROWN, SNOUT_BROWN, DARK_RED, INK, SCAR, BANDAGE,
    BLUSH, FRECKLE, TEAR, STUBBLE, IVORY, CHARCOAL, SMOKE, EMBER, LEAF, PETAL, VIOLET, CRIMSON,
    TEAL, GOLDENROD,
];
