//! Static rarity to palette table

use crate::choices;
use crate::palette::{Choices, Color, Rarity};

/// Colour candidates for one rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Fur colours for body, head, ears and fur patches
    pub body: Choices<Color>,
    /// Background tile colours
    pub background: Choices<Color>,
    /// Accent colours for stars, earrings and trims
    pub accent: Choices<Color>,
}

const COMMON: Palette = Palette {
    body: choices![
        Color::hex(0x8B6F47),
        Color::hex(0x6B5637),
        Color::hex(0xA0825C),
        Color::hex(0x7D6444),
        Color::hex(0x9B8060),
    ],
    background: choices![
        Color::hex(0x2A2A3E),
        Color::hex(0x16213E),
        Color::hex(0x1A1A2E),
    ],
    accent: choices![
        Color::hex(0x4A4A4A),
        Color::hex(0x5A5A5A),
        Color::hex(0x3A3A3A),
    ],
};

const RARE: Palette = Palette {
    body: choices![
        Color::hex(0x7B8FA6),
        Color::hex(0x5C7A99),
        Color::hex(0x9CADC7),
        Color::hex(0x6B89A8),
        Color::hex(0x8AA2BE),
    ],
    background: choices![
        Color::hex(0x1E3A5F),
        Color::hex(0x2C5282),
        Color::hex(0x1A365D),
    ],
    accent: choices![
        Color::hex(0x4A90E2),
        Color::hex(0x5BA0F2),
        Color::hex(0x3A80D2),
    ],
};

const EPIC: Palette = Palette {
    body: choices![
        Color::hex(0x8B5A8E),
        Color::hex(0x6B466E),
        Color::hex(0xA570A9),
        Color::hex(0x7B5A7E),
        Color::hex(0x9B60A0),
    ],
    background: choices![
        Color::hex(0x2E1A3E),
        Color::hex(0x4A2C5E),
        Color::hex(0x3D2352),
    ],
    accent: choices![
        Color::hex(0xB565D9),
        Color::hex(0xC575E9),
        Color::hex(0xA555C9),
    ],
};

const LEGENDARY: Palette = Palette {
    body: choices![
        Color::hex(0xD4A574),
        Color::hex(0xB8935F),
        Color::hex(0xE6C08A),
        Color::hex(0xC89864),
        Color::hex(0xF0D09A),
    ],
    background: choices![
        Color::hex(0x3E2A1A),
        Color::hex(0x5E4A2C),
        Color::hex(0x4D3319),
    ],
    accent: choices![
        Color::hex(0xFFD700),
        Color::hex(0xFFC700),
        Color::hex(0xFFE700),
    ],
};

const MYTHIC: Palette = Palette {
    body: choices![
        Color::hex(0x5DADE2),
        Color::hex(0x48C9D0),
        Color::hex(0x7FD3E8),
        Color::hex(0x6DC0E5),
        Color::hex(0x8FE0F0),
    ],
    background: choices![
        Color::hex(0x0A1929),
        Color::hex(0x0E2341),
        Color::hex(0x132F4C),
    ],
    accent: choices![
        Color::hex(0x00FFFF),
        Color::hex(0x00EFEF),
        Color::hex(0x10FFFF),
        Color::hex(0xFF00FF),
        Color::hex(0xFFFF00),
    ],
};

/// Palette for a rarity tier
pub const fn palette(rarity: Rarity) -> &'static Palette {
    match rarity {
        Rarity::Common => &COMMON,
        Rarity::Rare => &RARE,
        Rarity::Epic => &EPIC,
        Rarity::Legendary => &LEGENDARY,
        Rarity::Mythic => &MYTHIC,
    }
}
