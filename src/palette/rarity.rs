//! Rarity tiers ordered by visual embellishment

use crate::io::error::PortraitError;
use std::fmt;
use std::str::FromStr;

/// Rarity tier of a portrait, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Rarity {
    /// Plain background, no accessories above the neck, no effects
    Common,
    /// Snowfall effect and most accessories
    Rare,
    /// Accent stars, magic particles, crowns
    Epic,
    /// Gold aura, sparkles and gold dust
    Legendary,
    /// Neon aura, glitch, rainbow trail and bling
    Mythic,
}

impl Rarity {
    /// All tiers from weakest to strongest
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythic,
    ];

    /// Lowercase tag used on the command line and in file names
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythic => "mythic",
        }
    }

    /// Position in the tier order, common first
    pub const fn rank(self) -> u8 {
        match self {
            Self::Common => 0,
            Self::Rare => 1,
            Self::Epic => 2,
            Self::Legendary => 3,
            Self::Mythic => 4,
        }
    }

    /// Whether this tier is at least as strong as `other`
    pub const fn is_at_least(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }

    /// Legendary and mythic portraits carry an aura
    pub const fn has_aura(self) -> bool {
        matches!(self, Self::Legendary | Self::Mythic)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Rarity {
    type Err = PortraitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.tag() == tag)
            .ok_or_else(|| PortraitError::InvalidRarity {
                tag: tag.to_string(),
            })
    }
}
