//! Trait variants chosen by indexed random draws
//!
//! Each catalog is an enum whose declaration order is the draw index: a draw
//! of `floor(next * len)` selects `ALL[index]`. Reordering variants changes
//! which trait a stored seed produces.

use crate::math::SeededRandom;

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(#[$first_meta:meta])* $first:ident
            $(, $(#[$rest_meta:meta])* $rest:ident)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(#[$first_meta])* $first,
            $($(#[$rest_meta])* $rest,)*
        }

        impl $name {
            /// Every variant in draw-index order
            pub const ALL: &'static [Self] = &[Self::$first $(, Self::$rest)*];

            /// Variant for a drawn index, clamped to the last variant
            pub fn from_index(index: usize) -> Self {
                Self::ALL
                    .get(index)
                    .or_else(|| Self::ALL.last())
                    .copied()
                    .unwrap_or(Self::$first)
            }

            /// Consume one draw and select a variant uniformly
            pub fn draw(random: &mut SeededRandom) -> Self {
                Self::from_index(random.below(Self::ALL.len()))
            }
        }
    };
}

catalog! {
    /// Arm treatment at the body sides
    pub enum ArmStyle {
        /// No arms drawn
        None,
        /// Small paw circles
        Paws,
        /// Short two-cell-wide nubs
        Nubs,
    }
}

catalog! {
    /// Accessory drawn on the body
    pub enum BodyAccessory {
        /// Dotted chain necklace, gold on legendary and silver otherwise
        Chain,
        /// Striped shirt print in an accent colour
        ShirtDesign,
        /// Bow tie under the chin
        BowTie,
        /// Ink heart on the belly, epic and stronger only
        Tattoo,
        /// Red suspender straps with gold buttons
        Suspenders,
        /// Round accent-coloured badge
        Badge,
    }
}

catalog! {
    /// Foot treatment
    pub enum FeetStyle {
        /// No feet drawn
        None,
        /// Fur-coloured feet, with toe beans on legendary and mythic
        Bare,
        /// Shoes with white lace dots
        Shoes,
        /// Striped socks
        Socks,
    }
}

catalog! {
    /// Inner ear treatment
    pub enum EarStyle {
        /// Tan inner ears
        Tan,
        /// Pink inner ears
        Pink,
        /// Dark brown inner ears
        Dark,
        /// Tan inner ears with accent earrings
        Pierced,
    }
}

catalog! {
    /// Eyebrow shape
    pub enum EyebrowStyle {
        /// Rising towards the middle
        Worried,
        /// Falling towards the middle
        Angry,
        /// Two-row straight brows
        Thick,
        /// One brow across both eyes
        Unibrow,
        /// No eyebrows
        None,
    }
}

catalog! {
    /// Eye pattern
    pub enum EyeStyle {
        /// Half-lidded eyes with bags
        Droopy,
        /// Closed eyes with bags
        Tired,
        /// Crossed-out eyes
        Dead,
        /// Wide round eyes
        Worried,
        /// Hypnotic spirals
        Spiral,
        /// Pink hearts
        Heart,
        /// Green dollar signs
        Dollar,
        /// Left eye shut, right eye open
        Winking,
    }
}

catalog! {
    /// Optional eyewear
    pub enum EyeAccessory {
        /// Dark shades with a bridge
        Sunglasses,
        /// Gold ring over the right eye
        Monocle,
        /// Patch over the left eye with a strap
        Eyepatch,
        /// Thin rectangular frames
        ReadingGlasses,
    }
}

catalog! {
    /// Nose shape
    pub enum NoseStyle {
        /// Downward triangle
        Triangle,
        /// Round button with a highlight
        Round,
        /// Small pink cat nose
        Cat,
        /// Broad rounded nose
        Wide,
    }
}

catalog! {
    /// Mouth shape
    pub enum MouthStyle {
        /// Curving down at the corners
        Frown,
        /// Straight line
        Neutral,
        /// Corners raised into a smile
        IronicSmile,
        /// One corner raised
        Smirk,
        /// Open round mouth
        Shocked,
        /// Teeth showing
        Grin,
        /// Tongue sticking out
        Tongue,
    }
}

catalog! {
    /// Secondary facial mark
    pub enum FacialExtra {
        /// Diagonal scar across the left eye
        Scar,
        /// Cross-shaped bandage on the right cheek
        Bandage,
        /// Pink cheeks
        Blush,
        /// Freckle clusters on both cheeks
        Freckles,
        /// Tear streams under both eyes
        Tears,
        /// Teardrop tattoo, rare and stronger only
        Tattoo,
        /// Single mole near the mouth
        Mole,
        /// Chin stubble
        Stubble,
    }
}

catalog! {
    /// Head accessory
    pub enum HeadAccessory {
        /// Five-peak crown, epic and stronger
        Crown,
        /// Floating ring, legendary and mythic
        Halo,
        /// Forehead eye, epic and mythic
        ThirdEye,
        /// Alien antennae, mythic only
        Antennae,
        /// Ring of flowers, rare and epic
        FlowerCrown,
        /// Pair of ivory horns
        Horns,
        /// Band with ear cups
        Headphones,
        /// Dotted forehead band
        Bandana,
        /// Wool hat with a pom
        Beanie,
        /// Baseball cap with a side brim
        Cap,
        /// Cigarette with smoke puffs
        Smoke,
        /// Spiked crest
        Mohawk,
    }
}

catalog! {
    /// Mythic bling chain
    pub enum BlingChain {
        /// Thick gold links with a medallion
        Cuban,
        /// Row of alternating diamonds
        Tennis,
        /// Twisted two-tone rope
        Rope,
        /// Three nested chains
        MultiLayer,
        /// Thin chain with a cross pendant
        Cross,
    }
}
