//! Rarity overlays and mythic bling chains
//!
//! Exactly one overlay runs per rarity. Common portraits get none.

use crate::algorithm::catalog::BlingChain;
use crate::algorithm::portrait::{BodyLayout, TraitGenerator};
use crate::choices;
use crate::io::configuration::{BLING_CHAIN_CHANCE, CENTER_X, GRID_SIZE};
use crate::math::stepping::{range_inclusive, units};
use crate::palette::{Choices, Color, Rarity, named};
use crate::raster::{Surface, shapes};

/// Glitch pixel colours
pub const GLITCH_COLORS: Choices<Color> =
    choices![named::LIME, Color::hex(0xFF00FF), named::CYAN];

/// Rainbow trail colours, cycled in order
pub const RAINBOW: [Color; 7] = [
    Color::hexa(0xFF00_0066),
    Color::hexa(0xFF7F_0066),
    Color::hexa(0xFFFF_0066),
    Color::hexa(0x00FF_0066),
    Color::hexa(0x0000_FF66),
    Color::hexa(0x4B00_8266),
    Color::hexa(0x9400_D366),
];

/// Translucent gold dust shades
pub const GOLD_DUST: Choices<Color> = choices![
    named::GOLD.with_alpha(0x99),
    Color::hex(0xFFC700).with_alpha(0x99),
    Color::hex(0xFFE700).with_alpha(0x99),
];

/// Magic particle head
pub const MAGIC_PARTICLE: Color = Color::hex(0xB565D9).with_alpha(0x66);
/// Magic particle trail
pub const MAGIC_TRAIL: Color = MAGIC_PARTICLE.with_alpha(0x33);
/// Faint snow flake arm
pub const SNOW_HAZE: Color = named::WHITE.with_alpha(0x99);

/// Tennis chain stone colours, indexed by link position
pub const TENNIS_STONES: Choices<Color> =
    choices![named::WHITE, named::CYAN, named::LIGHT_CYAN];

const GLITCH_COUNT: usize = 30;
const GLITCH_LINE_THRESHOLD: f64 = 0.7;
const RAINBOW_COUNT: usize = 15;
const SPARKLE_COUNT: usize = 25;
const GOLD_DUST_COUNT: usize = 40;
const MAGIC_PARTICLE_COUNT: usize = 20;
const SNOW_COUNT: usize = 30;
const SNOW_HAZE_THRESHOLD: f64 = 0.7;

impl<S: Surface + ?Sized> TraitGenerator<'_, S> {
    /// Run the overlay for the current rarity; returns the bling chain drawn, if any
    pub(crate) fn draw_rarity_effects(&mut self, body: &BodyLayout) -> Option<BlingChain> {
        match self.rarity {
            Rarity::Mythic => {
                self.glitch();
                self.rainbow_trail();
                if self.random.under(BLING_CHAIN_CHANCE) {
                    let chain = BlingChain::draw(&mut self.random);
                    self.draw_bling_chain(body, chain);
                    return Some(chain);
                }
            }
            Rarity::Legendary => {
                self.sparkles();
                self.gold_dust();
            }
            Rarity::Epic => self.magic_particles(),
            Rarity::Rare => self.snow(),
            Rarity::Common => {}
        }
        None
    }

    fn grid_point(&mut self) -> (f64, f64) {
        let x = self.random.below(GRID_SIZE) as f64;
        let y = self.random.below(GRID_SIZE) as f64;
        (x, y)
    }

    fn glitch(&mut self) {
        let limit = GRID_SIZE as f64;
        for _ in 0..GLITCH_COUNT {
            let (x, y) = self.grid_point();
            let color = self.random.pick(&GLITCH_COLORS);
            self.dot(x, y, color);

            if self.random.above(GLITCH_LINE_THRESHOLD) {
                let length = 5.0 + self.random.below(10) as f64;
                for j in units(0.0, length) {
                    if x + j < limit {
                        self.dot(x + j, y, color);
                    }
                }
            }
        }
    }

    fn rainbow_trail(&mut self) {
        for &color in RAINBOW.iter().cycle().take(RAINBOW_COUNT) {
            let x = 20.0 + self.random.below(60) as f64;
            let y = 70.0 + self.random.below(25) as f64;
            for j in units(0.0, 3.0) {
                self.dot(x + j, y, color);
            }
        }
    }

    fn sparkles(&mut self) {
        for _ in 0..SPARKLE_COUNT {
            let (x, y) = self.grid_point();
            self.dot(x, y, named::GOLD);
            if self.random.above(0.5) {
                self.dot(x + 1.0, y, named::WHITE);
                self.dot(x - 1.0, y, named::WHITE);
                self.dot(x, y + 1.0, named::WHITE);
                self.dot(x, y - 1.0, named::WHITE);
            }
        }
    }

    fn gold_dust(&mut self) {
        for _ in 0..GOLD_DUST_COUNT {
            let (x, y) = self.grid_point();
            let color = self.random.pick(&GOLD_DUST);
            self.dot(x, y, color);
        }
    }

    fn magic_particles(&mut self) {
        let limit = GRID_SIZE as f64;
        for _ in 0..MAGIC_PARTICLE_COUNT {
            let (x, y) = self.grid_point();
            shapes::circle(&mut self.canvas, x, y, 1.0, MAGIC_PARTICLE);

            if self.random.above(0.5) {
                for j in units(1.0, 4.0) {
                    if y + j < limit {
                        self.dot(x, y + j, MAGIC_TRAIL);
                    }
                }
            }
        }
    }

    fn snow(&mut self) {
        for _ in 0..SNOW_COUNT {
            let (x, y) = self.grid_point();
            self.dot(x, y, named::WHITE);
            if self.random.above(SNOW_HAZE_THRESHOLD) {
                self.dot(x + 1.0, y, SNOW_HAZE);
                self.dot(x, y + 1.0, SNOW_HAZE);
            }
        }
    }

    /// Chains hang from the neck line just under the chin; none of them draws randomness
    fn draw_bling_chain(&mut self, body: &BodyLayout, chain: BlingChain) {
        let chain_y = body.y + 5.0 + 8.0;
        match chain {
            BlingChain::Cuban => self.cuban_chain(chain_y, body.width),
            BlingChain::Tennis => self.tennis_chain(chain_y, body.width),
            BlingChain::Rope => self.rope_chain(chain_y, body.width),
            BlingChain::MultiLayer => self.layered_chain(chain_y, body.width),
            BlingChain::Cross => self.cross_chain(chain_y, body.width),
        }
    }

    // Terms round separately; fusing them moves cells on exact boundaries
    #[allow(clippy::suboptimal_flops)]
    fn cuban_chain(&mut self, chain_y: f64, body_width: f64) {
        let spread = (body_width * 0.8).min(60.0);
        for i in range_inclusive(-spread / 2.0, spread / 2.0, 4.0) {
            let x = CENTER_X + i;
            let y = chain_y + (i * 0.2).sin() * 2.0;
            shapes::block(&mut self.canvas, x, y, 3.0, 3.0, named::GOLD);
            if is_multiple(i, 8.0) {
                self.dot(x + 1.0, y + 1.0, named::WHITE);
                self.dot(x + 1.0, y, named::SKY_BLUE);
            }
        }

        for i in range_inclusive(-4.0, 4.0, 1.0) {
            for j in range_inclusive(0.0, 6.0, 1.0) {
                if i.abs() + j <= 6.0 {
                    self.dot(CENTER_X + i, chain_y + 6.0 + j, named::GOLD);
                }
            }
        }
        self.gem(chain_y + 8.0);
    }

    // Terms round separately; fusing them moves cells on exact boundaries
    #[allow(clippy::suboptimal_flops)]
    fn tennis_chain(&mut self, chain_y: f64, body_width: f64) {
        let spread = (body_width * 0.85).min(64.0);
        for i in range_inclusive(-spread / 2.0, spread / 2.0, 2.0) {
            let x = CENTER_X + i;
            let y = chain_y + (i * 0.15).sin() * 1.5;
            let stone = TENNIS_STONES.get((i / 2.0).abs().floor() as usize % TENNIS_STONES.len());
            shapes::block(&mut self.canvas, x, y, 2.0, 2.0, stone);

            if is_multiple(i, 6.0) {
                self.dot(x - 1.0, y, named::WHITE);
                self.dot(x + 2.0, y, named::WHITE);
                self.dot(x, y - 1.0, named::WHITE);
                self.dot(x, y + 2.0, named::WHITE);
            }
        }
    }

    // Terms round separately; fusing them moves cells on exact boundaries
    #[allow(clippy::suboptimal_flops)]
    fn rope_chain(&mut self, chain_y: f64, body_width: f64) {
        let spread = (body_width * 0.75).min(56.0);
        let half = spread / 2.0;
        for (index, i) in range_inclusive(-half, half, 1.0).enumerate() {
            let t = i / half;
            let y = chain_y + (1.0 - t * t) * 3.0;
            let (upper, lower) = if index % 2 == 0 {
                (named::GOLD, named::GOLDENROD)
            } else {
                (named::GOLDENROD, named::GOLD)
            };
            self.dot(CENTER_X + i, y, upper);
            self.dot(CENTER_X + i, y + 1.0, lower);
        }

        let ring_y = chain_y + 8.0;
        for i in range_inclusive(-3.0, 3.0, 1.0) {
            for j in range_inclusive(-3.0, 3.0, 1.0) {
                let distance = i * i + j * j;
                if (4.0..=9.0).contains(&distance) {
                    self.dot(CENTER_X + i, ring_y + j, named::GOLD);
                }
            }
        }
    }

    // Terms round separately; fusing them moves cells on exact boundaries
    #[allow(clippy::suboptimal_flops)]
    fn layered_chain(&mut self, chain_y: f64, body_width: f64) {
        let strands = [named::GOLD, named::SILVER, named::GOLD];
        for (layer, &color) in strands.iter().enumerate() {
            let layer = layer as f64;
            let spread = (body_width * 0.6 + layer * 8.0).min(60.0);
            let half = spread / 2.0;
            let depth = 2.0 + layer * 2.0;
            for i in range_inclusive(-half, half, 1.0) {
                let t = i / half;
                let y = chain_y + layer * 3.0 + (1.0 - t * t) * depth;
                self.dot(CENTER_X + i, y, color);
            }
        }
        let pendant_y = chain_y + 6.0 + 6.0 + 2.0;
        shapes::circle(&mut self.canvas, CENTER_X, pendant_y, 1.0, named::CYAN);
    }

    // Terms round separately; fusing them moves cells on exact boundaries
    #[allow(clippy::suboptimal_flops)]
    fn cross_chain(&mut self, chain_y: f64, body_width: f64) {
        let spread = (body_width * 0.7).min(50.0);
        let half = spread / 2.0;
        for i in range_inclusive(-half, half, 1.0) {
            let t = i / half;
            let y = chain_y + (1.0 - t * t) * 4.0;
            self.dot(CENTER_X + i, y, named::SILVER);
        }

        shapes::block(&mut self.canvas, CENTER_X - 1.0, chain_y + 5.0, 2.0, 10.0, named::GOLD);
        shapes::block(&mut self.canvas, CENTER_X - 4.0, chain_y + 8.0, 8.0, 2.0, named::GOLD);
        self.dot(CENTER_X, chain_y + 8.0, named::CYAN);
    }

    /// Four-cell diamond centred one row below `y`
    fn gem(&mut self, y: f64) {
        self.dot(CENTER_X, y + 1.0, named::CYAN);
        self.dot(CENTER_X - 1.0, y, named::CYAN);
        self.dot(CENTER_X + 1.0, y, named::CYAN);
        self.dot(CENTER_X, y - 1.0, named::CYAN);
    }
}

/// Whether `value` is an exact integer multiple of `step`
fn is_multiple(value: f64, step: f64) -> bool {
    (value % step).abs() < f64::EPSILON
}
