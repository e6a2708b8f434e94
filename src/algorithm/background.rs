//! Background tiles, accent stars and the aura rings

use crate::algorithm::portrait::TraitGenerator;
use crate::choices;
use crate::io::configuration::{
    AURA_ANGLE_STEP, AURA_CENTER, AURA_INNER_RADIUS, AURA_KEEP_THRESHOLD, AURA_OUTER_RADIUS,
    AURA_RADIUS_STEP, BACKGROUND_STAR_COUNT, BACKGROUND_THRESHOLD, BACKGROUND_TILE, GRID_SIZE,
};
use crate::math::stepping::range;
use crate::palette::{Choices, Color, Rarity, named};
use crate::raster::canvas::in_grid;
use crate::raster::{Surface, shapes};
use std::f64::consts::TAU;

/// Translucent gold ring colours
pub const LEGENDARY_AURA: Choices<Color> = choices![
    named::GOLD.with_alpha(0x33),
    Color::hex(0xFFC700).with_alpha(0x33),
    Color::hex(0xFFE700).with_alpha(0x33),
];

/// Translucent neon ring colours
pub const MYTHIC_AURA: Choices<Color> = choices![
    named::CYAN.with_alpha(0x33),
    Color::hex(0x00EFEF).with_alpha(0x33),
    Color::hex(0xFF00FF).with_alpha(0x33),
];

impl<S: Surface + ?Sized> TraitGenerator<'_, S> {
    /// Tile pass plus accent stars; returns the draws used by the tile pass
    pub(crate) fn draw_background(&mut self) -> usize {
        let tile = BACKGROUND_TILE as f64;
        for column in (0..GRID_SIZE).step_by(BACKGROUND_TILE) {
            for row in (0..GRID_SIZE).step_by(BACKGROUND_TILE) {
                if self.random.above(BACKGROUND_THRESHOLD) {
                    let color = self.random.pick(&self.palette.background);
                    self.canvas
                        .fill_cells(column as f64, row as f64, tile, tile, color);
                }
            }
        }
        let tile_draws = self.random.draws();

        if self.rarity.is_at_least(Rarity::Epic) {
            for _ in 0..BACKGROUND_STAR_COUNT {
                let x = self.random.below(GRID_SIZE) as f64;
                let y = self.random.below(GRID_SIZE) as f64;
                let size = 2.0 + self.random.below(3) as f64;
                let color = self.random.pick(&self.palette.accent);
                shapes::star(&mut self.canvas, x, y, size, color);
            }
        }

        tile_draws
    }

    /// Concentric dotted rings around the portrait centre
    ///
    /// Ring points off the grid are skipped without consuming a draw.
    #[allow(clippy::suboptimal_flops)]
    pub(crate) fn draw_aura(&mut self) {
        let colors = if self.rarity == Rarity::Legendary {
            &LEGENDARY_AURA
        } else {
            &MYTHIC_AURA
        };

        for radius in ((AURA_INNER_RADIUS + 1)..=AURA_OUTER_RADIUS)
            .rev()
            .step_by(AURA_RADIUS_STEP)
        {
            let color = self.random.pick(colors);
            let r = f64::from(radius);
            for angle in range(0.0, TAU, AURA_ANGLE_STEP) {
                let px = AURA_CENTER + angle.cos() * r;
                let py = AURA_CENTER + angle.sin() * r;
                if in_grid(px, py) && self.random.above(AURA_KEEP_THRESHOLD) {
                    self.dot(px.floor(), py.floor(), color);
                }
            }
        }
    }
}
