//! Arms, body accessories and feet

use crate::algorithm::catalog::{ArmStyle, BodyAccessory, FeetStyle};
use crate::algorithm::portrait::{BodyLayout, TraitGenerator};
use crate::choices;
use crate::io::configuration::{BODY_ACCESSORY_THRESHOLD, CENTER_X};
use crate::math::stepping::{range, units};
use crate::palette::{Choices, Color, Rarity, named};
use crate::raster::{Surface, shapes};

/// Shoe colours
pub const SHOE_COLORS: Choices<Color> =
    choices![named::BLACK, named::RED, named::BLUE, named::WHITE];

/// Sock colours
pub const SOCK_COLORS: Choices<Color> = choices![named::WHITE, named::BLACK, named::HOT_PINK];

const HEART: &[(f64, f64)] = &[
    (1.0, 0.0),
    (3.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (2.0, 1.0),
    (3.0, 1.0),
    (4.0, 1.0),
    (1.0, 2.0),
    (2.0, 2.0),
    (3.0, 2.0),
    (2.0, 3.0),
];

impl<S: Surface + ?Sized> TraitGenerator<'_, S> {
    pub(crate) fn draw_arms(&mut self, body: &BodyLayout, style: ArmStyle, color: Color) {
        let half = body.width / 2.0;
        match style {
            ArmStyle::None => {}
            ArmStyle::Paws => {
                let y = body.y + body.height / 2.0;
                shapes::circle(&mut self.canvas, CENTER_X - half - 2.0, y, 4.0, color);
                shapes::circle(&mut self.canvas, CENTER_X + half + 2.0, y, 4.0, color);
            }
            ArmStyle::Nubs => {
                for i in units(0.0, 6.0) {
                    let y = body.y + 15.0 + i;
                    self.dot(CENTER_X - half - 1.0, y, color);
                    self.dot(CENTER_X - half - 2.0, y, color);
                    self.dot(CENTER_X + half + 1.0, y, color);
                    self.dot(CENTER_X + half + 2.0, y, color);
                }
            }
        }
    }

    /// Gate, select and draw a body accessory
    ///
    /// The gate draw happens for every rarity; common portraits then stop.
    #[allow(clippy::suboptimal_flops)]
    pub(crate) fn draw_body_accessory(&mut self, body: &BodyLayout) -> Option<BodyAccessory> {
        let wanted = self.random.above(BODY_ACCESSORY_THRESHOLD);
        if !wanted || self.rarity == Rarity::Common {
            return None;
        }

        let accessory = BodyAccessory::draw(&mut self.random);
        match accessory {
            BodyAccessory::Chain => self.chain_necklace(body),
            BodyAccessory::ShirtDesign => self.shirt_design(body),
            BodyAccessory::BowTie => self.bow_tie(body),
            BodyAccessory::Tattoo => {
                if !self.rarity.is_at_least(Rarity::Epic) {
                    return None;
                }
                let x = body.x + body.width * 0.7;
                shapes::pattern(&mut self.canvas, x, body.y + 16.0, HEART, named::INK);
            }
            BodyAccessory::Suspenders => self.suspenders(body),
            BodyAccessory::Badge => self.badge(body),
        }
        Some(accessory)
    }

    fn chain_necklace(&mut self, body: &BodyLayout) {
        let y = body.y + 5.0;
        let color = if self.rarity == Rarity::Legendary {
            named::GOLD
        } else {
            named::SILVER
        };
        for i in range(10.0, body.width - 10.0, 3.0) {
            self.dot(body.x + i, y, color);
            self.dot(body.x + i, y + 1.0, color);
        }
    }

    fn shirt_design(&mut self, body: &BodyLayout) {
        let color = self.random.pick(&self.palette.accent);
        for row in units(0.0, 3.0) {
            for i in units(-6.0, 7.0) {
                self.dot(CENTER_X + i, row.mul_add(3.0, body.y + 20.0), color);
            }
        }
    }

    fn bow_tie(&mut self, body: &BodyLayout) {
        let color = self.random.pick(&self.palette.accent);
        let y = body.y + 4.0;
        for d in units(1.0, 5.0) {
            for dy in units(-d, d + 1.0) {
                self.dot(CENTER_X - 1.0 - d, y + dy, color);
                self.dot(CENTER_X + d, y + dy, color);
            }
        }
        shapes::block(&mut self.canvas, CENTER_X - 1.0, y - 1.0, 2.0, 2.0, named::BLACK);
    }

    fn suspenders(&mut self, body: &BodyLayout) {
        let offset = body.width / 4.0;
        for i in units(0.0, 22.0) {
            self.dot(CENTER_X - offset, body.y + 2.0 + i, named::DARK_RED);
            self.dot(CENTER_X + offset, body.y + 2.0 + i, named::DARK_RED);
        }
        self.dot(CENTER_X - offset, body.y + 20.0, named::GOLD);
        self.dot(CENTER_X + offset, body.y + 20.0, named::GOLD);
    }

    fn badge(&mut self, body: &BodyLayout) {
        let color = self.random.pick(&self.palette.accent);
        let x = CENTER_X - body.width / 4.0;
        let y = body.y + 14.0;
        shapes::circle(&mut self.canvas, x, y, 3.0, color);
        self.dot(x, y, named::WHITE);
    }

    pub(crate) fn draw_feet(&mut self, body: &BodyLayout, fur: Color) -> FeetStyle {
        let style = FeetStyle::draw(&mut self.random);
        let feet_y = body.y + body.height - 8.0;
        let left = CENTER_X - body.width / 4.0;
        let right = CENTER_X + body.width / 4.0;

        match style {
            FeetStyle::None => return style,
            FeetStyle::Bare => {
                shapes::ellipse(&mut self.canvas, left - 5.0, feet_y, 12.0, 10.0, fur);
                shapes::ellipse(&mut self.canvas, right - 5.0, feet_y, 12.0, 10.0, fur);
            }
            FeetStyle::Shoes => {
                let shoe = self.random.pick(&SHOE_COLORS);
                shapes::ellipse(&mut self.canvas, left - 6.0, feet_y, 14.0, 12.0, shoe);
                shapes::ellipse(&mut self.canvas, right - 6.0, feet_y, 14.0, 12.0, shoe);
                for i in units(0.0, 3.0) {
                    self.dot(i.mul_add(2.0, left - 3.0), feet_y + 4.0, named::WHITE);
                    self.dot(i.mul_add(2.0, right - 3.0), feet_y + 4.0, named::WHITE);
                }
            }
            FeetStyle::Socks => {
                let sock = self.random.pick(&SOCK_COLORS);
                shapes::ellipse(&mut self.canvas, left - 5.0, feet_y - 3.0, 12.0, 15.0, sock);
                shapes::ellipse(&mut self.canvas, right - 5.0, feet_y - 3.0, 12.0, 15.0, sock);
                for i in units(0.0, 3.0) {
                    for j in units(0.0, 10.0) {
                        let y = i.mul_add(3.0, feet_y - 2.0);
                        self.dot(left - 4.0 + j, y, fur);
                        self.dot(right - 4.0 + j, y, fur);
                    }
                }
            }
        }

        if style == FeetStyle::Bare && self.rarity.has_aura() {
            shapes::circle(&mut self.canvas, left, feet_y + 3.0, 2.0, named::BEAN_BROWN);
            shapes::circle(&mut self.canvas, right, feet_y + 3.0, 2.0, named::BEAN_BROWN);
        }
        style
    }
}
