//! Ears, fur patches and head accessories

use crate::algorithm::catalog::{EarStyle, HeadAccessory};
use crate::algorithm::portrait::{HeadLayout, TraitGenerator};
use crate::io::configuration::{CENTER_X, FUR_PIXEL_THRESHOLD, HEAD_ACCESSORY_THRESHOLD};
use crate::math::stepping::{range, range_inclusive, units};
use crate::palette::{Color, Rarity, named};
use crate::raster::{Surface, shapes};

impl<S: Surface + ?Sized> TraitGenerator<'_, S> {
    /// Ears are never gated; three draws pick style, inset and size
    pub(crate) fn draw_ears(&mut self, head: &HeadLayout, fur: Color) -> EarStyle {
        let style = EarStyle::draw(&mut self.random);
        let inset = 13.0 + self.random.below(8) as f64;
        let size = 11.0 + self.random.below(5) as f64;

        let left = head.x + inset;
        let right = head.right() - inset;
        let y = head.y + 6.0;

        shapes::circle(&mut self.canvas, left, y, size, fur);
        shapes::circle(&mut self.canvas, right, y, size, fur);

        let inner = match style {
            EarStyle::Tan | EarStyle::Pierced => named::TAN,
            EarStyle::Pink => named::LIGHT_PINK,
            EarStyle::Dark => named::DARK_BROWN,
        };
        shapes::circle(&mut self.canvas, left, y, size - 4.0, inner);
        shapes::circle(&mut self.canvas, right, y, size - 4.0, inner);

        if style == EarStyle::Pierced {
            let earring = self.palette.accent.first();
            for dy in units(10.0, 13.0) {
                self.dot(left, head.y + dy, earring);
            }
            for dy in units(10.0, 13.0) {
                self.dot(right, head.y + dy, earring);
            }
        }
        style
    }

    /// Scatter two to four speckled blotches of fur colours over the head
    pub(crate) fn draw_fur_patches(&mut self, head: &HeadLayout) -> usize {
        let count = 2 + self.random.below(3);
        let span_x = (head.width - 20.0).max(1.0) as usize;
        let span_y = (head.height - 20.0).max(1.0) as usize;

        for _ in 0..count {
            let x = head.x + 10.0 + self.random.below(span_x) as f64;
            let y = head.y + 10.0 + self.random.below(span_y) as f64;
            let size = 5.0 + self.random.below(8) as f64;
            let color = self.random.pick(&self.palette.body);

            for i in units(0.0, size) {
                for j in units(0.0, size) {
                    if self.random.above(FUR_PIXEL_THRESHOLD) {
                        self.dot(x + i, y + j, color);
                    }
                }
            }
        }
        count
    }

    /// Gate, select and draw a head accessory
    ///
    /// Common portraits skip the gate draw entirely. Variants the rarity does
    /// not allow consume their selection draw and draw nothing.
    pub(crate) fn draw_head_accessory(&mut self, head: &HeadLayout) -> Option<HeadAccessory> {
        if self.rarity == Rarity::Common || !self.random.above(HEAD_ACCESSORY_THRESHOLD) {
            return None;
        }

        let accessory = HeadAccessory::draw(&mut self.random);
        if !accessory_allowed(accessory, self.rarity) {
            return None;
        }

        match accessory {
            HeadAccessory::Crown => self.crown(head),
            HeadAccessory::Halo => self.halo(head),
            HeadAccessory::ThirdEye => self.third_eye(head),
            HeadAccessory::Antennae => self.antennae(head),
            HeadAccessory::FlowerCrown => self.flower_crown(head),
            HeadAccessory::Horns => self.horns(head),
            HeadAccessory::Headphones => self.headphones(head),
            HeadAccessory::Bandana => self.bandana(head),
            HeadAccessory::Beanie => self.beanie(head),
            HeadAccessory::Cap => self.cap(head),
            HeadAccessory::Smoke => self.smoke(head),
            HeadAccessory::Mohawk => self.mohawk(head),
        }
        Some(accessory)
    }

    fn regal_color(&self) -> Color {
        match self.rarity {
            Rarity::Legendary => named::GOLD,
            Rarity::Mythic => named::CYAN,
            _ => named::LAVENDER,
        }
    }

    fn crown(&mut self, head: &HeadLayout) {
        let color = self.regal_color();
        for i in units(0.0, 5.0) {
            let peak_x = i.mul_add(6.0, head.x + head.width / 2.0 - 12.0);
            for j in units(0.0, 8.0) {
                self.dot(peak_x, head.y - 8.0 + j, color);
                self.dot(peak_x + 1.0, head.y - 8.0 + j, color);
            }
            self.dot(peak_x, head.y - 6.0, named::RED);
        }
    }

    fn halo(&mut self, head: &HeadLayout) {
        let color = self.regal_color();
        for i in range_inclusive(-12.0, 12.0, 1.0) {
            self.dot(CENTER_X + i, head.y - 9.0, color);
            self.dot(CENTER_X + i, head.y - 5.0, color);
        }
        for k in units(0.0, 3.0) {
            self.dot(CENTER_X - 13.0, head.y - 8.0 + k, color);
            self.dot(CENTER_X + 13.0, head.y - 8.0 + k, color);
        }
    }

    fn third_eye(&mut self, head: &HeadLayout) {
        let y = head.y + 10.0;
        shapes::circle(&mut self.canvas, CENTER_X, y, 3.0, named::WHITE);
        shapes::circle(&mut self.canvas, CENTER_X, y, 1.0, named::VIOLET);
        self.dot(CENTER_X, y, named::BLACK);
    }

    fn antennae(&mut self, head: &HeadLayout) {
        for k in units(0.0, 10.0) {
            let y = head.y + 2.0 - k;
            self.dot(CENTER_X - 10.0 - k / 2.0, y, named::BLACK);
            self.dot(CENTER_X + 10.0 + k / 2.0, y, named::BLACK);
        }
        shapes::circle(&mut self.canvas, CENTER_X - 15.0, head.y - 8.0, 2.0, named::VIOLET);
        shapes::circle(&mut self.canvas, CENTER_X + 15.0, head.y - 8.0, 2.0, named::VIOLET);
    }

    fn flower_crown(&mut self, head: &HeadLayout) {
        let y = head.y + 3.0;
        for (index, i) in units(0.0, 7.0).enumerate() {
            let x = i.mul_add(6.0, CENTER_X - 18.0);
            let petal = if index % 2 == 0 {
                named::PETAL
            } else {
                named::HOT_PINK
            };
            shapes::circle(&mut self.canvas, x, y, 2.0, petal);
            self.dot(x, y, named::GOLD);
            self.dot(x + 3.0, y + 1.0, named::LEAF);
        }
    }

    fn horns(&mut self, head: &HeadLayout) {
        for k in units(0.0, 6.0) {
            let width = ((6.0 - k) / 2.0).ceil();
            let y = head.y + 4.0 - k;
            shapes::block(&mut self.canvas, head.x + 14.0, y, width, 1.0, named::IVORY);
            shapes::block(
                &mut self.canvas,
                head.right() - 14.0 - width,
                y,
                width,
                1.0,
                named::IVORY,
            );
        }
    }

    fn headphones(&mut self, head: &HeadLayout) {
        for i in range_inclusive(-22.0, 22.0, 1.0) {
            let y = (i * i / 80.0).floor() + head.y - 4.0;
            self.dot(CENTER_X + i, y, named::CHARCOAL);
        }
        shapes::block(&mut self.canvas, head.x + 2.0, head.y + 18.0, 5.0, 10.0, named::CHARCOAL);
        shapes::block(
            &mut self.canvas,
            head.right() - 7.0,
            head.y + 18.0,
            5.0,
            10.0,
            named::CHARCOAL,
        );
        shapes::block(&mut self.canvas, head.x + 3.0, head.y + 20.0, 3.0, 6.0, named::BLACK);
        shapes::block(&mut self.canvas, head.right() - 6.0, head.y + 20.0, 3.0, 6.0, named::BLACK);
    }

    fn bandana(&mut self, head: &HeadLayout) {
        shapes::block(
            &mut self.canvas,
            head.x + 8.0,
            head.y + 6.0,
            head.width - 16.0,
            4.0,
            named::CRIMSON,
        );
        for x in range(head.x + 10.0, head.right() - 10.0, 6.0) {
            self.dot(x, head.y + 7.0, named::WHITE);
        }
        let knot_x = head.right() - 8.0;
        for (dx, dy) in [(1.0, 0.0), (2.0, 1.0), (3.0, 2.0), (2.0, 3.0), (4.0, 3.0)] {
            self.dot(knot_x + dx, head.y + 8.0 + dy, named::CRIMSON);
        }
    }

    fn beanie(&mut self, head: &HeadLayout) {
        shapes::ellipse(
            &mut self.canvas,
            head.x + 10.0,
            head.y - 6.0,
            head.width - 20.0,
            16.0,
            named::TEAL,
        );
        shapes::block(
            &mut self.canvas,
            head.x + 8.0,
            head.y + 4.0,
            head.width - 16.0,
            3.0,
            named::WHITE,
        );
        shapes::circle(&mut self.canvas, CENTER_X, head.y - 7.0, 2.0, named::WHITE);
    }

    fn cap(&mut self, head: &HeadLayout) {
        shapes::ellipse(
            &mut self.canvas,
            head.x + 12.0,
            head.y - 4.0,
            head.width - 24.0,
            12.0,
            named::CRIMSON,
        );
        shapes::block(
            &mut self.canvas,
            CENTER_X,
            head.y + 5.0,
            head.width / 2.0 - 6.0,
            2.0,
            named::CRIMSON,
        );
        self.dot(CENTER_X, head.y - 4.0, named::WHITE);
    }

    fn smoke(&mut self, head: &HeadLayout) {
        let y = head.y + 47.0;
        shapes::block(&mut self.canvas, CENTER_X + 6.0, y, 7.0, 1.0, named::WHITE);
        self.dot(CENTER_X + 13.0, y, named::EMBER);
        for (dx, dy) in [(14.0, -3.0), (15.0, -5.0), (14.0, -7.0)] {
            self.dot(CENTER_X + dx, y + dy, named::SMOKE);
        }
    }

    fn mohawk(&mut self, head: &HeadLayout) {
        let color = self.palette.accent.first();
        for (index, k) in units(0.0, 5.0).enumerate() {
            let height = if index % 2 == 0 { 9.0 } else { 6.0 };
            let x = k.mul_add(2.0, CENTER_X - 5.0);
            shapes::block(&mut self.canvas, x, head.y + 4.0 - height, 2.0, height, color);
        }
    }
}

/// Whether a head accessory may appear on a rarity
pub const fn accessory_allowed(accessory: HeadAccessory, rarity: Rarity) -> bool {
    match accessory {
        HeadAccessory::Crown => matches!(
            rarity,
            Rarity::Epic | Rarity::Legendary | Rarity::Mythic
        ),
        HeadAccessory::Halo => rarity.has_aura(),
        HeadAccessory::ThirdEye => matches!(rarity, Rarity::Epic | Rarity::Mythic),
        HeadAccessory::Antennae => matches!(rarity, Rarity::Mythic),
        HeadAccessory::FlowerCrown => matches!(rarity, Rarity::Rare | Rarity::Epic),
        HeadAccessory::Horns
        | HeadAccessory::Headphones
        | HeadAccessory::Bandana
        | HeadAccessory::Beanie
        | HeadAccessory::Cap
        | HeadAccessory::Smoke
        | HeadAccessory::Mohawk => true,
    }
}
