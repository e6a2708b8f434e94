//! Eyebrows, eyes, eyewear, snout, nose, mouth and facial marks
//!
//! Left features anchor 20 cells inside the head's left edge, right features
//! 20 cells inside its right edge. Pixel patterns are offsets from those
//! anchors.

use crate::algorithm::catalog::{
    EyeAccessory, EyeStyle, EyebrowStyle, FacialExtra, MouthStyle, NoseStyle,
};
use crate::algorithm::portrait::{Face, HeadLayout, TraitGenerator};
use crate::io::configuration::{
    CENTER_X, EYE_ACCESSORY_THRESHOLD, FACIAL_EXTRA_THRESHOLD, SNOUT_ALT_COLOR_THRESHOLD,
    UNIBROW_THICKEN_THRESHOLD,
};
use crate::math::stepping::{range_inclusive, units};
use crate::palette::{Color, Rarity, named};
use crate::raster::{Surface, shapes};

const SPIRAL: &[(f64, f64)] = &[
    (2.0, 2.0),
    (3.0, 2.0),
    (3.0, 3.0),
    (2.0, 3.0),
    (1.0, 3.0),
    (1.0, 2.0),
    (1.0, 1.0),
    (2.0, 1.0),
    (3.0, 1.0),
    (4.0, 1.0),
    (4.0, 2.0),
    (4.0, 3.0),
    (4.0, 4.0),
    (3.0, 4.0),
    (2.0, 4.0),
];

const CAT_NOSE: &[(f64, f64)] = &[
    (-1.0, 0.0),
    (0.0, 0.0),
    (1.0, 0.0),
    (-2.0, 1.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (2.0, 1.0),
    (0.0, 2.0),
];

const FROWN: &[(f64, f64)] = &[
    (-6.0, 0.0),
    (-5.0, 1.0),
    (-4.0, 2.0),
    (-3.0, 2.0),
    (-2.0, 2.0),
    (-1.0, 2.0),
    (0.0, 2.0),
    (1.0, 2.0),
    (2.0, 2.0),
    (3.0, 2.0),
    (4.0, 2.0),
    (5.0, 1.0),
    (6.0, 0.0),
];

const IRONIC_SMILE: &[(f64, f64)] = &[
    (-6.0, 2.0),
    (-5.0, 1.0),
    (-4.0, 0.0),
    (-3.0, 0.0),
    (-2.0, 0.0),
    (-1.0, 0.0),
    (0.0, 0.0),
    (1.0, 0.0),
    (2.0, 0.0),
    (3.0, 0.0),
    (4.0, 0.0),
    (5.0, 1.0),
    (6.0, 2.0),
];

const SMIRK: &[(f64, f64)] = &[
    (-5.0, 0.0),
    (-4.0, 0.0),
    (-3.0, 0.0),
    (-2.0, 0.0),
    (-1.0, 0.0),
    (0.0, 0.0),
    (1.0, 0.0),
    (2.0, 0.0),
    (3.0, -1.0),
    (4.0, -1.0),
    (5.0, -2.0),
];

const FRECKLES: &[(f64, f64)] = &[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (1.0, 2.0), (3.0, 2.0)];

const TEARDROP: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 1.0), (-1.0, 2.0), (1.0, 2.0), (0.0, 3.0)];

/// Anchor points shared by the eye-level features
#[derive(Debug, Clone, Copy)]
struct EyeLine {
    left: f64,
    right: f64,
    y: f64,
}

impl EyeLine {
    fn at(head: &HeadLayout, dy: f64) -> Self {
        Self {
            left: head.x + 20.0,
            right: head.right() - 20.0,
            y: head.y + dy,
        }
    }
}

impl<S: Surface + ?Sized> TraitGenerator<'_, S> {
    /// All facial features in their fixed draw order
    pub(crate) fn draw_face(&mut self, head: &HeadLayout) -> Face {
        let eyebrows = EyebrowStyle::draw(&mut self.random);
        self.draw_eyebrows(EyeLine::at(head, 18.0), eyebrows);

        let eyes = EyeStyle::draw(&mut self.random);
        let eye_line = EyeLine::at(head, 22.0);
        self.draw_eyes(eye_line, eyes);

        let eye_accessory = if self.random.above(EYE_ACCESSORY_THRESHOLD) {
            let accessory = EyeAccessory::draw(&mut self.random);
            self.draw_eye_accessory(head, eye_line, accessory);
            Some(accessory)
        } else {
            None
        };

        let snout_width = 24.0 + self.random.below(8) as f64;
        let snout_height = 16.0 + self.random.below(5) as f64;
        let snout_color = if self.random.above(SNOUT_ALT_COLOR_THRESHOLD) {
            self.palette.body.second()
        } else {
            named::SNOUT_BROWN
        };
        shapes::ellipse(
            &mut self.canvas,
            CENTER_X - snout_width / 2.0,
            head.y + 38.0,
            snout_width,
            snout_height,
            snout_color,
        );

        let nose = NoseStyle::draw(&mut self.random);
        self.draw_nose(CENTER_X, head.y + 42.0, nose);

        let mouth = MouthStyle::draw(&mut self.random);
        self.draw_mouth(CENTER_X, head.y + 48.0, mouth);

        let extra = if self.random.above(FACIAL_EXTRA_THRESHOLD) {
            self.draw_facial_extra(head, eye_line)
        } else {
            None
        };

        Face {
            eyebrows,
            eyes,
            eye_accessory,
            snout: (snout_width, snout_height),
            snout_color,
            nose,
            mouth,
            extra,
        }
    }

    fn draw_eyebrows(&mut self, line: EyeLine, style: EyebrowStyle) {
        let EyeLine { left, right, y } = line;
        match style {
            EyebrowStyle::Worried => {
                for i in units(0.0, 6.0) {
                    self.dot(left + i, y - i / 3.0, named::BLACK);
                    self.dot(right + 6.0 - i, y - i / 3.0, named::BLACK);
                }
            }
            EyebrowStyle::Angry => {
                for i in units(0.0, 6.0) {
                    self.dot(left + i, y + i / 3.0, named::BLACK);
                    self.dot(right + 6.0 - i, y + i / 3.0, named::BLACK);
                }
            }
            EyebrowStyle::Thick => {
                for j in units(0.0, 2.0) {
                    for i in units(0.0, 7.0) {
                        self.dot(left + i, y + j, named::BLACK);
                        self.dot(right + i, y + j, named::BLACK);
                    }
                }
            }
            EyebrowStyle::Unibrow => {
                for x in range_inclusive(left, right + 7.0, 1.0) {
                    self.dot(x, y, named::BLACK);
                    if self.random.above(UNIBROW_THICKEN_THRESHOLD) {
                        self.dot(x, y + 1.0, named::BLACK);
                    }
                }
            }
            EyebrowStyle::None => {}
        }
    }

    fn draw_eyes(&mut self, line: EyeLine, style: EyeStyle) {
        match style {
            EyeStyle::Droopy => self.droopy_eyes(line),
            EyeStyle::Tired => self.tired_eyes(line),
            EyeStyle::Dead => self.dead_eyes(line),
            EyeStyle::Worried => self.worried_eyes(line),
            EyeStyle::Spiral => {
                shapes::pattern(&mut self.canvas, line.left, line.y, SPIRAL, named::BLACK);
                shapes::pattern(&mut self.canvas, line.right, line.y, SPIRAL, named::BLACK);
            }
            EyeStyle::Heart => {
                self.heart_eye(line.left, line.y);
                self.heart_eye(line.right, line.y);
            }
            EyeStyle::Dollar => {
                self.dollar_eye(line.left, line.y);
                self.dollar_eye(line.right, line.y);
            }
            EyeStyle::Winking => {
                for i in units(0.0, 7.0) {
                    self.dot(line.left + i, line.y + 1.0, named::BLACK);
                }
                self.open_eye(line.right + 4.0, line.y + 1.0);
            }
        }
    }

    fn eye_bags(&mut self, line: EyeLine) {
        for i in units(0.0, 6.0) {
            self.dot(line.left + i, line.y + 4.0, named::BEAN_BROWN);
            self.dot(line.right + i, line.y + 4.0, named::BEAN_BROWN);
        }
    }

    fn droopy_eyes(&mut self, line: EyeLine) {
        let EyeLine { left, right, y } = line;
        shapes::block(&mut self.canvas, left, y, 8.0, 3.0, named::WHITE);
        shapes::block(&mut self.canvas, right, y, 8.0, 3.0, named::WHITE);
        shapes::circle(&mut self.canvas, left + 3.0, y + 2.0, 2.0, named::BLACK);
        shapes::circle(&mut self.canvas, right + 3.0, y + 2.0, 2.0, named::BLACK);
        self.dot(left + 4.0, y + 1.0, named::WHITE);
        self.dot(right + 4.0, y + 1.0, named::WHITE);
        self.eye_bags(line);
    }

    fn tired_eyes(&mut self, line: EyeLine) {
        shapes::block(&mut self.canvas, line.left, line.y, 7.0, 2.0, named::BLACK);
        shapes::block(&mut self.canvas, line.right, line.y, 7.0, 2.0, named::BLACK);
        self.eye_bags(line);
    }

    fn dead_eyes(&mut self, line: EyeLine) {
        let EyeLine { left, right, y } = line;
        for i in units(0.0, 5.0) {
            self.dot(left + i, y + i, named::BLACK);
            self.dot(left + i, y + 4.0 - i, named::BLACK);
            self.dot(right + i, y + i, named::BLACK);
            self.dot(right + i, y + 4.0 - i, named::BLACK);
        }
    }

    fn worried_eyes(&mut self, line: EyeLine) {
        let EyeLine { left, right, y } = line;
        shapes::circle(&mut self.canvas, left + 4.0, y + 1.0, 4.0, named::WHITE);
        shapes::circle(&mut self.canvas, right + 4.0, y + 1.0, 4.0, named::WHITE);
        shapes::circle(&mut self.canvas, left + 4.0, y + 1.0, 2.0, named::BLACK);
        shapes::circle(&mut self.canvas, right + 4.0, y + 1.0, 2.0, named::BLACK);
        self.dot(left + 5.0, y, named::WHITE);
        self.dot(right + 5.0, y, named::WHITE);
    }

    fn open_eye(&mut self, x: f64, y: f64) {
        shapes::circle(&mut self.canvas, x, y, 4.0, named::WHITE);
        shapes::circle(&mut self.canvas, x, y, 2.0, named::BLACK);
    }

    fn heart_eye(&mut self, x: f64, y: f64) {
        let color = named::DEEP_PINK;
        for dx in [2.0, 3.0, 5.0, 6.0] {
            self.dot(x + dx, y, color);
        }
        for i in units(1.0, 7.0) {
            self.dot(x + i, y + 1.0, color);
        }
        for i in units(2.0, 6.0) {
            self.dot(x + i, y + 2.0, color);
        }
        self.dot(x + 3.0, y + 3.0, color);
        self.dot(x + 4.0, y + 3.0, color);
    }

    fn dollar_eye(&mut self, x: f64, y: f64) {
        let color = named::LIME;
        for i in units(0.0, 5.0) {
            self.dot(x + 3.0, y + i, color);
        }
        for offset in [0.0, 2.0, 4.0] {
            self.dot(x + 2.0, y + offset, color);
            self.dot(x + 4.0, y + offset, color);
        }
    }

    fn draw_eye_accessory(&mut self, head: &HeadLayout, line: EyeLine, accessory: EyeAccessory) {
        let EyeLine { left, right, y } = line;
        match accessory {
            EyeAccessory::Sunglasses => {
                shapes::block(&mut self.canvas, left - 1.0, y - 1.0, 10.0, 5.0, named::BLACK);
                shapes::block(&mut self.canvas, right - 1.0, y - 1.0, 10.0, 5.0, named::BLACK);
                for x in units(left + 9.0, right - 1.0) {
                    self.dot(x, y, named::BLACK);
                }
                self.dot(left + 1.0, y, named::WHITE);
                self.dot(right + 1.0, y, named::WHITE);
            }
            EyeAccessory::Monocle => {
                let (cx, cy) = (right + 4.0, y + 2.0);
                for i in range_inclusive(-5.0, 5.0, 1.0) {
                    for j in range_inclusive(-5.0, 5.0, 1.0) {
                        let distance = i.mul_add(i, j * j);
                        if (16.0..=25.0).contains(&distance) {
                            self.dot(cx + i, cy + j, named::GOLD);
                        }
                    }
                }
                for k in units(0.0, 8.0) {
                    self.dot(cx + 5.0, cy + 3.0 + k, named::CHARCOAL);
                }
            }
            EyeAccessory::Eyepatch => {
                for x in units(head.x + 6.0, head.right() - 6.0) {
                    self.dot(x, y - 3.0, named::BLACK);
                }
                shapes::block(&mut self.canvas, left - 1.0, y - 1.0, 10.0, 7.0, named::BLACK);
            }
            EyeAccessory::ReadingGlasses => {
                self.frame(left - 1.0, y - 2.0, 10.0, 7.0, named::CHARCOAL);
                self.frame(right - 1.0, y - 2.0, 10.0, 7.0, named::CHARCOAL);
                for x in units(left + 9.0, right - 1.0) {
                    self.dot(x, y, named::CHARCOAL);
                }
            }
        }
    }

    /// One-cell outline of a `width` by `height` box
    fn frame(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        for i in units(0.0, width) {
            self.dot(x + i, y, color);
            self.dot(x + i, y + height - 1.0, color);
        }
        for j in units(1.0, height - 1.0) {
            self.dot(x, y + j, color);
            self.dot(x + width - 1.0, y + j, color);
        }
    }

    fn draw_nose(&mut self, x: f64, y: f64, style: NoseStyle) {
        match style {
            NoseStyle::Triangle => {
                for i in units(0.0, 5.0) {
                    for j in range_inclusive(0.0, i, 1.0) {
                        self.dot(x - i / 2.0 + j, y + i / 2.0, named::BLACK);
                    }
                }
            }
            NoseStyle::Round => {
                shapes::circle(&mut self.canvas, x, y + 1.0, 3.0, named::BLACK);
                self.dot(x, y, named::WHITE);
            }
            NoseStyle::Cat => {
                shapes::pattern(&mut self.canvas, x, y, CAT_NOSE, named::LIGHT_PINK);
            }
            NoseStyle::Wide => {
                for i in range_inclusive(-4.0, 4.0, 1.0) {
                    for j in units(0.0, 3.0) {
                        if i.abs() + j < 5.0 {
                            self.dot(x + i, y + j, named::BLACK);
                        }
                    }
                }
            }
        }
    }

    fn draw_mouth(&mut self, x: f64, y: f64, style: MouthStyle) {
        match style {
            MouthStyle::Frown => shapes::pattern(&mut self.canvas, x, y, FROWN, named::BLACK),
            MouthStyle::Neutral => self.mouth_line(x, y),
            MouthStyle::IronicSmile => {
                shapes::pattern(&mut self.canvas, x, y, IRONIC_SMILE, named::BLACK);
            }
            MouthStyle::Smirk => shapes::pattern(&mut self.canvas, x, y, SMIRK, named::BLACK),
            MouthStyle::Shocked => {
                shapes::circle(&mut self.canvas, x, y + 2.0, 2.0, named::BLACK);
                shapes::circle(&mut self.canvas, x, y + 2.0, 1.0, named::DARK_RED);
            }
            MouthStyle::Grin => {
                for i in range_inclusive(-6.0, 6.0, 1.0) {
                    self.dot(x + i, y, named::BLACK);
                    self.dot(x + i, y + 3.0, named::BLACK);
                }
                shapes::block(&mut self.canvas, x - 5.0, y + 1.0, 11.0, 2.0, named::WHITE);
                for j in units(1.0, 3.0) {
                    self.dot(x - 6.0, y + j, named::BLACK);
                    self.dot(x + 6.0, y + j, named::BLACK);
                }
            }
            MouthStyle::Tongue => {
                self.mouth_line(x, y);
                shapes::block(&mut self.canvas, x - 1.0, y + 1.0, 3.0, 3.0, named::HOT_PINK);
                self.dot(x, y + 2.0, named::LIGHT_PINK);
            }
        }
    }

    fn mouth_line(&mut self, x: f64, y: f64) {
        for i in range_inclusive(-6.0, 6.0, 1.0) {
            self.dot(x + i, y, named::BLACK);
        }
    }

    /// Select and draw a secondary mark; a tattoo on a common portrait draws nothing
    fn draw_facial_extra(&mut self, head: &HeadLayout, line: EyeLine) -> Option<FacialExtra> {
        let extra = FacialExtra::draw(&mut self.random);
        let EyeLine { left, right, .. } = line;
        match extra {
            FacialExtra::Scar => {
                for k in units(0.0, 8.0) {
                    self.dot(left - 1.0 + k, head.y + 17.0 + k, named::SCAR);
                }
            }
            FacialExtra::Bandage => {
                let x = head.right() - 22.0;
                shapes::block(&mut self.canvas, x, head.y + 32.0, 7.0, 3.0, named::BANDAGE);
                shapes::block(&mut self.canvas, x + 2.0, head.y + 30.0, 3.0, 7.0, named::BANDAGE);
            }
            FacialExtra::Blush => {
                shapes::block(&mut self.canvas, head.x + 12.0, head.y + 33.0, 5.0, 2.0, named::BLUSH);
                shapes::block(
                    &mut self.canvas,
                    head.right() - 17.0,
                    head.y + 33.0,
                    5.0,
                    2.0,
                    named::BLUSH,
                );
            }
            FacialExtra::Freckles => {
                let y = head.y + 32.0;
                shapes::pattern(&mut self.canvas, head.x + 13.0, y, FRECKLES, named::FRECKLE);
                shapes::pattern(&mut self.canvas, head.right() - 18.0, y, FRECKLES, named::FRECKLE);
            }
            FacialExtra::Tears => {
                for k in units(0.0, 4.0) {
                    self.dot(left + 2.0, head.y + 27.0 + k, named::TEAR);
                    self.dot(right + 5.0, head.y + 27.0 + k, named::TEAR);
                }
                shapes::block(&mut self.canvas, left + 1.0, head.y + 31.0, 3.0, 2.0, named::TEAR);
                shapes::block(&mut self.canvas, right + 4.0, head.y + 31.0, 3.0, 2.0, named::TEAR);
            }
            FacialExtra::Tattoo => {
                if self.rarity == Rarity::Common {
                    return None;
                }
                shapes::pattern(&mut self.canvas, left + 4.0, head.y + 28.0, TEARDROP, named::INK);
            }
            FacialExtra::Mole => {
                shapes::block(
                    &mut self.canvas,
                    head.right() - 28.0,
                    head.y + 46.0,
                    2.0,
                    2.0,
                    named::DARK_BROWN,
                );
            }
            FacialExtra::Stubble => {
                for (i, dx) in units(0.0, 8.0).enumerate() {
                    for (j, dy) in units(0.0, 3.0).enumerate() {
                        if (i + j) % 2 == 0 {
                            self.dot(dx.mul_add(2.0, CENTER_X - 8.0), head.y + 53.0 + dy, named::STUBBLE);
                        }
                    }
                }
            }
        }
        Some(extra)
    }
}
