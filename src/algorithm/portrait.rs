//! Portrait orchestration and the fixed stage sequence
//!
//! Stages run once each, in order: background, aura, body colour, head size,
//! body, arms, body accessory, feet, head, ears, fur patches, face, head
//! accessory and rarity effects. Every stage pulls from the same random
//! stream, so both the order of stages and the number of draws inside each
//! branch are part of the seed-to-image contract.

use crate::algorithm::catalog::{
    ArmStyle, BlingChain, BodyAccessory, EarStyle, EyeAccessory, EyeStyle, EyebrowStyle,
    FacialExtra, FeetStyle, HeadAccessory, MouthStyle, NoseStyle,
};
use crate::io::configuration::{
    BODY_HEIGHT, BODY_OVERLAP, BODY_WIDTH_INSET, CENTER_X, FUR_PATCH_THRESHOLD, HEAD_HEIGHT_SPAN,
    HEAD_MIN_HEIGHT, HEAD_MIN_WIDTH, HEAD_WIDTH_SPAN, HEAD_Y, SURFACE_SIZE,
};
use crate::io::error::{PortraitError, Result};
use crate::math::SeededRandom;
use crate::palette::{Color, Palette, Rarity, named, palette};
use crate::raster::{PixelCanvas, Surface, shapes};
use tracing::{debug, trace};

/// Head ellipse placement in cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadLayout {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Ellipse width
    pub width: f64,
    /// Ellipse height
    pub height: f64,
}

impl HeadLayout {
    /// Draw width then height and centre the head horizontally
    pub fn draw(random: &mut SeededRandom) -> Self {
        let width = HEAD_MIN_WIDTH + random.below(HEAD_WIDTH_SPAN) as f64;
        let height = HEAD_MIN_HEIGHT + random.below(HEAD_HEIGHT_SPAN) as f64;
        Self {
            x: CENTER_X - width / 2.0,
            y: HEAD_Y,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Body ellipse placement in cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLayout {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Ellipse width
    pub width: f64,
    /// Ellipse height
    pub height: f64,
}

impl BodyLayout {
    /// Body tucked under a head, slightly narrower and overlapping its chin
    pub fn under(head: &HeadLayout) -> Self {
        let width = head.width - BODY_WIDTH_INSET;
        Self {
            x: CENTER_X - width / 2.0,
            y: head.y + head.height - BODY_OVERLAP,
            width,
            height: BODY_HEIGHT,
        }
    }
}

/// Facial feature choices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Eyebrow shape
    pub eyebrows: EyebrowStyle,
    /// Eye pattern
    pub eyes: EyeStyle,
    /// Eyewear, when drawn
    pub eye_accessory: Option<EyeAccessory>,
    /// Snout (width, height)
    pub snout: (f64, f64),
    /// Snout colour
    pub snout_color: Color,
    /// Nose shape
    pub nose: NoseStyle,
    /// Mouth shape
    pub mouth: MouthStyle,
    /// Secondary mark, when drawn
    pub extra: Option<FacialExtra>,
}

/// Everything a generation run decided
///
/// Optional fields are `Some` only when the trait was actually drawn; a
/// selected variant that the rarity does not allow is reported as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Portrait {
    /// Seed the stream started from
    pub seed: f64,
    /// Rarity tier
    pub rarity: Rarity,
    /// Fur colour shared by body, head, ears and bare feet
    pub body_color: Color,
    /// Head placement
    pub head: HeadLayout,
    /// Body placement
    pub body: BodyLayout,
    /// Arm treatment
    pub arms: ArmStyle,
    /// Body accessory, when drawn
    pub body_accessory: Option<BodyAccessory>,
    /// Foot treatment
    pub feet: FeetStyle,
    /// Inner ear treatment
    pub ears: EarStyle,
    /// Number of fur patches (zero when the gate failed)
    pub fur_patches: usize,
    /// Facial features
    pub face: Face,
    /// Head accessory, when drawn
    pub head_accessory: Option<HeadAccessory>,
    /// Mythic bling chain, when drawn
    pub bling: Option<BlingChain>,
    /// Draws consumed by the background tile pass, identical across rarities
    pub background_draws: usize,
    /// Draws consumed by the whole run
    pub draws: usize,
}

/// Render one portrait onto `surface`
///
/// The surface must be the full physical size. It is cleared first, so any
/// previous content is lost.
///
/// # Errors
///
/// Returns an error if:
/// - The seed is NaN or infinite
/// - The surface is not 900x900 physical pixels
pub fn generate_portrait<S: Surface + ?Sized>(
    surface: &mut S,
    seed: f64,
    rarity: Rarity,
) -> Result<Portrait> {
    let random = SeededRandom::new(seed)?;

    let expected = (SURFACE_SIZE, SURFACE_SIZE);
    let actual = surface.dimensions();
    if actual != expected {
        return Err(PortraitError::SurfaceSize { expected, actual });
    }

    let mut canvas = PixelCanvas::new(surface);
    canvas.set_smoothing(false);
    canvas.clear(named::CLEAR);

    let generator = TraitGenerator {
        canvas,
        random,
        rarity,
        palette: palette(rarity),
    };
    let portrait = generator.run(seed);

    debug!(
        seed,
        rarity = %rarity,
        body_color = %portrait.body_color,
        eyes = ?portrait.face.eyes,
        draws = portrait.draws,
        "Generated portrait"
    );
    Ok(portrait)
}

/// Mutable state of one generation run
pub(crate) struct TraitGenerator<'a, S: Surface + ?Sized> {
    pub(crate) canvas: PixelCanvas<'a, S>,
    pub(crate) random: SeededRandom,
    pub(crate) rarity: Rarity,
    pub(crate) palette: &'static Palette,
}

impl<S: Surface + ?Sized> TraitGenerator<'_, S> {
    fn run(mut self, seed: f64) -> Portrait {
        let background_draws = self.draw_background();
        if self.rarity.has_aura() {
            self.draw_aura();
        }
        trace!(draws = self.random.draws(), "Backdrop finished");

        let body_color = self.random.pick(&self.palette.body);
        let head = HeadLayout::draw(&mut self.random);
        let body = BodyLayout::under(&head);

        shapes::ellipse(
            &mut self.canvas,
            body.x,
            body.y,
            body.width,
            body.height,
            body_color,
        );

        let arms = ArmStyle::draw(&mut self.random);
        self.draw_arms(&body, arms, body_color);
        let body_accessory = self.draw_body_accessory(&body);
        let feet = self.draw_feet(&body, body_color);
        trace!(draws = self.random.draws(), "Body finished");

        shapes::ellipse(
            &mut self.canvas,
            head.x,
            head.y,
            head.width,
            head.height,
            body_color,
        );

        let ears = self.draw_ears(&head, body_color);
        let fur_patches = if self.random.above(FUR_PATCH_THRESHOLD) {
            self.draw_fur_patches(&head)
        } else {
            0
        };
        let face = self.draw_face(&head);
        let head_accessory = self.draw_head_accessory(&head);
        trace!(draws = self.random.draws(), "Head finished");

        let bling = self.draw_rarity_effects(&body);

        Portrait {
            seed,
            rarity: self.rarity,
            body_color,
            head,
            body,
            arms,
            body_accessory,
            feet,
            ears,
            fur_patches,
            face,
            head_accessory,
            bling,
            background_draws,
            draws: self.random.draws(),
        }
    }

    /// Fill one cell
    pub(crate) fn dot(&mut self, x: f64, y: f64, color: Color) {
        self.canvas.fill_cell(x, y, color);
    }
}
