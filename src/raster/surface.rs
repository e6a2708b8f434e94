//! Physical drawing targets
//!
//! A surface accepts axis-aligned rectangle fills in physical pixel units.
//! Coordinates are fractional; each implementation decides coverage by
//! sampling pixel centres, so a rectangle covers pixel `p` when `p + 0.5`
//! lies in `[x, x + width)`.

use crate::palette::Color;
use image::RgbaImage;

/// Drawing target owned by the caller
pub trait Surface {
    /// Physical (width, height) in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Composite `color` over the rectangle `(x, y, width, height)`
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// Toggle interpolation when the surface is scaled for display
    ///
    /// Fills here are always hard-edged; surfaces backed by a scaling
    /// presenter override this to switch interpolation off.
    fn set_smoothing(&mut self, _enabled: bool) {}
}

/// Pixel index range whose centres fall in `[start, start + length)`, clipped to `limit`
pub fn covered_span(start: f64, length: f64, limit: u32) -> std::ops::Range<u32> {
    if !start.is_finite() || !length.is_finite() {
        return 0..0;
    }
    let first = (start - 0.5).ceil().max(0.0);
    let end = (start + length - 0.5).ceil().min(f64::from(limit));
    if end <= first {
        return 0..0;
    }
    (first as u32)..(end as u32)
}

impl Surface for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let (surface_width, surface_height) = (self.width(), self.height());
        let columns = covered_span(x, width, surface_width);
        for py in covered_span(y, height, surface_height) {
            for px in columns.clone() {
                if let Some(pixel) = self.get_pixel_mut_checked(px, py) {
                    *pixel = color.blend_over(Color::from(*pixel)).into();
                }
            }
        }
    }
}
