//! Ellipse, circle and star rasterizers on the logical grid

use crate::math::stepping::{range_inclusive, units};
use crate::palette::Color;
use crate::raster::canvas::PixelCanvas;
use crate::raster::surface::Surface;

/// Filled axis-aligned ellipse inside the box at `(x, y)` of `width` by `height`
///
/// Offset `(i, j)` is kept when its normalised distance from the box centre is
/// at most one. Zero-sized boxes draw nothing.
// Both squares round before the sum; a fused multiply-add flips boundary cells
#[allow(clippy::suboptimal_flops)]
pub fn ellipse<S: Surface + ?Sized>(
    canvas: &mut PixelCanvas<'_, S>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
) {
    let half_width = width / 2.0;
    let half_height = height / 2.0;
    if half_width <= 0.0 || half_height <= 0.0 {
        return;
    }
    for i in units(0.0, width) {
        for j in units(0.0, height) {
            let dx = (i - half_width) / half_width;
            let dy = (j - half_height) / half_height;
            if dx * dx + dy * dy <= 1.0 {
                canvas.fill_cell(x + i, y + j, color);
            }
        }
    }
}

/// Filled circle of `radius` centred on `(x, y)`
#[allow(clippy::suboptimal_flops)]
pub fn circle<S: Surface + ?Sized>(
    canvas: &mut PixelCanvas<'_, S>,
    x: f64,
    y: f64,
    radius: f64,
    color: Color,
) {
    for i in range_inclusive(-radius, radius, 1.0) {
        for j in range_inclusive(-radius, radius, 1.0) {
            if i * i + j * j <= radius * radius {
                canvas.fill_cell(x + i, y + j, color);
            }
        }
    }
}

/// Stylised star: a cross with vertical arms of length `size`
///
/// Horizontal arms are one cell long, plus tips at `size` when it exceeds two.
pub fn star<S: Surface + ?Sized>(
    canvas: &mut PixelCanvas<'_, S>,
    x: f64,
    y: f64,
    size: f64,
    color: Color,
) {
    canvas.fill_cell(x, y - size, color);
    canvas.fill_cell(x - 1.0, y, color);
    canvas.fill_cell(x, y, color);
    canvas.fill_cell(x + 1.0, y, color);
    canvas.fill_cell(x, y + size, color);

    if size > 2.0 {
        canvas.fill_cell(x - size, y, color);
        canvas.fill_cell(x + size, y, color);
    }
}

/// Solid `width` by `height` block of cells starting at `(x, y)`
///
/// Cells are filled one at a time so fractional origins snap per cell.
pub fn block<S: Surface + ?Sized>(
    canvas: &mut PixelCanvas<'_, S>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
) {
    for i in units(0.0, width) {
        for j in units(0.0, height) {
            canvas.fill_cell(x + i, y + j, color);
        }
    }
}

/// Fill each `(dx, dy)` offset relative to `(x, y)`
pub fn pattern<S: Surface + ?Sized>(
    canvas: &mut PixelCanvas<'_, S>,
    x: f64,
    y: f64,
    offsets: &[(f64, f64)],
    color: Color,
) {
    for &(dx, dy) in offsets {
        canvas.fill_cell(x + dx, y + dy, color);
    }
}
