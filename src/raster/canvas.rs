//! Grid-cell adapter over a physical surface

use crate::io::configuration::{CELL_SIZE, GRID_SIZE};
use crate::palette::Color;
use crate::raster::surface::Surface;

/// Whether a logical point lies on the 100x100 grid
pub fn in_grid(x: f64, y: f64) -> bool {
    let limit = GRID_SIZE as f64;
    (0.0..limit).contains(&x) && (0.0..limit).contains(&y)
}

/// Fills logical cells by magnifying them onto the wrapped surface
///
/// Cell rectangles are `(x * cell, y * cell, cell, cell)`. Fractional cell
/// coordinates pass straight through. Rectangles are intersected with the
/// surface before they reach it, so nothing is ever requested at a negative
/// offset or past the far edge.
pub struct PixelCanvas<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    cell_size: f64,
    width: f64,
    height: f64,
}

impl<'a, S: Surface + ?Sized> PixelCanvas<'a, S> {
    /// Wrap a surface with the standard cell size
    pub fn new(surface: &'a mut S) -> Self {
        let (width, height) = surface.dimensions();
        Self {
            surface,
            cell_size: f64::from(CELL_SIZE),
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Paint the whole surface
    pub fn clear(&mut self, color: Color) {
        self.surface
            .fill_rect(0.0, 0.0, self.width, self.height, color);
    }

    /// Fill one logical cell
    pub fn fill_cell(&mut self, x: f64, y: f64, color: Color) {
        self.fill_cells(x, y, 1.0, 1.0, color);
    }

    /// Fill a block of `columns` by `rows` logical cells
    pub fn fill_cells(&mut self, x: f64, y: f64, columns: f64, rows: f64, color: Color) {
        let left = (x * self.cell_size).max(0.0);
        let top = (y * self.cell_size).max(0.0);
        let right = ((x + columns) * self.cell_size).min(self.width);
        let bottom = ((y + rows) * self.cell_size).min(self.height);
        if right > left && bottom > top {
            self.surface
                .fill_rect(left, top, right - left, bottom - top, color);
        }
    }

    /// Forward the smoothing switch to the surface
    pub fn set_smoothing(&mut self, enabled: bool) {
        self.surface.set_smoothing(enabled);
    }
}
