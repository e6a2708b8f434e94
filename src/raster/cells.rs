//! Logical-resolution surface storing one colour per grid cell

use crate::io::configuration::{CELL_SIZE, GRID_SIZE};
use crate::palette::Color;
use crate::raster::surface::{Surface, covered_span};
use image::RgbaImage;
use ndarray::Array2;

/// 100x100 cell grid that presents itself as the full physical surface
///
/// Fills arrive in physical pixels and are sampled at cell centres, so an
/// aligned cell fill lands on exactly one cell. Useful when only the logical
/// sprite is wanted, and for inspecting what a portrait drew.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Array2<Color>,
    fills: usize,
}

impl CellGrid {
    /// Grid with every cell set to `background`
    pub fn new(background: Color) -> Self {
        Self {
            cells: Array2::from_elem((GRID_SIZE, GRID_SIZE), background),
            fills: 0,
        }
    }

    /// Colour of cell `(x, y)`, if inside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<Color> {
        self.cells.get([y, x]).copied()
    }

    /// Number of rectangle fills received
    pub const fn fill_count(&self) -> usize {
        self.fills
    }

    /// Row-major cell colours
    pub const fn cells(&self) -> &Array2<Color> {
        &self.cells
    }

    /// One image pixel per cell
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(GRID_SIZE as u32, GRID_SIZE as u32, |x, y| {
            self.cell(x as usize, y as usize)
                .unwrap_or_default()
                .into()
        })
    }
}

impl Surface for CellGrid {
    fn dimensions(&self) -> (u32, u32) {
        let side = GRID_SIZE as u32 * CELL_SIZE;
        (side, side)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.fills += 1;
        let scale = f64::from(CELL_SIZE);
        let limit = GRID_SIZE as u32;
        let columns = covered_span(x / scale, width / scale, limit);
        for cy in covered_span(y / scale, height / scale, limit) {
            for cx in columns.clone() {
                if let Some(cell) = self.cells.get_mut([cy as usize, cx as usize]) {
                    *cell = color.blend_over(*cell);
                }
            }
        }
    }
}
