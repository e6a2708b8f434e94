//! Tests for ellipse, circle, star, block and pattern rasterizers

#[cfg(test)]
mod tests {
    use pixelbobo::palette::Color;
    use pixelbobo::raster::{CellGrid, PixelCanvas, Surface, shapes};

    const BACKGROUND: Color = Color::hex(0x000000);
    const PAINT: Color = Color::hex(0xFFFFFF);

    fn painted(grid: &CellGrid) -> usize {
        grid.cells().iter().filter(|&&cell| cell == PAINT).count()
    }

    #[derive(Default)]
    struct CellLog {
        cells: Vec<(f64, f64)>,
    }

    impl Surface for CellLog {
        fn dimensions(&self) -> (u32, u32) {
            (900, 900)
        }

        fn fill_rect(&mut self, x: f64, y: f64, _width: f64, _height: f64, _color: Color) {
            self.cells.push((x / 9.0, y / 9.0));
        }
    }

    /// Cells of a `width` by `height` ellipse at the origin, squares rounded separately
    #[allow(clippy::suboptimal_flops)]
    fn reference_ellipse(width: usize, height: usize) -> Vec<(f64, f64)> {
        let (w, h) = (width as f64, height as f64);
        let mut cells = Vec::new();
        for i in 0..width {
            for j in 0..height {
                let dx = (i as f64 - w / 2.0) / (w / 2.0);
                let dy = (j as f64 - h / 2.0) / (h / 2.0);
                if dx * dx + dy * dy <= 1.0 {
                    cells.push((i as f64, j as f64));
                }
            }
        }
        cells
    }

    fn drawn_ellipse(width: usize, height: usize) -> Vec<(f64, f64)> {
        let mut log = CellLog::default();
        shapes::ellipse(
            &mut PixelCanvas::new(&mut log),
            0.0,
            0.0,
            width as f64,
            height as f64,
            PAINT,
        );
        log.cells
    }

    // Tests a 4x4 ellipse keeps offsets within unit normalised distance
    // Verified by using a strict comparison
    #[test]
    fn test_small_ellipse() {
        let mut grid = CellGrid::new(BACKGROUND);
        shapes::ellipse(&mut PixelCanvas::new(&mut grid), 10.0, 10.0, 4.0, 4.0, PAINT);
        assert_eq!(painted(&grid), 11);
        assert_eq!(grid.cell(10, 10), Some(BACKGROUND));
        assert_eq!(grid.cell(10, 12), Some(PAINT));
        assert_eq!(grid.cell(12, 10), Some(PAINT));
    }

    // Tests every head, body, snout, foot and hat ellipse matches the reference cell for cell
    // Verified by fusing the squared-distance sum into mul_add
    #[test]
    fn test_ellipse_matches_reference_at_portrait_sizes() {
        let mut sizes = Vec::new();
        for width in 65..85 {
            for height in 55..70 {
                sizes.push((width, height));
            }
            sizes.push((width - 5, 48));
            sizes.push((width - 20, 16));
            sizes.push((width - 24, 12));
        }
        for width in 24..32 {
            for height in 16..21 {
                sizes.push((width, height));
            }
        }
        sizes.extend([(12, 10), (14, 12), (12, 15), (26, 13), (52, 52)]);

        for (width, height) in sizes {
            assert_eq!(
                drawn_ellipse(width, height),
                reference_ellipse(width, height),
                "ellipse {width}x{height} differs from the reference"
            );
        }
    }

    // Tests the 78x65 head keeps its boundary cells out
    // Verified by fusing the squared-distance sum into mul_add
    #[test]
    fn test_boundary_head_ellipse() {
        let mut grid = CellGrid::new(BACKGROUND);
        shapes::ellipse(&mut PixelCanvas::new(&mut grid), 10.0, 10.0, 78.0, 65.0, PAINT);
        assert_eq!(painted(&grid), 3965);
    }

    // Tests zero-sized ellipses draw nothing
    // Verified by removing the zero-size guard
    #[test]
    fn test_degenerate_ellipse() {
        let mut grid = CellGrid::new(BACKGROUND);
        let mut canvas = PixelCanvas::new(&mut grid);
        shapes::ellipse(&mut canvas, 10.0, 10.0, 0.0, 8.0, PAINT);
        shapes::ellipse(&mut canvas, 10.0, 10.0, 8.0, 0.0, PAINT);
        assert_eq!(grid.fill_count(), 0);
    }

    // Tests radius-one circles form a plus sign
    // Verified by using a square bound
    #[test]
    fn test_unit_circle() {
        let mut grid = CellGrid::new(BACKGROUND);
        shapes::circle(&mut PixelCanvas::new(&mut grid), 20.0, 20.0, 1.0, PAINT);
        assert_eq!(painted(&grid), 5);
        assert_eq!(grid.cell(19, 19), Some(BACKGROUND));
        assert_eq!(grid.cell(21, 20), Some(PAINT));
    }

    // Tests radius-two circles cover thirteen cells
    // Verified by shrinking the inclusive loop bound
    #[test]
    fn test_radius_two_circle() {
        let mut grid = CellGrid::new(BACKGROUND);
        shapes::circle(&mut PixelCanvas::new(&mut grid), 20.0, 20.0, 2.0, PAINT);
        assert_eq!(painted(&grid), 13);
    }

    // Tests star tips appear only when the size exceeds two
    // Verified by always drawing the horizontal tips
    #[test]
    fn test_star_sizes() {
        let mut small = CellGrid::new(BACKGROUND);
        shapes::star(&mut PixelCanvas::new(&mut small), 50.0, 50.0, 2.0, PAINT);
        assert_eq!(painted(&small), 5);
        assert_eq!(small.cell(50, 48), Some(PAINT));

        let mut large = CellGrid::new(BACKGROUND);
        shapes::star(&mut PixelCanvas::new(&mut large), 50.0, 50.0, 4.0, PAINT);
        assert_eq!(painted(&large), 7);
        assert_eq!(large.cell(46, 50), Some(PAINT));
        assert_eq!(large.cell(54, 50), Some(PAINT));
    }

    // Tests stars near the edge are clipped rather than wrapped
    // Verified by removing canvas clipping
    #[test]
    fn test_star_at_corner() {
        let mut grid = CellGrid::new(BACKGROUND);
        shapes::star(&mut PixelCanvas::new(&mut grid), 0.0, 0.0, 4.0, PAINT);
        assert_eq!(painted(&grid), 4);
        assert_eq!(grid.cell(99, 0), Some(BACKGROUND));
    }

    // Tests blocks and offset patterns
    // Verified by swapping pattern offsets
    #[test]
    fn test_block_and_pattern() {
        let mut grid = CellGrid::new(BACKGROUND);
        let mut canvas = PixelCanvas::new(&mut grid);
        shapes::block(&mut canvas, 5.0, 5.0, 3.0, 2.0, PAINT);
        shapes::pattern(&mut canvas, 30.0, 30.0, &[(0.0, 0.0), (2.0, 1.0)], PAINT);
        assert_eq!(painted(&grid), 8);
        assert_eq!(grid.cell(7, 6), Some(PAINT));
        assert_eq!(grid.cell(32, 31), Some(PAINT));
        assert_eq!(grid.cell(31, 32), Some(BACKGROUND));
    }
}
