//! Tests for PNG export of surfaces and cell sprites

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use pixelbobo::PortraitError;
    use pixelbobo::io::image::{export_cells_png, export_png};
    use pixelbobo::palette::named;
    use pixelbobo::raster::{CellGrid, Surface};
    use tempfile::TempDir;

    // Tests export creates missing directories and writes a readable PNG
    // Verified by removing directory creation
    #[test]
    fn test_export_creates_directories() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("cards").join("card.png");

        let mut image = RgbaImage::new(4, 3);
        image.put_pixel(1, 2, Rgba([10, 20, 30, 255]));
        export_png(&image, &path).expect("Failed to export PNG");

        let loaded = image::open(&path).expect("Failed to read PNG").to_rgba8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(*loaded.get_pixel(1, 2), Rgba([10, 20, 30, 255]));
    }

    // Tests directory failures surface as file system errors
    // Verified by ignoring create_dir_all failures
    #[test]
    fn test_export_directory_failure() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").expect("Failed to write blocker");

        let result = export_png(&RgbaImage::new(2, 2), &blocker.join("card.png"));
        assert!(matches!(result, Err(PortraitError::FileSystem { .. })));
    }

    // Tests encoder failures surface as export errors
    // Verified by mapping save failures to file system errors
    #[test]
    fn test_export_target_is_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let result = export_png(&RgbaImage::new(2, 2), dir.path());
        assert!(matches!(result, Err(PortraitError::ImageExport { .. })));
    }

    // Tests cell sprites export at logical resolution
    // Verified by exporting the upscaled image instead
    #[test]
    fn test_export_cells() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("sprite.png");

        let mut grid = CellGrid::new(named::CLEAR);
        grid.fill_rect(0.0, 0.0, 9.0, 9.0, named::GOLD);
        export_cells_png(&grid, &path).expect("Failed to export sprite");

        let loaded = image::open(&path).expect("Failed to read PNG").to_rgba8();
        assert_eq!(loaded.dimensions(), (100, 100));
        assert_eq!(loaded.get_pixel(0, 0).0, named::GOLD.to_array());
        assert_eq!(loaded.get_pixel(1, 0).0, named::CLEAR.to_array());
    }
}
