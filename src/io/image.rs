//! PNG export for finished portraits

use crate::io::error::{PortraitError, Result};
use crate::raster::CellGrid;
use image::RgbaImage;
use std::path::Path;

/// Save a rendered surface as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `output_path`
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PortraitError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PortraitError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Save the logical 100x100 sprite of a cell grid as PNG
///
/// # Errors
///
/// Same conditions as [`export_png`]
pub fn export_cells_png(grid: &CellGrid, output_path: &Path) -> Result<()> {
    export_png(&grid.to_image(), output_path)
}
