//! Drawing surfaces, the grid-cell adapter and shape rasterizers
//!
//! This module contains:
//! - The [`Surface`] trait and its image-backed implementation
//! - A logical-resolution surface backed by an ndarray grid
//! - The pixel canvas adapter that magnifies cells onto a surface
//! - Ellipse, circle and star primitives

/// Grid-cell adapter
pub mod canvas;
/// Logical-resolution cell grid surface
pub mod cells;
/// Shape rasterizers
pub mod shapes;
/// Surface trait and image implementation
pub mod surface;

pub use canvas::PixelCanvas;
pub use cells::CellGrid;
pub use surface::Surface;
