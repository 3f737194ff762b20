//! The raster and the scene drawn onto it.
//!
//! - [`Raster`]: fixed-size RGB pixel buffer with scoped drawing access
//! - [`CanvasSpec`]: background, size and text run for one canvas
//! - [`render_scene`] / [`create_image`]: allocate, fill, draw text

pub mod raster;
pub mod scene;
pub mod types;

pub use raster::Raster;
pub use scene::{CanvasSpec, TextSpec, create_image, render_scene};
pub use types::{CanvasError, PixelFormat, Rgb};
