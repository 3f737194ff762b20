//! Handing a finished raster to something that can display or store it.
//!
//! The [`Viewer`] trait is the seam between the canvas and the host: the
//! default [`SystemViewer`] opens the platform image viewer, tests swap in a
//! recording implementation.

pub mod file;
mod system;

pub use file::{FileSaveConfig, save_png, save_to_directory};
pub use system::{SystemViewer, display_available};

use crate::canvas::CanvasError;

/// Presents an encoded PNG to the user.
pub trait Viewer {
    fn show(&self, png: &[u8]) -> Result<(), CanvasError>;
}
