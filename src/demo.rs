//! Entry points: build the canvas, then hand it to a viewer.

use crate::canvas::{CanvasError, CanvasSpec, Raster, render_scene};
use crate::viewer::{SystemViewer, Viewer};

/// Draws the demo canvas and opens it in the system image viewer.
///
/// 300x300 white RGB canvas with "Hello from PIL" in black at (10, 10).
///
/// # Errors
/// - [`CanvasError::ResourceExhaustion`] if the raster cannot be allocated
/// - [`CanvasError::NoViewerAvailable`] if the host cannot display images
pub fn run() -> Result<(), CanvasError> {
    run_with(&CanvasSpec::default(), &SystemViewer::default())
}

/// Renders `spec` and passes the result to `viewer`.
pub fn run_with(spec: &CanvasSpec, viewer: &dyn Viewer) -> Result<(), CanvasError> {
    let raster = render_scene(spec)?;
    show(&raster, viewer)
}

/// Encodes `raster` as PNG and passes it to `viewer`.
pub fn show(raster: &Raster, viewer: &dyn Viewer) -> Result<(), CanvasError> {
    let png = raster.to_png()?;
    viewer.show(&png)
}
