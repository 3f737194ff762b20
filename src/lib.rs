//! Draws a line of text onto a blank raster and opens it in an image viewer.
//!
//! [`run`] is the whole program: a 300x300 white RGB canvas, "Hello from PIL"
//! in black at (10, 10), handed to the platform's default image viewer.
//! [`create_image`] stops before the hand-off so the raster can be inspected.

pub mod canvas;
pub mod config;
pub mod demo;
pub mod draw;
pub mod util;
pub mod viewer;

pub use canvas::{CanvasError, CanvasSpec, PixelFormat, Raster, Rgb, create_image, render_scene};
pub use config::Config;
pub use demo::{run, run_with};
