//! Data types shared by the raster and the viewer hand-off.

use crate::draw::Color;
use thiserror::Error;

/// Pixel layout of a [`Raster`](super::Raster).
///
/// Only one format exists: 8 bits per channel RGB with no alpha. Cairo keeps
/// each pixel in a 32-bit word with the top byte unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb24,
}

impl PixelFormat {
    /// Bits of color information per pixel.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgb24 => 24,
        }
    }

    pub(crate) fn cairo_format(self) -> cairo::Format {
        match self {
            PixelFormat::Rgb24 => cairo::Format::Rgb24,
        }
    }
}

/// A single pixel read back from a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_rgb8();
        Self { r, g, b }
    }
}

/// Errors that can occur while producing or presenting a raster.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The raster could not be allocated.
    #[error("Failed to allocate raster: {0}")]
    ResourceExhaustion(String),

    /// The host has no way to present an image.
    #[error("No image viewer available: {0}")]
    NoViewerAvailable(String),

    #[error("Drawing failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

impl CanvasError {
    /// Maps a Cairo error raised while creating a surface.
    pub(crate) fn allocation(err: cairo::Error, width: u32, height: u32) -> Self {
        CanvasError::ResourceExhaustion(format!("{}x{} surface: {}", width, height, err))
    }
}

impl From<cairo::Error> for CanvasError {
    fn from(err: cairo::Error) -> Self {
        match err {
            cairo::Error::NoMemory => CanvasError::ResourceExhaustion(err.to_string()),
            other => CanvasError::Render(other.to_string()),
        }
    }
}
