//! In-memory RGB raster backed by a Cairo image surface.

use super::types::{CanvasError, PixelFormat, Rgb};
use crate::draw::{self, Color};
use cairo::{Context, ImageSurface};

/// A fixed-size grid of RGB pixels.
///
/// Width, height and format are set by [`Raster::new`] and never change.
/// Drawing goes through [`Raster::draw`], which lends a Cairo context for
/// the duration of one closure; reading pixels back requires that no context
/// is alive, which the closure scoping guarantees.
pub struct Raster {
    surface: ImageSurface,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish()
    }
}

impl Raster {
    /// Allocates a raster and fills it with `background`.
    ///
    /// # Errors
    /// [`CanvasError::ResourceExhaustion`] if the dimensions are beyond what
    /// Cairo accepts or the pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, CanvasError> {
        let format = PixelFormat::Rgb24;

        let too_large = || {
            CanvasError::ResourceExhaustion(format!(
                "{}x{} exceeds the maximum surface size",
                width, height
            ))
        };
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;

        let surface = ImageSurface::create(format.cairo_format(), w, h)
            .map_err(|e| CanvasError::allocation(e, width, height))?;

        log::info!("Allocated {}x{} RGB raster", width, height);

        let mut raster = Self {
            surface,
            width,
            height,
            format,
        };
        raster.draw(|ctx| draw::fill_background(ctx, background))?;
        Ok(raster)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Runs `f` with a drawing context bound to this raster.
    ///
    /// The context is dropped before this returns and pending drawing is
    /// flushed to the pixel buffer.
    pub fn draw<T, F>(&mut self, f: F) -> Result<T, CanvasError>
    where
        F: FnOnce(&Context) -> Result<T, cairo::Error>,
    {
        let result = {
            let ctx = Context::new(&self.surface)?;
            f(&ctx)?
        };
        self.surface.flush();
        Ok(result)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&mut self, x: u32, y: u32) -> Result<Option<Rgb>, CanvasError> {
        if x >= self.width || y >= self.height {
            return Ok(None);
        }
        let stride = self.surface.stride() as usize;
        let data = self.surface_data()?;
        let offset = y as usize * stride + x as usize * 4;
        Ok(Some(decode_pixel(&data[offset..offset + 4])))
    }

    /// Returns every pixel in row-major order.
    pub fn pixels(&mut self) -> Result<Vec<Rgb>, CanvasError> {
        let (width, height) = (self.width as usize, self.height as usize);
        let stride = self.surface.stride() as usize;
        let data = self.surface_data()?;

        let mut pixels = Vec::with_capacity(width * height);
        for row in data.chunks(stride).take(height) {
            pixels.extend(row[..width * 4].chunks_exact(4).map(decode_pixel));
        }
        Ok(pixels)
    }

    /// Encodes the raster as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut buffer = Vec::new();
        self.surface
            .write_to_png(&mut buffer)
            .map_err(|e| CanvasError::Encode(e.to_string()))?;
        log::debug!("Encoded raster as PNG ({} bytes)", buffer.len());
        Ok(buffer)
    }

    fn surface_data(&mut self) -> Result<cairo::ImageSurfaceData<'_>, CanvasError> {
        self.surface
            .data()
            .map_err(|e| CanvasError::Render(format!("pixel buffer is busy: {}", e)))
    }
}

/// Decodes one Cairo RGB24 pixel (native-endian `0x00RRGGBB`).
fn decode_pixel(bytes: &[u8]) -> Rgb {
    let word = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    Rgb {
        r: (word >> 16) as u8,
        g: (word >> 8) as u8,
        b: word as u8,
    }
}
