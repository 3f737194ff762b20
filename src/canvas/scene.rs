//! Scene description and the straight-line rendering sequence.

use super::raster::Raster;
use super::types::CanvasError;
use crate::draw::{self, BLACK, Color, FontDescriptor, WHITE};

pub const DEMO_WIDTH: u32 = 300;
pub const DEMO_HEIGHT: u32 = 300;
pub const DEMO_TEXT: &str = "Hello from PIL";
pub const DEMO_ORIGIN: (i32, i32) = (10, 10);
pub const DEMO_FONT_SIZE: f64 = 11.0;

/// A run of text placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub content: String,
    /// Left edge of the text box.
    pub x: i32,
    /// Top edge of the text box.
    pub y: i32,
    pub color: Color,
    /// Font size in points.
    pub size: f64,
    pub font: FontDescriptor,
}

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            content: DEMO_TEXT.to_string(),
            x: DEMO_ORIGIN.0,
            y: DEMO_ORIGIN.1,
            color: BLACK,
            size: DEMO_FONT_SIZE,
            font: FontDescriptor::default(),
        }
    }
}

/// Everything needed to produce a canvas: size, background and one text run.
///
/// The default is the demo scene: 300x300, white, "Hello from PIL" in black
/// at (10, 10).
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub text: TextSpec,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: DEMO_WIDTH,
            height: DEMO_HEIGHT,
            background: WHITE,
            text: TextSpec::default(),
        }
    }
}

/// Allocates a raster for `spec` and draws its text onto it.
pub fn render_scene(spec: &CanvasSpec) -> Result<Raster, CanvasError> {
    let mut raster = Raster::new(spec.width, spec.height, spec.background)?;

    let text = &spec.text;
    let (text_w, text_h) = raster.draw(|ctx| {
        draw::render_text(
            ctx,
            text.x,
            text.y,
            &text.content,
            text.color,
            text.size,
            &text.font,
        )
    })?;

    log::info!(
        "Rendered {:?} at ({}, {}), {}x{} px",
        text.content,
        text.x,
        text.y,
        text_w,
        text_h
    );
    Ok(raster)
}

/// Builds the demo raster without presenting it.
pub fn create_image() -> Result<Raster, CanvasError> {
    render_scene(&CanvasSpec::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::types::{PixelFormat, Rgb};

    const WHITE_PX: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn demo_scene_dimensions_and_format() {
        let raster = create_image().unwrap();
        assert_eq!(raster.width(), 300);
        assert_eq!(raster.height(), 300);
        assert_eq!(raster.format(), PixelFormat::Rgb24);
    }

    #[test]
    fn demo_scene_corners_stay_white() {
        let mut raster = create_image().unwrap();
        assert_eq!(raster.pixel(0, 0).unwrap(), Some(WHITE_PX));
        assert_eq!(raster.pixel(299, 0).unwrap(), Some(WHITE_PX));
        assert_eq!(raster.pixel(0, 299).unwrap(), Some(WHITE_PX));
        assert_eq!(raster.pixel(299, 299).unwrap(), Some(WHITE_PX));
    }

    #[test]
    fn empty_text_leaves_canvas_blank() {
        let spec = CanvasSpec {
            text: TextSpec {
                content: String::new(),
                ..TextSpec::default()
            },
            ..CanvasSpec::default()
        };
        let mut raster = render_scene(&spec).unwrap();
        assert!(raster.pixels().unwrap().iter().all(|p| *p == WHITE_PX));
    }

    #[test]
    fn text_outside_the_canvas_is_clipped() {
        let spec = CanvasSpec {
            width: 20,
            height: 20,
            text: TextSpec {
                x: 500,
                y: 500,
                ..TextSpec::default()
            },
            ..CanvasSpec::default()
        };
        let mut raster = render_scene(&spec).unwrap();
        assert!(raster.pixels().unwrap().iter().all(|p| *p == WHITE_PX));
    }
}
