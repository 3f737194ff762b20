//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::canvas::scene::{DEMO_FONT_SIZE, DEMO_HEIGHT, DEMO_ORIGIN, DEMO_TEXT, DEMO_WIDTH};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size and fill.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background fill - a named color or an RGB array like `[255, 255, 255]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// The text run drawn onto the canvas.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Text to render (single line)
    #[serde(default = "default_content")]
    pub content: String,

    /// Left edge of the text box in pixels
    #[serde(default = "default_x")]
    pub x: i32,

    /// Top edge of the text box in pixels
    #[serde(default = "default_y")]
    pub y: i32,

    /// Ink color - a named color or an RGB array
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,

    /// Font family name (e.g., "Sans", "Monospace")
    /// Pango substitutes a similar face if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points (valid range: 4.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font weight (e.g., "normal", "bold", "light", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            x: default_x(),
            y: default_y(),
            color: default_text_color(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// How the canvas is presented and where `--save` writes.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ViewerConfig {
    /// Viewer command (program and arguments); the image path is appended.
    /// Leave empty to use the platform opener (xdg-open, open, start)
    #[serde(default)]
    pub command: String,

    /// Directory for `--save` without an explicit path (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template for saved images (chrono format specifiers, no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    DEMO_WIDTH
}

fn default_height() -> u32 {
    DEMO_HEIGHT
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_content() -> String {
    DEMO_TEXT.to_string()
}

fn default_x() -> i32 {
    DEMO_ORIGIN.0
}

fn default_y() -> i32 {
    DEMO_ORIGIN.1
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    DEMO_FONT_SIZE
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_save_directory() -> String {
    "~/Pictures/canvas-demo".to_string()
}

fn default_filename_template() -> String {
    "canvas_%Y-%m-%d_%H%M%S".to_string()
}
