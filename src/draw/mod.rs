//! Rendering primitives (Cairo + Pango).
//!
//! - [`Color`]: RGBA color with named constants
//! - [`FontDescriptor`]: font family, weight and style for text runs
//! - [`fill_background`] and [`render_text`]: the two drawing operations a
//!   canvas needs

pub mod color;
pub mod font;
pub mod render;

pub use color::Color;
pub use font::FontDescriptor;
pub use render::{fill_background, render_text};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
