//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Whether a named color is one we recognize. RGB arrays always are.
    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ORANGE, WHITE};

    #[test]
    fn named_colors_resolve_case_insensitively() {
        assert_eq!(ColorSpec::Name("White".to_string()).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("ORANGE".to_string()).to_color(), ORANGE);
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        let spec = ColorSpec::Name("chartreuse".to_string());
        assert!(!spec.is_known());
        assert_eq!(spec.to_color(), BLACK);
    }

    #[test]
    fn rgb_array_converts_to_unit_range() {
        let color = ColorSpec::Rgb([255, 0, 51]).to_color();
        assert_eq!(color.to_rgb8(), [255, 0, 51]);
    }

    #[test]
    fn deserializes_both_forms() {
        #[derive(Deserialize)]
        struct Holder {
            a: ColorSpec,
            b: ColorSpec,
        }

        let holder: Holder = toml::from_str("a = \"black\"\nb = [1, 2, 3]").unwrap();
        assert_eq!(holder.a, ColorSpec::Name("black".to_string()));
        assert_eq!(holder.b, ColorSpec::Rgb([1, 2, 3]));
    }
}
