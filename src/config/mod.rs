//! Configuration file support for canvas-demo.
//!
//! Settings are read from `~/.config/canvas-demo/config.toml`. Every field has
//! a default matching the built-in demo scene, so a missing or empty file
//! reproduces it exactly.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, TextConfig, ViewerConfig};

use crate::canvas::{CanvasSpec, TextSpec};
use crate::draw::FontDescriptor;
use crate::viewer::file::{expand_tilde, is_valid_template};
use crate::viewer::{FileSaveConfig, SystemViewer};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration, deserialized from TOML.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 300
/// height = 300
/// background = "white"
///
/// [text]
/// content = "Hello from PIL"
/// x = 10
/// y = 10
/// color = "black"
///
/// [viewer]
/// command = ""
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Text content, placement and font
    #[serde(default)]
    pub text: TextConfig,

    /// Viewer command and save location
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Validates and clamps values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `text.font_size`: 4.0 - 200.0
    ///
    /// Unknown colors, weights and styles are replaced by their defaults.
    fn validate_and_clamp(&mut self) {
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        if !(4.0..=200.0).contains(&self.text.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 4.0-200.0 range",
                self.text.font_size
            );
            self.text.font_size = if self.text.font_size.is_nan() {
                TextConfig::default().font_size
            } else {
                self.text.font_size.clamp(4.0, 200.0)
            };
        }

        if !self.canvas.background.is_known() {
            log::warn!(
                "Unknown background color {:?}, falling back to 'white'",
                self.canvas.background
            );
            self.canvas.background = CanvasConfig::default().background;
        }

        if !self.text.color.is_known() {
            log::warn!(
                "Unknown text color {:?}, falling back to 'black'",
                self.text.color
            );
            self.text.color = TextConfig::default().color;
        }

        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        if self.viewer.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, using the default");
            self.viewer.filename_template = ViewerConfig::default().filename_template;
        } else if !is_valid_template(&self.viewer.filename_template) {
            log::warn!(
                "Invalid filename_template '{}', using the default",
                self.viewer.filename_template
            );
            self.viewer.filename_template = ViewerConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("canvas-demo");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the config file, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the config at `path`, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config and writes it to the default config path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the config to TOML at `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the default config path.
    ///
    /// # Errors
    /// Fails if a config file already exists there or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// The scene described by this config.
    pub fn canvas_spec(&self) -> CanvasSpec {
        let text = &self.text;
        CanvasSpec {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color(),
            text: TextSpec {
                content: text.content.clone(),
                x: text.x,
                y: text.y,
                color: text.color.to_color(),
                size: text.font_size,
                font: FontDescriptor::new(
                    text.font_family.clone(),
                    text.font_weight.clone(),
                    text.font_style.clone(),
                ),
            },
        }
    }

    /// Where `--save` writes when no path is given.
    pub fn file_save_config(&self) -> FileSaveConfig {
        FileSaveConfig {
            save_directory: expand_tilde(&self.viewer.save_directory),
            filename_template: self.viewer.filename_template.clone(),
        }
    }

    pub fn system_viewer(&self) -> SystemViewer {
        SystemViewer::with_command(Some(self.viewer.command.clone()))
    }
}

/// Example config shipped with the binary; its values equal the defaults.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};
    use tempfile::TempDir;

    fn parse(toml_str: &str) -> Config {
        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();
        config
    }

    #[test]
    fn empty_config_matches_demo_scene() {
        assert_eq!(parse("").canvas_spec(), CanvasSpec::default());
    }

    #[test]
    fn example_config_matches_defaults() {
        assert_eq!(parse(EXAMPLE_CONFIG).canvas_spec(), CanvasSpec::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse(
            r#"
            [canvas]
            width = 0
            height = 100000

            [text]
            font_size = 1000.0
            "#,
        );
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.text.font_size, 200.0);
    }

    #[test]
    fn invalid_names_fall_back() {
        let config = parse(
            r#"
            [canvas]
            background = "plaid"

            [text]
            color = "invisible"
            font_weight = "extra-chunky"
            font_style = "wobbly"
            "#,
        );
        assert_eq!(config.canvas.background.to_color(), WHITE);
        assert_eq!(config.text.color.to_color(), BLACK);
        assert_eq!(config.text.font_weight, "normal");
        assert_eq!(config.text.font_style, "normal");
    }

    #[test]
    fn unknown_template_specifier_falls_back() {
        let config = parse("[viewer]\nfilename_template = \"canvas_%Q\"");
        assert_eq!(config.viewer.filename_template, "canvas_%Y-%m-%d_%H%M%S");

        let config = parse("[viewer]\nfilename_template = \"shot_%H%M\"");
        assert_eq!(config.viewer.filename_template, "shot_%H%M");
    }

    #[test]
    fn numeric_font_weight_is_accepted() {
        let config = parse("[text]\nfont_weight = \"700\"");
        assert_eq!(config.text.font_weight, "700");
    }

    #[test]
    fn custom_text_flows_into_canvas_spec() {
        let config = parse(
            r#"
            [text]
            content = "Other"
            x = 3
            y = 4
            color = [255, 0, 0]
            font_family = "Monospace"
            font_style = "italic"
            "#,
        );
        let spec = config.canvas_spec();
        assert_eq!(spec.text.content, "Other");
        assert_eq!((spec.text.x, spec.text.y), (3, 4));
        assert_eq!(spec.text.color.to_rgb8(), [255, 0, 0]);
        assert_eq!(spec.text.font.to_pango_string(spec.text.size), "Monospace Italic 11");
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn saved_config_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let mut config = Config::default();
        config.canvas.background = ColorSpec::Rgb([10, 20, 30]);
        config.text.content = "Saved text".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.background, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(loaded.text.content, "Saved text");
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load_from(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn file_save_config_expands_tilde() {
        let config = Config::default();
        let save = config.file_save_config();
        assert!(!save.save_directory.to_string_lossy().starts_with('~'));
        assert_eq!(save.filename_template, "canvas_%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["canvas", "text", "viewer"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
