//! Configuration file support for rasterpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rasterpad/config.toml`. Settings include canvas size, drawing
//! defaults, history depth, export location, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge.
pub const MAX_CANVAS_EDGE: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1000
/// height = 700
///
/// [drawing]
/// default_color = "#111"
/// default_tool = "pen"
/// default_stroke_width = 6
///
/// [history]
/// max_undo = 30
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and resize limits
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (color, tool, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Export location and naming
    #[serde(default)]
    pub export: ExportConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.min_size`: 1 - 1000
    /// - `canvas.width` / `canvas.height`: min_size - 16384
    /// - `drawing.default_stroke_width`: 1 - 100
    /// - `history.max_undo`: 1 - 500
    pub fn validate_and_clamp(&mut self) {
        if !(1..=1000).contains(&self.canvas.min_size) {
            log::warn!(
                "Invalid canvas min_size {}, clamping to 1-1000 range",
                self.canvas.min_size
            );
            self.canvas.min_size = self.canvas.min_size.clamp(1, 1000);
        }

        let min = self.canvas.min_size;
        if !(min..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to {}-{} range",
                self.canvas.width,
                min,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(min, MAX_CANVAS_EDGE);
        }

        if !(min..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to {}-{} range",
                self.canvas.height,
                min,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(min, MAX_CANVAS_EDGE);
        }

        if !(1..=100).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {}, clamping to 1-100 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width = self.drawing.default_stroke_width.clamp(1, 100);
        }

        if !(1..=500).contains(&self.history.max_undo) {
            log::warn!(
                "Invalid history max_undo {}, clamping to 1-500 range",
                self.history.max_undo
            );
            self.history.max_undo = self.history.max_undo.clamp(1, 500);
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, falling back to default");
            self.export.filename_template = ExportConfig::default().filename_template;
        } else if crate::export::generate_filename(&self.export.filename_template).is_err() {
            log::warn!(
                "Invalid export filename_template '{}', falling back to default",
                self.export.filename_template
            );
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rasterpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rasterpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Saves the current configuration to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.width, 1000);
        assert_eq!(config.canvas.height, 700);
        assert_eq!(config.drawing.default_stroke_width, 6);
        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.history.max_undo, 30);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r##"
            [drawing]
            default_tool = "fill"
            default_color = [10, 20, 30]

            [keybindings]
            undo = ["Ctrl+U"]
            "##,
        )
        .unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Fill);
        assert_eq!(config.drawing.default_stroke_width, 6);
        assert_eq!(config.keybindings.undo, vec!["Ctrl+U".to_string()]);
        assert_eq!(config.keybindings.redo.len(), 2);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.width = 20;
        config.canvas.height = 100_000;
        config.drawing.default_stroke_width = 0;
        config.history.max_undo = 0;
        config.export.filename_template = "  ".to_string();

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 100);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
        assert_eq!(config.drawing.default_stroke_width, 1);
        assert_eq!(config.history.max_undo, 1);
        assert_eq!(
            config.export.filename_template,
            ExportConfig::default().filename_template
        );
    }

    #[test]
    fn validate_replaces_bad_filename_template() {
        let mut config = Config::default();
        config.export.filename_template = "drawing_%Q".to_string();
        config.validate_and_clamp();
        assert_eq!(
            config.export.filename_template,
            ExportConfig::default().filename_template
        );
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config.canvas.min_size, 100);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.canvas.width = 640;
        config.drawing.fill_shapes = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.width, 640);
        assert!(loaded.drawing.fill_shapes);
    }

    #[test]
    fn example_config_parses_and_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        Config::create_default_file(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.history.max_undo, 30);
        assert!(loaded.keybindings.build_action_map().is_ok());

        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn json_schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        for section in ["canvas", "drawing", "history", "export", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
