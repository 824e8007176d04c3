//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas dimensions.
///
/// Controls the size of the blank canvas created at startup and the smallest
/// edge accepted when resizing.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Initial canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Smallest width or height a resize request is clamped up to (valid range: 1 - 1000)
    #[serde(default = "default_min_size")]
    pub min_size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_size: default_min_size(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the initial tool state. Users can change these values at runtime
/// using keybindings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default color - a named color, a hex string like "#111", or an RGB array
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Tool selected at startup (pen, eraser, line, rect, circle, fill)
    #[serde(default)]
    pub default_tool: Tool,

    /// Default stroke width in pixels (valid range: 1 - 100)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: u32,

    /// Fill rectangles and circles with the active color
    #[serde(default)]
    pub fill_shapes: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_tool: Tool::default(),
            default_stroke_width: default_stroke_width(),
            fill_shapes: false,
        }
    }
}

/// Undo history settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Number of undo steps kept (valid range: 1 - 500)
    /// Each step holds a full copy of the canvas, so memory grows with canvas size.
    #[serde(default = "default_max_undo")]
    pub max_undo: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_undo: default_max_undo(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exports are written to when no explicit path is given (supports ~)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template (chrono format specifiers, extension is added automatically)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    700
}

fn default_min_size() -> u32 {
    100
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#111".to_string())
}

fn default_stroke_width() -> u32 {
    6
}

fn default_max_undo() -> usize {
    crate::draw::DEFAULT_MAX_UNDO
}

fn default_export_directory() -> String {
    "~/Pictures/Rasterpad".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
