//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for all editor actions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,
    Cancel,

    // History
    Undo,
    Redo,

    // Canvas actions
    ClearCanvas,
    Export,

    // Tool selection
    SelectPen,
    SelectEraser,
    SelectLine,
    SelectRect,
    SelectCircle,
    SelectFill,
    ToggleFillShapes,

    // Stroke width controls
    IncreaseStrokeWidth,
    DecreaseStrokeWidth,

    // Color presets
    SetColorBlack,
    SetColorWhite,
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
    SetColorOrange,
    SetColorPink,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// The key is stored lowercased so "Ctrl+Z" and "ctrl+z" are the same binding.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into trailing empty parts; the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() || key == "+" {
            "+".to_string()
        } else {
            key.to_lowercase()
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// select_fill = ["F"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_export")]
    pub export: Vec<String>,

    #[serde(default = "default_select_pen")]
    pub select_pen: Vec<String>,

    #[serde(default = "default_select_eraser")]
    pub select_eraser: Vec<String>,

    #[serde(default = "default_select_line")]
    pub select_line: Vec<String>,

    #[serde(default = "default_select_rect")]
    pub select_rect: Vec<String>,

    #[serde(default = "default_select_circle")]
    pub select_circle: Vec<String>,

    #[serde(default = "default_select_fill")]
    pub select_fill: Vec<String>,

    #[serde(default = "default_toggle_fill_shapes")]
    pub toggle_fill_shapes: Vec<String>,

    #[serde(default = "default_increase_stroke_width")]
    pub increase_stroke_width: Vec<String>,

    #[serde(default = "default_decrease_stroke_width")]
    pub decrease_stroke_width: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,

    #[serde(default = "default_set_color_white")]
    pub set_color_white: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            cancel: default_cancel(),
            undo: default_undo(),
            redo: default_redo(),
            clear_canvas: default_clear_canvas(),
            export: default_export(),
            select_pen: default_select_pen(),
            select_eraser: default_select_eraser(),
            select_line: default_select_line(),
            select_rect: default_select_rect(),
            select_circle: default_select_circle(),
            select_fill: default_select_fill(),
            toggle_fill_shapes: default_toggle_fill_shapes(),
            increase_stroke_width: default_increase_stroke_width(),
            decrease_stroke_width: default_decrease_stroke_width(),
            set_color_black: default_set_color_black(),
            set_color_white: default_set_color_white(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_yellow: default_set_color_yellow(),
            set_color_orange: default_set_color_orange(),
            set_color_pink: default_set_color_pink(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let groups: [(&[String], Action); 23] = [
            (self.exit.as_slice(), Action::Exit),
            (self.cancel.as_slice(), Action::Cancel),
            (self.undo.as_slice(), Action::Undo),
            (self.redo.as_slice(), Action::Redo),
            (self.clear_canvas.as_slice(), Action::ClearCanvas),
            (self.export.as_slice(), Action::Export),
            (self.select_pen.as_slice(), Action::SelectPen),
            (self.select_eraser.as_slice(), Action::SelectEraser),
            (self.select_line.as_slice(), Action::SelectLine),
            (self.select_rect.as_slice(), Action::SelectRect),
            (self.select_circle.as_slice(), Action::SelectCircle),
            (self.select_fill.as_slice(), Action::SelectFill),
            (self.toggle_fill_shapes.as_slice(), Action::ToggleFillShapes),
            (self.increase_stroke_width.as_slice(), Action::IncreaseStrokeWidth),
            (self.decrease_stroke_width.as_slice(), Action::DecreaseStrokeWidth),
            (self.set_color_black.as_slice(), Action::SetColorBlack),
            (self.set_color_white.as_slice(), Action::SetColorWhite),
            (self.set_color_red.as_slice(), Action::SetColorRed),
            (self.set_color_green.as_slice(), Action::SetColorGreen),
            (self.set_color_blue.as_slice(), Action::SetColorBlue),
            (self.set_color_yellow.as_slice(), Action::SetColorYellow),
            (self.set_color_orange.as_slice(), Action::SetColorOrange),
            (self.set_color_pink.as_slice(), Action::SetColorPink),
        ];

        let mut map = HashMap::new();
        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Ctrl+Delete".to_string()]
}

fn default_export() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_select_pen() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_select_eraser() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_select_line() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_select_rect() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_select_circle() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_select_fill() -> Vec<String> {
    vec!["F".to_string()]
}

fn default_toggle_fill_shapes() -> Vec<String> {
    vec!["Shift+F".to_string()]
}

fn default_increase_stroke_width() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_stroke_width() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_set_color_white() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["4".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["5".to_string()]
}

fn default_set_color_yellow() -> Vec<String> {
    vec!["6".to_string()]
}

fn default_set_color_orange() -> Vec<String> {
    vec!["7".to_string()]
}

fn default_set_color_pink() -> Vec<String> {
    vec!["8".to_string()]
}
