//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines what a left-button drag does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Pen,
    /// Freehand erasing to full transparency
    Eraser,
    /// Straight line between press and release points
    Line,
    /// Rectangle between two opposite corners
    Rect,
    /// Circle centered on the press point
    Circle,
    /// Flood fill at the press point
    Fill,
}

/// When a tool touches the buffer during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Every pointer move is composited straight into the buffer.
    Immediate,
    /// Moves render a preview over the restored pre-image; release commits.
    Deferred,
    /// All work happens on press; move and release are ignored.
    OneShot,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Line,
        Tool::Rect,
        Tool::Circle,
        Tool::Fill,
    ];

    pub fn mode(self) -> ToolMode {
        match self {
            Tool::Pen | Tool::Eraser => ToolMode::Immediate,
            Tool::Line | Tool::Rect | Tool::Circle => ToolMode::Deferred,
            Tool::Fill => ToolMode::OneShot,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Rect => "rect",
            Tool::Circle => "circle",
            Tool::Fill => "fill",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pen" | "brush" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            "line" => Ok(Tool::Line),
            "rect" | "rectangle" => Ok(Tool::Rect),
            "circle" => Ok(Tool::Circle),
            "fill" | "bucket" => Ok(Tool::Fill),
            other => Err(format!("Unknown tool '{other}'")),
        }
    }
}
