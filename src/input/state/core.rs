//! Gesture state machine and editor state management.

use crate::config::{Action, Config, KeyBinding, MAX_CANVAS_EDGE};
use crate::draw::{Canvas, CanvasError, Ink, PixelBuffer, Point, Rgba, StrokeStyle};
use crate::input::{modifiers::Modifiers, tool::Tool};
use crate::util;
use anyhow::anyhow;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Largest accepted stroke width in pixels.
pub const MAX_STROKE_WIDTH: u32 = 100;

/// Current gesture state machine.
///
/// Only one pointer gesture can be in progress at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A gesture is in progress (left button held down)
    Drawing {
        /// Tool captured when the gesture started
        tool: Tool,
        /// Point where the button was pressed
        anchor: Point,
        /// Most recent pointer position seen during the gesture
        last: Point,
    },
}

impl DrawingState {
    pub fn in_progress(&self) -> bool {
        matches!(self, DrawingState::Drawing { .. })
    }
}

/// Transient tool settings read by the drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    /// Tool used by the next gesture
    pub active_tool: Tool,
    /// Active drawing color
    pub color: Rgba,
    /// Stroke width in pixels (always at least 1)
    pub stroke_width: u32,
    /// Whether rectangles and circles are filled
    pub fill_enabled: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_tool: Tool::Pen,
            color: Rgba::opaque(0x11, 0x11, 0x11),
            stroke_width: 6,
            fill_enabled: false,
        }
    }
}

impl ToolState {
    /// Stroke style for a gesture drawn with `tool`.
    pub fn style_for(&self, tool: Tool) -> StrokeStyle {
        let ink = match tool {
            Tool::Eraser => Ink::Clear,
            _ => Ink::Color(self.color),
        };
        StrokeStyle {
            ink,
            width: self.stroke_width,
            fill: self.fill_enabled,
        }
    }
}

/// Main editor state containing the canvas and all session state.
///
/// This struct owns the canvas (buffer and history), the tool settings, the
/// gesture in progress and modifier keys. It processes pointer and keyboard
/// events and tells the front end when a redraw is needed.
pub struct EditorState {
    /// Canvas buffer and undo history
    pub canvas: Canvas,
    /// Active tool, color, stroke width and fill flag
    pub tool: ToolState,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Smallest canvas edge accepted by [`EditorState::resize`]
    pub min_canvas_size: u32,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Export requested via keybinding (handled by the front end)
    export_requested: bool,
}

impl EditorState {
    /// Creates an editor around an existing canvas.
    pub fn new(canvas: Canvas, tool: ToolState, action_map: HashMap<KeyBinding, Action>) -> Self {
        Self {
            canvas,
            tool,
            state: DrawingState::Idle,
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            min_canvas_size: 1,
            action_map,
            export_requested: false,
        }
    }

    /// Builds a blank editor from configuration.
    ///
    /// # Errors
    /// Returns an error if the configured canvas size is invalid or the
    /// keybindings cannot be parsed.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let canvas = Canvas::new(
            config.canvas.width,
            config.canvas.height,
            config.history.max_undo,
        )?;
        let tool = ToolState {
            active_tool: config.drawing.default_tool,
            color: config.drawing.default_color.to_color(),
            stroke_width: config.drawing.default_stroke_width.clamp(1, MAX_STROKE_WIDTH),
            fill_enabled: config.drawing.fill_shapes,
        };
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|err| anyhow!("Invalid keybindings: {err}"))?;

        let mut state = Self::new(canvas, tool, action_map);
        state.min_canvas_size = config.canvas.min_size;
        info!(
            "Editor ready: {}x{} canvas, tool {}, color {}, width {}",
            state.canvas.width(),
            state.canvas.height(),
            state.tool.active_tool,
            state.tool.color,
            state.tool.stroke_width
        );
        Ok(state)
    }

    /// Read-only view of the live buffer for display.
    pub fn buffer(&self) -> &PixelBuffer {
        self.canvas.buffer()
    }

    pub fn can_undo(&self) -> bool {
        self.canvas.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.canvas.can_redo()
    }

    /// Selects the tool used by the next gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool.active_tool != tool {
            debug!("Tool changed: {} -> {}", self.tool.active_tool, tool);
            self.tool.active_tool = tool;
        }
    }

    /// Sets the drawing color from a name or hex string.
    ///
    /// # Errors
    /// [`CanvasError::InvalidColorFormat`]; the current color is kept.
    pub fn set_color(&mut self, input: &str) -> Result<(), CanvasError> {
        let color = util::parse_color(input)?;
        self.set_color_rgba(color);
        Ok(())
    }

    pub fn set_color_rgba(&mut self, color: Rgba) {
        debug!("Color changed to {} ({})", color, util::color_to_name(&color));
        self.tool.color = color;
    }

    /// Sets the stroke width, clamped to `1..=MAX_STROKE_WIDTH`.
    pub fn set_stroke_width(&mut self, width: u32) {
        let clamped = width.clamp(1, MAX_STROKE_WIDTH);
        if clamped != width {
            warn!("Stroke width {width} out of range, using {clamped}");
        }
        self.tool.stroke_width = clamped;
    }

    /// Adjusts the stroke width by `delta`, staying within range.
    pub fn adjust_stroke_width(&mut self, delta: i32) {
        let next = (self.tool.stroke_width as i64 + i64::from(delta)).clamp(1, MAX_STROKE_WIDTH as i64);
        self.tool.stroke_width = next as u32;
        self.needs_redraw = true;
    }

    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.tool.fill_enabled = enabled;
    }

    /// Undoes the last mutation. No-op while a gesture is in progress.
    pub fn undo(&mut self) -> bool {
        if self.state.in_progress() {
            debug!("Ignoring undo during an active gesture");
            return false;
        }
        let changed = self.canvas.undo();
        self.needs_redraw |= changed;
        changed
    }

    /// Redoes the last undone mutation. No-op while a gesture is in progress.
    pub fn redo(&mut self) -> bool {
        if self.state.in_progress() {
            debug!("Ignoring redo during an active gesture");
            return false;
        }
        let changed = self.canvas.redo();
        self.needs_redraw |= changed;
        changed
    }

    /// Clears the canvas to white (undoable). No-op while a gesture is in progress.
    pub fn clear(&mut self) {
        if self.state.in_progress() {
            debug!("Ignoring clear during an active gesture");
            return;
        }
        self.canvas.clear();
        self.needs_redraw = true;
    }

    /// Resizes the canvas, preserving content at the origin.
    ///
    /// Zero edges are rejected; other values are clamped into
    /// `min_canvas_size..=MAX_CANVAS_EDGE`. A gesture in progress is aborted
    /// first. The resize itself cannot be undone.
    ///
    /// # Errors
    /// [`CanvasError::InvalidDimensions`] if either edge is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let width = util::clamp_edge(width, self.min_canvas_size, MAX_CANVAS_EDGE);
        let height = util::clamp_edge(height, self.min_canvas_size, MAX_CANVAS_EDGE);

        self.abort_gesture();
        self.canvas.resize(width, height)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Abandons the gesture in progress without committing it.
    ///
    /// Shape previews are rolled back to the gesture's pre-image; freehand
    /// strokes keep what was already composited.
    pub fn abort_gesture(&mut self) {
        if let DrawingState::Drawing { tool, .. } = self.state {
            if tool.mode() == crate::input::tool::ToolMode::Deferred {
                self.canvas.restore_latest();
            }
            debug!("Aborted {} gesture", tool);
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    /// Returns and clears the pending export request.
    pub fn take_export_request(&mut self) -> bool {
        std::mem::take(&mut self.export_requested)
    }

    /// Asks the front end to export the canvas on its next turn.
    pub fn request_export(&mut self) {
        self.export_requested = true;
    }

    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }
}
