use crate::draw::{CanvasError, Point, Shape, StrokeStyle, render};
use crate::input::{
    events::MouseButton,
    tool::{Tool, ToolMode},
};
use log::debug;

use super::{DrawingState, EditorState};

impl EditorState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate in canvas pixels
    /// * `y` - Mouse Y coordinate in canvas pixels
    ///
    /// # Behavior
    /// - Left click while Idle: snapshots the canvas once and starts a gesture
    ///   with the active tool. The fill tool runs immediately instead.
    /// - Left click during a gesture: ignored
    /// - Right click: aborts the current gesture
    ///
    /// # Errors
    /// [`CanvasError::OutOfBounds`] when the fill tool is used outside the
    /// canvas. Nothing is recorded in that case.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) -> Result<(), CanvasError> {
        match button {
            MouseButton::Left => {
                if self.state.in_progress() {
                    return Ok(());
                }
                let tool = self.tool.active_tool;
                let point = Point::new(x, y);
                match tool.mode() {
                    ToolMode::OneShot => {
                        self.canvas.fill_at(point, self.tool.color)?;
                        self.needs_redraw = true;
                    }
                    ToolMode::Immediate | ToolMode::Deferred => {
                        self.canvas.snapshot();
                        self.state = DrawingState::Drawing {
                            tool,
                            anchor: point,
                            last: point,
                        };
                        debug!("Started {} gesture at ({}, {})", tool, x, y);
                    }
                }
            }
            MouseButton::Right => self.abort_gesture(),
            MouseButton::Middle => {}
        }
        Ok(())
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// # Behavior
    /// - Pen/eraser: composites a segment from the previous point
    /// - Line/rect/circle: rolls back to the gesture's pre-image and draws
    ///   the preview shape from the anchor to the pointer
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        let DrawingState::Drawing { tool, anchor, last } = self.state else {
            return;
        };
        let point = Point::new(x, y);
        let style = self.tool.style_for(tool);

        match tool.mode() {
            ToolMode::Immediate => {
                let buffer = self.canvas.buffer_mut();
                if last == anchor {
                    render::stamp_disc(buffer, anchor, style.width, style.ink);
                }
                render::stroke_segment(buffer, last, point, style.width, style.ink);
            }
            ToolMode::Deferred => self.draw_preview(tool, anchor, point, style),
            ToolMode::OneShot => {}
        }

        self.state = DrawingState::Drawing {
            tool,
            anchor,
            last: point,
        };
        self.needs_redraw = true;
    }

    /// Processes mouse button release events.
    ///
    /// # Behavior
    /// When the left button is released during a gesture:
    /// - Line/rect/circle: commits the final shape from the anchor to the
    ///   release point
    /// - Pen/eraser: already composited, nothing more to draw
    ///
    /// The gesture then returns to Idle.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }
        let DrawingState::Drawing { tool, anchor, .. } = self.state else {
            return;
        };

        if tool.mode() == ToolMode::Deferred {
            let style = self.tool.style_for(tool);
            self.draw_preview(tool, anchor, Point::new(x, y), style);
        }

        debug!("Finished {} gesture at ({}, {})", tool, x, y);
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    fn draw_preview(&mut self, tool: Tool, anchor: Point, current: Point, style: StrokeStyle) {
        let shape = match tool {
            Tool::Line => Shape::line(anchor, current),
            Tool::Rect => Shape::rect(anchor, current),
            Tool::Circle => Shape::circle(anchor, current),
            Tool::Pen | Tool::Eraser | Tool::Fill => return,
        };
        self.canvas.restore_latest();
        shape.render(self.canvas.buffer_mut(), style);
    }
}
