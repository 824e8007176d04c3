use crate::config::Action;
use crate::draw::color::*;
use crate::input::{events::Key, tool::Tool};
use log::debug;

use super::{DrawingState, EditorState};

impl EditorState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the tracked modifier state. Every other key is
    /// looked up in the keybinding map together with the held modifiers and
    /// the bound action (undo, redo, cancel, tool and color presets, ...) runs.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        } else {
            debug!("No action bound to {:?} with {:?}", key, self.modifiers);
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => match self.state {
                // Exit cancels the gesture first, a second press quits
                DrawingState::Drawing { .. } => self.abort_gesture(),
                DrawingState::Idle => self.should_exit = true,
            },
            Action::Cancel => self.abort_gesture(),
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::ClearCanvas => self.clear(),
            Action::Export => self.request_export(),
            Action::SelectPen => self.set_tool(Tool::Pen),
            Action::SelectEraser => self.set_tool(Tool::Eraser),
            Action::SelectLine => self.set_tool(Tool::Line),
            Action::SelectRect => self.set_tool(Tool::Rect),
            Action::SelectCircle => self.set_tool(Tool::Circle),
            Action::SelectFill => self.set_tool(Tool::Fill),
            Action::ToggleFillShapes => {
                let enabled = !self.tool.fill_enabled;
                self.set_fill_enabled(enabled);
            }
            Action::IncreaseStrokeWidth => self.adjust_stroke_width(1),
            Action::DecreaseStrokeWidth => self.adjust_stroke_width(-1),
            Action::SetColorBlack => self.set_color_rgba(BLACK),
            Action::SetColorWhite => self.set_color_rgba(WHITE),
            Action::SetColorRed => self.set_color_rgba(RED),
            Action::SetColorGreen => self.set_color_rgba(GREEN),
            Action::SetColorBlue => self.set_color_rgba(BLUE),
            Action::SetColorYellow => self.set_color_rgba(YELLOW),
            Action::SetColorOrange => self.set_color_rgba(ORANGE),
            Action::SetColorPink => self.set_color_rgba(PINK),
        }
    }
}
