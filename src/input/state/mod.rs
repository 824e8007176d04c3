mod actions;
mod core;
mod mouse;

pub use self::core::{DrawingState, EditorState, MAX_STROKE_WIDTH, ToolState};
