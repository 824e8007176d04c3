//! Input handling and tool state machine.
//!
//! This module translates front-end keyboard and pointer events into canvas
//! edits. It keeps the active tool settings (tool, color, stroke width, fill)
//! and drives the gesture state machine that snapshots, previews and commits
//! each stroke or shape.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{DrawingState, EditorState, ToolState};
pub use tool::{Tool, ToolMode};
