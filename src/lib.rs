//! Raster canvas editing engine.
//!
//! The library owns the pixel buffer, the snapshot-based undo history, the
//! drawing tools and the input controller that drives them. Front ends feed
//! pointer and key events into [`input::EditorState`] and read the buffer
//! back for display; the `rasterpad` binary does the same headlessly by
//! replaying [`script`]s.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
