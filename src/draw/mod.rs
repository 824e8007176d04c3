//! Raster editing core.
//!
//! This module defines the pixel-level drawing types:
//! - [`PixelBuffer`]: the RGBA raster surface every other component writes through
//! - [`Rgba`]: channel representation with hex codec and predefined constants
//! - [`flood_fill`]: scanline fill on a buffer
//! - [`History`]: bounded undo/redo stacks of buffer [`Snapshot`]s
//! - [`Shape`]: line/rectangle/circle geometry for the deferred-commit tools
//! - [`Canvas`]: buffer plus history, the gate for every mutation

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod error;
pub mod fill;
pub mod history;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use buffer::{PixelBuffer, Point};
pub use canvas::Canvas;
pub use color::Rgba;
pub use error::CanvasError;
pub use fill::flood_fill;
pub use history::{DEFAULT_MAX_UNDO, History, Snapshot};
pub use render::Ink;
pub use shape::{Shape, StrokeStyle};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
