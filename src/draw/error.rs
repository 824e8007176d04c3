//! Errors raised by canvas operations.

use thiserror::Error;

/// Caller-contract violations rejected by the editing engine.
///
/// Every variant is recoverable: the operation that produced it left the
/// buffer and the undo history exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColorFormat(String),

    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
