//! The editable canvas: pixel buffer plus undo history.

use super::buffer::{PixelBuffer, Point};
use super::color::{Rgba, WHITE};
use super::fill;
use super::history::{History, Snapshot};
use super::CanvasError;
use log::{debug, info};

/// Owns the live pixel buffer and its undo/redo history.
///
/// All mutations go through the canvas so the history can record the buffer
/// state *before* each change. Resizing is deliberately not recorded: it
/// cannot be undone.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: PixelBuffer,
    history: History,
    background: Rgba,
}

impl Canvas {
    /// Creates a white canvas with empty history.
    pub fn new(width: u32, height: u32, max_undo: usize) -> Result<Self, CanvasError> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height, WHITE)?,
            history: History::new(max_undo),
            background: WHITE,
        })
    }

    /// Read-only access to the live buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Mutable access for tools. Callers must have called [`Canvas::snapshot`]
    /// earlier in the same gesture.
    pub(crate) fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Copies the current pixels out of the canvas.
    pub fn copy_pixels(&self) -> Vec<u8> {
        self.buffer.pixels().to_vec()
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Records the current buffer as the pre-image of an upcoming mutation.
    ///
    /// Evicts the oldest undo step past the limit and invalidates redo.
    pub fn snapshot(&mut self) {
        self.history.record(Snapshot::capture(&self.buffer));
        debug!(
            "Snapshot recorded (undo depth {}/{})",
            self.history.undo_len(),
            self.history.limit()
        );
    }

    /// Restores the most recent snapshot without consuming it.
    ///
    /// Shape previews call this before every redraw so earlier previews are
    /// never baked into the buffer. Returns false if there is no snapshot.
    pub fn restore_latest(&mut self) -> bool {
        match self.history.latest() {
            Some(snapshot) => {
                snapshot.restore_into(&mut self.buffer);
                true
            }
            None => false,
        }
    }

    /// Reverts to the previous snapshot. Returns false (no-op) if there is none.
    pub fn undo(&mut self) -> bool {
        let buffer = &self.buffer;
        match self.history.undo(|| Snapshot::capture(buffer)) {
            Some(previous) => {
                previous.restore_into(&mut self.buffer);
                debug!(
                    "Undo applied ({} undo / {} redo left)",
                    self.history.undo_len(),
                    self.history.redo_len()
                );
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone state. Returns false (no-op) if there is none.
    pub fn redo(&mut self) -> bool {
        let buffer = &self.buffer;
        match self.history.redo(|| Snapshot::capture(buffer)) {
            Some(next) => {
                next.restore_into(&mut self.buffer);
                debug!(
                    "Redo applied ({} undo / {} redo left)",
                    self.history.undo_len(),
                    self.history.redo_len()
                );
                true
            }
            None => false,
        }
    }

    /// Flood-fills from `seed`, recording a snapshot first.
    ///
    /// Bounds are checked before the snapshot so a rejected fill leaves the
    /// history untouched.
    pub fn fill_at(&mut self, seed: Point, color: Rgba) -> Result<usize, CanvasError> {
        // Validate first; the snapshot must not be taken for a rejected call.
        self.buffer.get(seed.x, seed.y)?;
        self.snapshot();
        fill::flood_fill(&mut self.buffer, seed, color)
    }

    /// Paints the whole canvas with the background color (undoable).
    pub fn clear(&mut self) {
        self.snapshot();
        self.buffer.fill(self.background);
    }

    /// Reallocates the canvas to a new size, keeping existing content at the
    /// top-left origin and padding newly exposed pixels with opaque white.
    ///
    /// Content outside the new bounds is truncated. Not recorded in history.
    ///
    /// # Errors
    /// [`CanvasError::InvalidDimensions`] for a zero edge; the canvas is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        let next = self.buffer.resized(width, height, self.background)?;
        info!(
            "Canvas resized from {}x{} to {}x{}",
            self.buffer.width(),
            self.buffer.height(),
            width,
            height
        );
        self.buffer = next;
        Ok(())
    }
}
