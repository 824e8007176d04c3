//! Bounded undo/redo history of full-frame snapshots.

use super::buffer::PixelBuffer;
use std::collections::VecDeque;

/// Default number of undo steps kept before the oldest is evicted.
pub const DEFAULT_MAX_UNDO: usize = 30;

/// Immutable copy of a buffer's pixels at one instant.
///
/// Snapshots are owned by exactly one history stack and move between the
/// undo and redo stacks; they are never shared.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Snapshot {
    /// Deep-copies the buffer's current pixels.
    pub fn capture(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.pixels().into(),
        }
    }

    /// Writes the snapshot back into `buffer`.
    ///
    /// When the buffer has been resized since the capture, the snapshot is
    /// placed at the origin and clipped; pixels it does not cover keep their value.
    pub fn restore_into(&self, buffer: &mut PixelBuffer) {
        buffer.blit_raw(&self.pixels, self.width, self.height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Undo and redo stacks.
///
/// The undo stack is bounded (oldest entries are evicted first); the redo
/// stack is emptied whenever a new snapshot is recorded.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO)
    }
}

impl History {
    /// Creates empty stacks holding at most `limit` undo steps (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records the pre-image of a mutation that is about to happen.
    ///
    /// Evicts the oldest undo entry past the limit and invalidates redo.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Returns the most recently recorded snapshot without removing it.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.undo.back()
    }

    /// Steps back: pops the newest undo entry and parks `current` on the redo stack.
    ///
    /// Returns `None` (and drops nothing) when there is nothing to undo.
    pub fn undo(&mut self, current: impl FnOnce() -> Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current());
        Some(previous)
    }

    /// Steps forward: pops the newest redo entry and parks `current` on the undo stack.
    pub fn redo(&mut self, current: impl FnOnce() -> Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current());
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
