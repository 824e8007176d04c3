//! Scanline flood fill.
//!
//! The fill walks whole vertical runs per stack pop and pushes at most one
//! seed per contiguous run found in the neighbouring columns, so the explicit
//! stack grows with the region's boundary rather than its area.

use super::CanvasError;
use super::buffer::{PixelBuffer, Point};
use super::color::Rgba;
use log::debug;

/// Recolors the 4-connected region of pixels matching the seed's color.
///
/// Matching compares all four channels exactly. Returns the number of pixels
/// recolored; filling with the color already at the seed is a no-op and returns 0.
///
/// # Errors
/// [`CanvasError::OutOfBounds`] if `seed` is outside the buffer. The buffer is
/// not touched in that case.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Point, fill: Rgba) -> Result<usize, CanvasError> {
    let stats = scanline_fill(buffer, seed, fill)?;
    debug!(
        "Flood fill at ({}, {}) painted {} pixels (peak stack {})",
        seed.x, seed.y, stats.painted, stats.peak_stack
    );
    Ok(stats.painted)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FillStats {
    painted: usize,
    peak_stack: usize,
}

fn scanline_fill(buffer: &mut PixelBuffer, seed: Point, fill: Rgba) -> Result<FillStats, CanvasError> {
    let target = buffer.get(seed.x, seed.y)?;
    if target == fill {
        debug!("Flood fill at ({}, {}) skipped: region already {}", seed.x, seed.y, fill);
        return Ok(FillStats::default());
    }

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let matches = |buffer: &PixelBuffer, x: i32, y: i32| {
        buffer.read(buffer.index(x as u32, y as u32)) == target
    };

    let mut stack = vec![seed];
    let mut stats = FillStats {
        painted: 0,
        peak_stack: 1,
    };

    while let Some(Point { x, y }) = stack.pop() {
        // A seed may have been recolored by another run since it was pushed.
        if !matches(buffer, x, y) {
            continue;
        }

        let mut y = y;
        while y > 0 && matches(buffer, x, y - 1) {
            y -= 1;
        }

        let mut reach_left = false;
        let mut reach_right = false;

        while y < height && matches(buffer, x, y) {
            let index = buffer.index(x as u32, y as u32);
            buffer.write(index, fill);
            stats.painted += 1;

            if x > 0 {
                if matches(buffer, x - 1, y) {
                    if !reach_left {
                        stack.push(Point::new(x - 1, y));
                        reach_left = true;
                    }
                } else {
                    reach_left = false;
                }
            }

            if x + 1 < width {
                if matches(buffer, x + 1, y) {
                    if !reach_right {
                        stack.push(Point::new(x + 1, y));
                        reach_right = true;
                    }
                } else {
                    reach_right = false;
                }
            }

            y += 1;
        }

        stats.peak_stack = stats.peak_stack.max(stack.len());
    }

    Ok(stats)
}
