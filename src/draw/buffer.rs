//! Addressable RGBA raster surface.

use super::CanvasError;
use super::color::Rgba;

/// A pixel coordinate on the canvas.
///
/// Coordinates are signed so that gestures dragged past the canvas edge can
/// still be described; drawing clips them, bounds-checked accessors reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (i64::from(other.x) - i64::from(self.x)) as f64;
        let dy = (i64::from(other.y) - i64::from(self.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Width x height RGBA surface stored row-major, four bytes per pixel.
///
/// `pixels.len() == width * height * 4` holds for every value of this type;
/// dimensions only change by building a new buffer (see [`PixelBuffer::resized`]).
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// Allocates a buffer with every pixel set to `background`.
    ///
    /// # Errors
    /// [`CanvasError::InvalidDimensions`] if either edge is zero or the byte
    /// length would not fit in memory addressing.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self, CanvasError> {
        let len = byte_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            pixels.extend_from_slice(&background.to_array());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps raw RGBA bytes. The length must match the dimensions exactly.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CanvasError> {
        if byte_len(width, height)? != pixels.len() {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns true if `(x, y)` addresses a pixel of this buffer.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Reads one pixel.
    pub fn get(&self, x: i32, y: i32) -> Result<Rgba, CanvasError> {
        let index = self.checked_index(x, y)?;
        Ok(self.read(index))
    }

    /// Writes one pixel. No clamping or blending is applied.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) -> Result<(), CanvasError> {
        let index = self.checked_index(x, y)?;
        self.write(index, color);
        Ok(())
    }

    /// Writes one pixel if it lies inside the buffer; silently clips otherwise.
    ///
    /// Used by the rasterizers, whose shapes may extend past the canvas edge.
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if self.contains(x, y) {
            let index = self.index(x as u32, y as u32);
            self.write(index, color);
        }
    }

    /// Writes a horizontal run `[x0, x1]` on row `y`, clipped to the buffer.
    pub(crate) fn put_span(&mut self, x0: i32, x1: i32, y: i32, color: Rgba) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let start = x0.min(x1).max(0);
        let end = x0.max(x1).min(self.width as i32 - 1);
        if start > end {
            return;
        }
        let rgba = color.to_array();
        let from = self.index(start as u32, y as u32);
        let to = self.index(end as u32, y as u32) + 4;
        for chunk in self.pixels[from..to].chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Copies `src` (given as raw bytes and dimensions) into this buffer with
    /// its top-left corner at the origin. Content outside this buffer is truncated.
    pub(crate) fn blit_raw(&mut self, src: &[u8], src_width: u32, src_height: u32) {
        let cols = src_width.min(self.width) as usize;
        let rows = src_height.min(self.height) as usize;
        let row_bytes = cols * 4;

        for row in 0..rows {
            let src_start = row * src_width as usize * 4;
            let dst_start = row * self.width as usize * 4;
            self.pixels[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src[src_start..src_start + row_bytes]);
        }
    }

    /// Builds a new buffer of the target size, filled with `background`, holding
    /// this buffer's content at the top-left origin.
    pub fn resized(&self, width: u32, height: u32, background: Rgba) -> Result<Self, CanvasError> {
        let mut next = Self::new(width, height, background)?;
        next.blit_raw(&self.pixels, self.width, self.height);
        Ok(next)
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub(crate) fn read(&self, index: usize) -> Rgba {
        Rgba::from_array([
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
            self.pixels[index + 3],
        ])
    }

    pub(crate) fn write(&mut self, index: usize, color: Rgba) {
        self.pixels[index..index + 4].copy_from_slice(&color.to_array());
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, CanvasError> {
        if self.contains(x, y) {
            Ok(self.index(x as u32, y as u32))
        } else {
            Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, CanvasError> {
    if width == 0 || height == 0 {
        return Err(CanvasError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CanvasError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    #[test]
    fn new_buffer_has_expected_length_and_background() {
        let buffer = PixelBuffer::new(4, 3, WHITE).unwrap();
        assert_eq!(buffer.pixels().len(), 4 * 3 * 4);
        assert!(buffer.pixels().iter().all(|&byte| byte == 255));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            PixelBuffer::new(0, 5, WHITE).unwrap_err(),
            CanvasError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(PixelBuffer::new(5, 0, WHITE).is_err());
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut buffer = PixelBuffer::new(2, 2, WHITE).unwrap();
        buffer.set(1, 1, RED).unwrap();
        assert_eq!(buffer.get(1, 1).unwrap(), RED);
        assert_eq!(buffer.get(0, 1).unwrap(), WHITE);

        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2)] {
            assert!(matches!(
                buffer.get(x, y),
                Err(CanvasError::OutOfBounds { .. })
            ));
            assert!(buffer.set(x, y, BLACK).is_err());
        }
        // Rejected sets leave the buffer untouched.
        assert_eq!(buffer.get(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn put_clips_silently() {
        let mut buffer = PixelBuffer::new(2, 2, WHITE).unwrap();
        let before = buffer.clone();
        buffer.put(-1, 0, RED);
        buffer.put(0, 2, RED);
        assert_eq!(buffer, before);
    }

    #[test]
    fn put_span_clips_to_row() {
        let mut buffer = PixelBuffer::new(4, 2, WHITE).unwrap();
        buffer.put_span(6, -3, 1, RED);
        for x in 0..4 {
            assert_eq!(buffer.get(x, 1).unwrap(), RED);
            assert_eq!(buffer.get(x, 0).unwrap(), WHITE);
        }
    }

    #[test]
    fn resized_preserves_origin_and_pads_white() {
        let mut buffer = PixelBuffer::new(2, 2, BLACK).unwrap();
        buffer.set(1, 0, RED).unwrap();

        let larger = buffer.resized(3, 4, WHITE).unwrap();
        assert_eq!(larger.get(1, 0).unwrap(), RED);
        assert_eq!(larger.get(0, 1).unwrap(), BLACK);
        assert_eq!(larger.get(2, 0).unwrap(), WHITE);
        assert_eq!(larger.get(0, 3).unwrap(), WHITE);

        let smaller = buffer.resized(1, 1, WHITE).unwrap();
        assert_eq!(smaller.pixels(), &BLACK.to_array());
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(PixelBuffer::from_raw(1, 1, vec![0; 4]).is_ok());
        assert!(PixelBuffer::from_raw(1, 1, vec![0; 3]).is_err());
    }

    #[test]
    fn distance_between_extreme_points() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MIN);
        assert_eq!(a.distance_to(b), f64::from(u32::MAX));
        assert_eq!(Point::new(0, 0).distance_to(Point::new(3, 4)), 5.0);
    }
}
