//! Raster primitives used by the drawing tools.
//!
//! Everything here clips against the buffer edge: shapes dragged partly off
//! the canvas are drawn as far as they are visible.

use super::buffer::{PixelBuffer, Point};
use super::color::{Rgba, TRANSPARENT};

/// What a stroke writes into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Replace pixels with the given color.
    Color(Rgba),
    /// Replace pixels with fully transparent black (eraser).
    Clear,
}

impl Ink {
    pub fn rgba(self) -> Rgba {
        match self {
            Ink::Color(color) => color,
            Ink::Clear => TRANSPARENT,
        }
    }
}

/// Stamps a filled disc of diameter `width` centered on `center`.
///
/// Width 1 writes the single center pixel.
pub fn stamp_disc(buffer: &mut PixelBuffer, center: Point, width: u32, ink: Ink) {
    let color = ink.rgba();
    if width <= 1 {
        buffer.put(center.x, center.y, color);
        return;
    }

    let radius = f64::from(width) / 2.0;
    let reach = radius.floor() as i32;
    for dy in -reach..=reach {
        let span = (radius * radius - f64::from(dy * dy)).max(0.0).sqrt().floor() as i32;
        buffer.put_span(
            center.x.saturating_sub(span),
            center.x.saturating_add(span),
            center.y.saturating_add(dy),
            color,
        );
    }
}

/// Draws a straight segment with round caps.
///
/// The segment is first clipped to the buffer grown by `width` on every side,
/// then the Bresenham path between the clipped ends (both inclusive) is
/// walked, stamping a disc of diameter `width` on every step. Work is bounded
/// by the canvas size no matter how far off-canvas the endpoints lie.
pub fn stroke_segment(buffer: &mut PixelBuffer, from: Point, to: Point, width: u32, ink: Ink) {
    let Some((from, to)) = clip_segment(buffer, from, to, margin(width)) else {
        return;
    };

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = from.x;
    let mut y = from.y;

    loop {
        stamp_disc(buffer, Point::new(x, y), width, ink);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws an axis-aligned rectangle between two opposite corners.
///
/// The corners may be given in any order. The outline band is `width` pixels
/// thick and straddles the edge; when `fill` is set the interior is painted
/// first with the same ink.
pub fn draw_rect(
    buffer: &mut PixelBuffer,
    corner_a: Point,
    corner_b: Point,
    width: u32,
    ink: Ink,
    fill: bool,
) {
    let color = ink.rgba();

    // Edges pulled in to the margin stay off-canvas, so the visible result is unchanged.
    let margin = margin(width);
    let clamp_x = |v: i32| v.clamp(-margin, buffer.width() as i32 - 1 + margin);
    let clamp_y = |v: i32| v.clamp(-margin, buffer.height() as i32 - 1 + margin);
    let x0 = clamp_x(corner_a.x.min(corner_b.x));
    let x1 = clamp_x(corner_a.x.max(corner_b.x));
    let y0 = clamp_y(corner_a.y.min(corner_b.y));
    let y1 = clamp_y(corner_a.y.max(corner_b.y));

    if fill {
        for y in clip_rows(buffer, i64::from(y0), i64::from(y1)) {
            buffer.put_span(x0, x1, y, color);
        }
    }

    let width = width.max(1) as i32;
    let outer = (width - 1) / 2;
    let inner = width / 2;

    let top = clip_rows(buffer, i64::from(y0 - outer), i64::from(y0 + inner));
    let bottom = clip_rows(buffer, i64::from(y1 - inner), i64::from(y1 + outer));
    for y in top.chain(bottom) {
        buffer.put_span(x0 - outer, x1 + outer, y, color);
    }

    for y in clip_rows(buffer, i64::from(y0 - outer), i64::from(y1 + outer)) {
        buffer.put_span(x0 - outer, x0 + inner, y, color);
        buffer.put_span(x1 - inner, x1 + outer, y, color);
    }
}

/// Draws a circle centered on `center`.
///
/// The outline is the ring of pixels whose center lies within `width / 2` of
/// the true circle; when `fill` is set, every pixel within `radius` is painted too.
pub fn draw_circle(
    buffer: &mut PixelBuffer,
    center: Point,
    radius: f64,
    width: u32,
    ink: Ink,
    fill: bool,
) {
    let color = ink.rgba();
    let half = f64::from(width.max(1)) / 2.0;
    // Float to int casts saturate, and i64 holds any i32 center plus that reach.
    let reach = i64::from((radius + half).ceil() as i32);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let min_x = (cx - reach).max(0);
    let max_x = (cx + reach).min(i64::from(buffer.width()) - 1);
    if min_x > max_x {
        return;
    }

    for y in clip_rows(buffer, cy - reach, cy + reach) {
        for x in min_x as i32..=max_x as i32 {
            let distance = center.distance_to(Point::new(x, y));
            let on_ring = (distance - radius).abs() <= half;
            if on_ring || (fill && distance <= radius) {
                buffer.put(x, y, color);
            }
        }
    }
}

/// Off-canvas slack kept around the buffer so clipped strokes keep their caps.
fn margin(width: u32) -> i32 {
    width.min(i32::MAX as u32 / 4) as i32 + 1
}

/// Clips a segment to the buffer grown by `margin` (Liang-Barsky).
///
/// Returns `None` when no part of the segment lies in that area.
fn clip_segment(buffer: &PixelBuffer, from: Point, to: Point, margin: i32) -> Option<(Point, Point)> {
    let min = -f64::from(margin);
    let max_x = f64::from(buffer.width()) - 1.0 + f64::from(margin);
    let max_y = f64::from(buffer.height()) - 1.0 + f64::from(margin);

    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x0 - min), (dx, max_x - x0), (-dy, y0 - min), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

fn clip_rows(buffer: &PixelBuffer, from: i64, to: i64) -> std::ops::RangeInclusive<i32> {
    let last = i64::from(buffer.height()) - 1;
    let from = from.clamp(0, last + 1);
    let to = to.clamp(-1, last);
    from as i32..=to as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    fn painted(buffer: &PixelBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.get(x, y).unwrap() != WHITE {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn one_pixel_diagonal_segment() {
        let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
        stroke_segment(
            &mut buffer,
            Point::new(0, 0),
            Point::new(9, 9),
            1,
            Ink::Color(BLACK),
        );
        let expected: Vec<_> = (0..10).map(|i| (i, i)).collect();
        assert_eq!(painted(&buffer), expected);
    }

    #[test]
    fn segment_endpoints_are_inclusive_in_both_directions() {
        let mut buffer = PixelBuffer::new(8, 3, WHITE).unwrap();
        stroke_segment(
            &mut buffer,
            Point::new(6, 1),
            Point::new(1, 1),
            1,
            Ink::Color(RED),
        );
        let expected: Vec<_> = (1..=6).map(|x| (x, 1)).collect();
        assert_eq!(painted(&buffer), expected);
    }

    #[test]
    fn thick_disc_is_round() {
        let mut buffer = PixelBuffer::new(9, 9, WHITE).unwrap();
        stamp_disc(&mut buffer, Point::new(4, 4), 5, Ink::Color(RED));
        assert_eq!(buffer.get(4, 4).unwrap(), RED);
        assert_eq!(buffer.get(6, 4).unwrap(), RED);
        assert_eq!(buffer.get(4, 2).unwrap(), RED);
        // Corners of the bounding square stay untouched.
        assert_eq!(buffer.get(2, 2).unwrap(), WHITE);
        assert_eq!(buffer.get(7, 4).unwrap(), WHITE);
    }

    #[test]
    fn clear_ink_writes_transparent() {
        let mut buffer = PixelBuffer::new(3, 3, WHITE).unwrap();
        stamp_disc(&mut buffer, Point::new(1, 1), 1, Ink::Clear);
        assert_eq!(buffer.get(1, 1).unwrap(), TRANSPARENT);
    }

    #[test]
    fn rect_outline_from_reversed_corners() {
        let mut buffer = PixelBuffer::new(6, 6, WHITE).unwrap();
        draw_rect(
            &mut buffer,
            Point::new(4, 4),
            Point::new(1, 1),
            1,
            Ink::Color(BLACK),
            false,
        );
        let pixels = painted(&buffer);
        assert_eq!(pixels.len(), 12);
        assert!(pixels.contains(&(1, 1)));
        assert!(pixels.contains(&(4, 4)));
        assert!(!pixels.contains(&(2, 2)));
    }

    #[test]
    fn filled_rect_covers_interior() {
        let mut buffer = PixelBuffer::new(6, 6, WHITE).unwrap();
        draw_rect(
            &mut buffer,
            Point::new(1, 1),
            Point::new(4, 4),
            1,
            Ink::Color(RED),
            true,
        );
        assert_eq!(painted(&buffer).len(), 16);
    }

    #[test]
    fn rect_clips_at_canvas_edge() {
        let mut buffer = PixelBuffer::new(4, 4, WHITE).unwrap();
        draw_rect(
            &mut buffer,
            Point::new(-5, -5),
            Point::new(2, 2),
            3,
            Ink::Color(RED),
            false,
        );
        assert_eq!(buffer.get(2, 0).unwrap(), RED);
        assert_eq!(buffer.get(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn circle_ring_uses_anchor_as_center() {
        let mut buffer = PixelBuffer::new(11, 11, WHITE).unwrap();
        draw_circle(&mut buffer, Point::new(5, 5), 3.0, 1, Ink::Color(BLACK), false);
        assert_eq!(buffer.get(8, 5).unwrap(), BLACK);
        assert_eq!(buffer.get(5, 2).unwrap(), BLACK);
        assert_eq!(buffer.get(5, 5).unwrap(), WHITE);
        assert_eq!(buffer.get(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn filled_circle_paints_center() {
        let mut buffer = PixelBuffer::new(11, 11, WHITE).unwrap();
        draw_circle(&mut buffer, Point::new(5, 5), 3.0, 1, Ink::Color(RED), true);
        assert_eq!(buffer.get(5, 5).unwrap(), RED);
        assert_eq!(buffer.get(10, 10).unwrap(), WHITE);
    }

    #[test]
    fn far_off_canvas_segment_is_clipped() {
        let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
        stroke_segment(
            &mut buffer,
            Point::new(0, 0),
            Point::new(50_000_000, 3),
            1,
            Ink::Color(BLACK),
        );
        let expected: Vec<_> = (0..10).map(|x| (x, 0)).collect();
        assert_eq!(painted(&buffer), expected);
    }

    #[test]
    fn segment_missing_canvas_paints_nothing() {
        let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
        stroke_segment(
            &mut buffer,
            Point::new(-100, -100),
            Point::new(-100, 500),
            5,
            Ink::Color(BLACK),
        );
        stroke_segment(
            &mut buffer,
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            1,
            Ink::Color(BLACK),
        );
        assert!(painted(&buffer).is_empty());
    }

    #[test]
    fn rect_with_extreme_corners() {
        let mut buffer = PixelBuffer::new(6, 6, WHITE).unwrap();
        let (min, max) = (Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
        draw_rect(&mut buffer, min, max, 3, Ink::Color(RED), false);
        assert!(painted(&buffer).is_empty());

        draw_rect(&mut buffer, min, max, 3, Ink::Color(RED), true);
        assert_eq!(painted(&buffer).len(), 36);
    }

    #[test]
    fn circle_with_extreme_geometry() {
        let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
        let center = Point::new(5, 5);
        let radius = center.distance_to(Point::new(2_000_000_000, 2_000_000_000));
        draw_circle(&mut buffer, center, radius, 3, Ink::Color(BLACK), false);
        assert!(painted(&buffer).is_empty());

        draw_circle(&mut buffer, Point::new(i32::MAX, i32::MIN), 4.0, 1, Ink::Color(BLACK), true);
        assert!(painted(&buffer).is_empty());

        draw_circle(&mut buffer, center, radius, 1, Ink::Color(RED), true);
        assert_eq!(painted(&buffer).len(), 100);
    }
}
