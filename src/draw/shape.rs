//! Shapes drawn by the deferred-commit tools.

use super::buffer::{PixelBuffer, Point};
use super::render::{self, Ink};

/// How a shape is stroked onto the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    /// Ink written by the outline (and the fill, if enabled)
    pub ink: Ink,
    /// Outline thickness in pixels (at least 1)
    pub width: u32,
    /// Whether closed shapes are filled before being stroked
    pub fill: bool,
}

/// Geometry of a line, rectangle or circle built from a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment from the gesture anchor to the current point
    Line { from: Point, to: Point },
    /// Axis-aligned rectangle, normalized so `min` is the top-left corner
    Rect { min: Point, max: Point },
    /// Circle around the gesture anchor
    Circle { center: Point, radius: f64 },
}

impl Shape {
    pub fn line(anchor: Point, current: Point) -> Self {
        Shape::Line {
            from: anchor,
            to: current,
        }
    }

    /// Builds a rectangle from any two opposite corners.
    pub fn rect(anchor: Point, current: Point) -> Self {
        // Normalize rectangle to handle dragging in any direction
        Shape::Rect {
            min: Point::new(anchor.x.min(current.x), anchor.y.min(current.y)),
            max: Point::new(anchor.x.max(current.x), anchor.y.max(current.y)),
        }
    }

    /// Builds a circle centered on the anchor passing through `current`.
    pub fn circle(anchor: Point, current: Point) -> Self {
        Shape::Circle {
            center: anchor,
            radius: anchor.distance_to(current),
        }
    }

    /// Rasterizes the shape onto the buffer.
    pub fn render(&self, buffer: &mut PixelBuffer, style: StrokeStyle) {
        match self {
            Shape::Line { from, to } => {
                render::stroke_segment(buffer, *from, *to, style.width, style.ink);
            }
            Shape::Rect { min, max } => render::draw_rect(
                buffer,
                *min,
                *max,
                style.width,
                style.ink,
                style.fill,
            ),
            Shape::Circle { center, radius } => {
                render::draw_circle(buffer, *center, *radius, style.width, style.ink, style.fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn rect_normalizes_negative_extents() {
        let shape = Shape::rect(Point::new(10, 20), Point::new(4, 5));
        assert_eq!(
            shape,
            Shape::Rect {
                min: Point::new(4, 5),
                max: Point::new(10, 20),
            }
        );
        assert_eq!(
            Shape::rect(Point::new(4, 5), Point::new(10, 20)),
            shape,
            "corner order must not matter"
        );
    }

    #[test]
    fn circle_radius_is_euclidean_distance() {
        match Shape::circle(Point::new(1, 1), Point::new(4, 5)) {
            Shape::Circle { center, radius } => {
                assert_eq!(center, Point::new(1, 1));
                assert!((radius - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn render_line_marks_both_ends() {
        let mut buffer = PixelBuffer::new(5, 5, WHITE).unwrap();
        Shape::line(Point::new(0, 4), Point::new(4, 0)).render(
            &mut buffer,
            StrokeStyle {
                ink: Ink::Color(BLACK),
                width: 1,
                fill: false,
            },
        );
        assert_eq!(buffer.get(0, 4).unwrap(), BLACK);
        assert_eq!(buffer.get(4, 0).unwrap(), BLACK);
        assert_eq!(buffer.get(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn extreme_corners_do_not_overflow() {
        let shape = Shape::rect(Point::new(5, 5), Point::new(i32::MIN, i32::MAX));
        assert_eq!(
            shape,
            Shape::Rect {
                min: Point::new(i32::MIN, 5),
                max: Point::new(5, i32::MAX),
            }
        );

        let mut buffer = PixelBuffer::new(10, 10, WHITE).unwrap();
        let style = StrokeStyle {
            ink: Ink::Color(BLACK),
            width: 1,
            fill: false,
        };
        shape.render(&mut buffer, style);
        assert_eq!(buffer.get(5, 9).unwrap(), BLACK);
        assert_eq!(buffer.get(5, 5).unwrap(), BLACK);
        assert_eq!(buffer.get(4, 6).unwrap(), WHITE);
    }
}
