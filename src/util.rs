//! Utility functions for color names and resize limits.

use crate::draw::{CanvasError, Rgba, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to color values.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "green", "blue", "yellow", "orange", "pink"
pub fn name_to_color(name: &str) -> Option<Rgba> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        _ => None,
    }
}

/// Parses a color given either by name or as a hex string.
///
/// # Errors
/// [`CanvasError::InvalidColorFormat`] when the input is neither a known name
/// nor a 3- or 6-digit hex color.
pub fn parse_color(input: &str) -> Result<Rgba, CanvasError> {
    match name_to_color(input) {
        Some(color) => Ok(color),
        None => Rgba::from_hex(input),
    }
}

/// Maps a color to its human-readable name, or "Custom" for anything else.
pub fn color_to_name(color: &Rgba) -> &'static str {
    match *color {
        BLACK => "Black",
        WHITE => "White",
        RED => "Red",
        GREEN => "Green",
        BLUE => "Blue",
        YELLOW => "Yellow",
        ORANGE => "Orange",
        PINK => "Pink",
        TRANSPARENT => "Transparent",
        _ => "Custom",
    }
}

// ============================================================================
// Resize Limits
// ============================================================================

/// Clamps a requested canvas edge into `[min, max]`.
///
/// Front ends apply this before calling [`Canvas::resize`](crate::draw::Canvas::resize),
/// which itself only rejects zero.
pub fn clamp_edge(requested: u32, min: u32, max: u32) -> u32 {
    requested.clamp(min.min(max), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_hex_both_parse() {
        assert_eq!(parse_color("Red").unwrap(), RED);
        assert_eq!(parse_color("#00f").unwrap(), BLUE);
        assert!(matches!(
            parse_color("nope"),
            Err(CanvasError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn pink_is_distinct_from_magenta() {
        let pink = parse_color("pink").unwrap();
        assert_eq!(pink.to_hex(), "#ff69b4");
        assert_ne!(pink, parse_color("#ff00ff").unwrap());
        assert_eq!(color_to_name(&pink), "Pink");
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Rgba::opaque(42, 42, 42)), "Custom");
    }

    #[test]
    fn clamp_edge_enforces_minimum() {
        assert_eq!(clamp_edge(20, 100, 16384), 100);
        assert_eq!(clamp_edge(800, 100, 16384), 800);
        assert_eq!(clamp_edge(u32::MAX, 100, 16384), 16384);
    }
}
