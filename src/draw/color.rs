//! RGBA color type, hex codec and predefined color constants.

use super::CanvasError;
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGBA color, laid out the way the pixel buffer stores it.
///
/// # Examples
///
/// ```
/// use rasterpad::draw::Rgba;
/// let red: Rgba = "#f00".parse().unwrap();
/// assert_eq!(red, Rgba::new(255, 0, 0, 255));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a 3- or 6-digit hex color, with or without a leading `#`.
    ///
    /// Alpha is always fully opaque. Any other length, or a non-hex digit,
    /// fails with [`CanvasError::InvalidColorFormat`].
    pub fn from_hex(input: &str) -> Result<Self, CanvasError> {
        let invalid = || CanvasError::InvalidColorFormat(input.to_string());
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                // Each shorthand digit expands to a doubled pair: "f" -> "ff"
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = nibble * 17;
                }
                Ok(Self::opaque(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the channels in buffer order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a color from channels in buffer order.
    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl FromStr for Rgba {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{} (alpha {})", self.to_hex(), self.a)
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color
pub const RED: Rgba = Rgba::opaque(255, 0, 0);

/// Predefined green color
pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);

/// Predefined blue color
pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

/// Predefined yellow color
pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);

/// Predefined orange color
pub const ORANGE: Rgba = Rgba::opaque(255, 128, 0);

/// Predefined pink color
pub const PINK: Rgba = Rgba::opaque(255, 105, 180);

/// Predefined white color, also the canvas background
pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

/// Predefined black color
pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

/// Fully transparent color written by the eraser
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
