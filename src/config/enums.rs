//! Configuration enum types.

use crate::draw::{BLACK, Rgba};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color (3 or 6 digits)
/// default_color = "#111"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, yellow, orange, pink) or hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to an [`Rgba`] value.
    ///
    /// Names are resolved with `util::parse_color()`. Unrecognized values fall
    /// back to black with a warning. RGB arrays are always fully opaque.
    pub fn to_color(&self) -> Rgba {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|_| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Rgba::opaque(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;

    #[test]
    fn resolves_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(
            ColorSpec::Name("#111".into()).to_color(),
            Rgba::opaque(17, 17, 17)
        );
        assert_eq!(ColorSpec::Rgb([1, 2, 3]).to_color(), Rgba::opaque(1, 2, 3));
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), BLACK);
    }
}
