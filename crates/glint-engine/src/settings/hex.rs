use std::fmt;
use std::str::FromStr;

use crate::paint::Color;

use super::ConfigError;

/// An opaque `#RRGGBB` color.
///
/// Construction goes through [`HexColor::parse`] or [`HexColor::from_rgb`], so a
/// value of this type is always well formed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (hex digits in either case).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());

        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?))
    }

    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Normalized RGBA with alpha fixed at 1.0.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_u8(self.r, self.g, self.b, 255)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::from_rgb(0xff, 0x00, 0x00)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
