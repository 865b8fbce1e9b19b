//! 24-bit RGB color values.
//!
//! A color's canonical form is the 7-character string `#RRGGBB` with
//! uppercase hex digits. Swatches are tagged with that string and guesses
//! are compared on it, so parsing is strict: anything that is not already
//! canonical is rejected instead of normalized.
//!
//! ```
//! use color_quiz::core::Color;
//!
//! let teal: Color = "#008080".parse().unwrap();
//! assert_eq!(teal, Color::from_rgb(0x00, 0x80, 0x80));
//! assert_eq!(teal.to_string(), "#008080");
//!
//! // Lowercase is not canonical.
//! assert!("#00ff00".parse::<Color>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Hex digits in canonical order; index `n` is the digit for nibble `n`.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// An RGB color with 8 bits per channel.
///
/// Equality on `Color` is equality of canonical strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from six nibbles, most significant first.
    ///
    /// Only the low four bits of each entry are used.
    #[must_use]
    pub fn from_nibbles(nibbles: [u8; 6]) -> Self {
        let pair = |hi: u8, lo: u8| ((hi & 0x0F) << 4) | (lo & 0x0F);
        Self {
            r: pair(nibbles[0], nibbles[1]),
            g: pair(nibbles[2], nibbles[3]),
            b: pair(nibbles[4], nibbles[5]),
        }
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Canonical `#RRGGBB` string.
    #[must_use]
    pub fn canonical(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return Err(QuizError::InvalidColor(s.to_string()));
        }

        let mut nibbles = [0u8; 6];
        for (slot, byte) in nibbles.iter_mut().zip(&bytes[1..]) {
            *slot = HEX_DIGITS
                .iter()
                .position(|d| d == byte)
                .ok_or_else(|| QuizError::InvalidColor(s.to_string()))? as u8;
        }

        Ok(Self::from_nibbles(nibbles))
    }
}

impl TryFrom<String> for Color {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
