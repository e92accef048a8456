use super::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB colour in the `#RRGGBB` notation used by stylesheets and renderers.
///
/// Parsing is strict: a leading `#` followed by exactly six hexadecimal digits. Digits may
/// be in either case, but the colour always displays upper-case, so two spellings of the
/// same colour compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::from_rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn to_rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when the `#` prefix is missing, the
    /// length is not seven characters, or any digit is not hexadecimal.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat {
            value: value.to_string(),
        };

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
