//! Colour values, palettes and the scheme resolver.
//!
//! Every colour that reaches a renderer or a stylesheet goes through [`HexColor`], so a
//! malformed value is rejected at the boundary instead of producing a half-applied scheme.

pub mod hex;
pub mod palette;
pub mod resolver;
pub mod scheme;

pub use hex::HexColor;
pub use palette::Palette;
pub use scheme::{ColorScheme, SchemeSlot};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color format '{value}': expected '#RRGGBB' with six hexadecimal digits")]
    InvalidColorFormat { value: String },

    #[error(
        "Invalid palette id '{value}'. Expected one of: cpk, rainbow, monochromatic, protanopia, deuteranopia, tritanopia"
    )]
    InvalidPaletteId { value: String },
}
