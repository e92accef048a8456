use super::{ColorError, ColorScheme, HexColor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const fn hex(value: u32) -> HexColor {
    HexColor::from_rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Background shared by every palette outside high-contrast mode.
pub const LIGHT_BACKGROUND: HexColor = hex(0xF8F9FA);

/// Base colour of the monochromatic palette until the user picks another one.
pub const DEFAULT_MONOCHROMATIC_BASE: HexColor = hex(0x0072B2);

/// Base colours offered by the monochromatic picker.
pub const MONOCHROMATIC_PRESETS: [HexColor; 6] = [
    hex(0x0072B2),
    hex(0xE69F00),
    hex(0x009E73),
    hex(0xCC79A7),
    hex(0xD55E00),
    hex(0x56B4E9),
];

pub const CPK_SCHEME: ColorScheme = ColorScheme {
    background: LIGHT_BACKGROUND,
    carbon: hex(0x808080),
    hydrogen: hex(0xFFFFFF),
    oxygen: hex(0xFF0000),
    nitrogen: hex(0x0000FF),
    sulfur: hex(0xFFFF00),
    phosphorus: hex(0xFFA500),
    halogen: hex(0x00FF00),
    other: hex(0xFF69B4),
};

pub const RAINBOW_SCHEME: ColorScheme = ColorScheme {
    background: LIGHT_BACKGROUND,
    carbon: hex(0xFF0000),
    hydrogen: hex(0xFF7F00),
    oxygen: hex(0xFFFF00),
    nitrogen: hex(0x00FF00),
    sulfur: hex(0x0000FF),
    phosphorus: hex(0x4B0082),
    halogen: hex(0x9400D3),
    other: hex(0xFF1493),
};

// Protanopia and deuteranopia share the same Okabe-Ito distribution.
pub const PROTANOPIA_SCHEME: ColorScheme = ColorScheme {
    background: LIGHT_BACKGROUND,
    carbon: hex(0x0072B2),
    hydrogen: hex(0xF0E442),
    oxygen: hex(0xE69F00),
    nitrogen: hex(0x56B4E9),
    sulfur: hex(0xCC79A7),
    phosphorus: hex(0x009E73),
    halogen: hex(0xD55E00),
    other: hex(0x999999),
};

pub const DEUTERANOPIA_SCHEME: ColorScheme = PROTANOPIA_SCHEME;

pub const TRITANOPIA_SCHEME: ColorScheme = ColorScheme {
    background: LIGHT_BACKGROUND,
    carbon: hex(0xE69F00),
    hydrogen: hex(0x56B4E9),
    oxygen: hex(0x009E73),
    nitrogen: hex(0xF0E442),
    sulfur: hex(0x0072B2),
    phosphorus: hex(0xD55E00),
    halogen: hex(0xCC79A7),
    other: hex(0x999999),
};

pub const HIGH_CONTRAST_SCHEME: ColorScheme = ColorScheme {
    background: hex(0x000000),
    carbon: hex(0xFFFFFF),
    hydrogen: hex(0xF0E442),
    oxygen: hex(0x0072B2),
    nitrogen: hex(0xE69F00),
    sulfur: hex(0xCC79A7),
    phosphorus: hex(0x009E73),
    halogen: hex(0xD55E00),
    other: hex(0x56B4E9),
};

/// The colour palettes a user can pick for the molecule viewer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Classic Corey-Pauling-Koltun element colours.
    #[default]
    Cpk,
    Rainbow,
    /// Shades of a single user-chosen base colour.
    Monochromatic,
    /// Safe for red-weak vision.
    Protanopia,
    /// Safe for green-weak vision.
    Deuteranopia,
    /// Safe for blue-weak vision.
    Tritanopia,
}

impl Palette {
    /// All palettes in the order the picker shows them.
    pub const ALL: [Palette; 6] = [
        Palette::Cpk,
        Palette::Rainbow,
        Palette::Monochromatic,
        Palette::Protanopia,
        Palette::Deuteranopia,
        Palette::Tritanopia,
    ];

    /// The identifier persisted in preferences and accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Palette::Cpk => "cpk",
            Palette::Rainbow => "rainbow",
            Palette::Monochromatic => "monochromatic",
            Palette::Protanopia => "protanopia",
            Palette::Deuteranopia => "deuteranopia",
            Palette::Tritanopia => "tritanopia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Palette::Cpk => "CPK (Padrão)",
            Palette::Rainbow => "Arco-íris",
            Palette::Monochromatic => "Monocromático",
            Palette::Protanopia => "Protanopia",
            Palette::Deuteranopia => "Deuteranopia",
            Palette::Tritanopia => "Tritanopia",
        }
    }

    /// Explanation shown next to the colour-vision palettes.
    pub fn accessibility_note(&self) -> Option<&'static str> {
        match self {
            Palette::Protanopia => Some("optimised for protanopia (difficulty with red)"),
            Palette::Deuteranopia => Some("optimised for deuteranopia (difficulty with green)"),
            Palette::Tritanopia => Some("optimised for tritanopia (difficulty with blue)"),
            _ => None,
        }
    }

    /// The constant table for this palette, or `None` for the monochromatic palette whose
    /// scheme depends on a base colour.
    pub fn fixed_scheme(&self) -> Option<&'static ColorScheme> {
        match self {
            Palette::Cpk => Some(&CPK_SCHEME),
            Palette::Rainbow => Some(&RAINBOW_SCHEME),
            Palette::Monochromatic => None,
            Palette::Protanopia => Some(&PROTANOPIA_SCHEME),
            Palette::Deuteranopia => Some(&DEUTERANOPIA_SCHEME),
            Palette::Tritanopia => Some(&TRITANOPIA_SCHEME),
        }
    }
}

impl FromStr for Palette {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::ALL
            .into_iter()
            .find(|palette| palette.id() == s)
            .ok_or_else(|| ColorError::InvalidPaletteId {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
