use crate::core::color::HexColor;
use crate::core::color::Palette;
use crate::core::color::palette::DEFAULT_MONOCHROMATIC_BASE;
use thiserror::Error;

pub const FONT_SIZE_MIN: u16 = 80;
pub const FONT_SIZE_MAX: u16 = 150;
pub const FONT_SIZE_STEP: u16 = 10;
pub const DEFAULT_FONT_SIZE: u16 = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Font size {value}% is outside the supported range 80%..=150%")]
    FontSizeOutOfRange { value: u16 },

    #[error("Font size {value}% is not a multiple of 10%")]
    FontSizeOffStep { value: u16 },
}

/// Checks that `value` is a font size the accessibility controls can reach.
pub fn validate_font_size(value: u16) -> Result<u16, ConfigError> {
    if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&value) {
        return Err(ConfigError::FontSizeOutOfRange { value });
    }
    if value % FONT_SIZE_STEP != 0 {
        return Err(ConfigError::FontSizeOffStep { value });
    }
    Ok(value)
}

/// Defaults used when no preference has been stored yet, or when the stored one is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub default_palette: Palette,
    pub default_monochromatic_base: HexColor,
    pub default_font_size: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_palette: Palette::Cpk,
            default_monochromatic_base: DEFAULT_MONOCHROMATIC_BASE,
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Default)]
pub struct ThemeConfigBuilder {
    default_palette: Option<Palette>,
    default_monochromatic_base: Option<HexColor>,
    default_font_size: Option<u16>,
}

impl ThemeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_palette(mut self, palette: Palette) -> Self {
        self.default_palette = Some(palette);
        self
    }
    pub fn default_monochromatic_base(mut self, base: HexColor) -> Self {
        self.default_monochromatic_base = Some(base);
        self
    }
    pub fn default_font_size(mut self, percent: u16) -> Self {
        self.default_font_size = Some(percent);
        self
    }

    /// Unset fields fall back to [`ThemeConfig::default`].
    pub fn build(self) -> Result<ThemeConfig, ConfigError> {
        let defaults = ThemeConfig::default();
        let default_font_size = match self.default_font_size {
            Some(value) => validate_font_size(value)?,
            None => defaults.default_font_size,
        };
        Ok(ThemeConfig {
            default_palette: self.default_palette.unwrap_or(defaults.default_palette),
            default_monochromatic_base: self
                .default_monochromatic_base
                .unwrap_or(defaults.default_monochromatic_base),
            default_font_size,
        })
    }
}
