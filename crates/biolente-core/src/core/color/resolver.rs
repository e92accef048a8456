//! Maps a palette selection onto a concrete [`ColorScheme`].
//!
//! Fixed palettes are table lookups. The monochromatic palette is derived from a base colour
//! by shifting every RGB channel by the same amount per slot. The shift is a naive
//! brightness offset, not a perceptual lightness transform, and results are clamped into
//! `0..=255` channel by channel.

use super::palette::{HIGH_CONTRAST_SCHEME, LIGHT_BACKGROUND};
use super::{ColorScheme, HexColor, Palette, SchemeSlot};

/// Brightness factor applied to the monochromatic base for each slot except the background.
pub const MONOCHROMATIC_OFFSETS: [(SchemeSlot, f64); 8] = [
    (SchemeSlot::Carbon, 0.0),
    (SchemeSlot::Hydrogen, 0.8),
    (SchemeSlot::Oxygen, 0.6),
    (SchemeSlot::Nitrogen, 0.4),
    (SchemeSlot::Sulfur, 0.2),
    (SchemeSlot::Phosphorus, -0.2),
    (SchemeSlot::Halogen, -0.4),
    (SchemeSlot::Other, -0.6),
];

/// Shifts every channel of `color` by `round(255 * factor)`.
///
/// Ties round toward positive infinity. Each channel is clamped independently, so a shift
/// can saturate one channel while the others keep moving.
pub fn adjust_brightness(color: HexColor, factor: f64) -> HexColor {
    let amount = (255.0 * factor + 0.5).floor() as i32;
    let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
    HexColor::from_rgb(shift(color.r()), shift(color.g()), shift(color.b()))
}

fn offset_for(slot: SchemeSlot) -> f64 {
    MONOCHROMATIC_OFFSETS
        .iter()
        .find(|(s, _)| *s == slot)
        .map(|(_, factor)| *factor)
        .unwrap_or(0.0)
}

/// Builds the monochromatic scheme for `base`. The background stays the light default.
pub fn monochromatic_scheme(base: HexColor) -> ColorScheme {
    let shade = |slot| adjust_brightness(base, offset_for(slot));
    ColorScheme {
        background: LIGHT_BACKGROUND,
        carbon: shade(SchemeSlot::Carbon),
        hydrogen: shade(SchemeSlot::Hydrogen),
        oxygen: shade(SchemeSlot::Oxygen),
        nitrogen: shade(SchemeSlot::Nitrogen),
        sulfur: shade(SchemeSlot::Sulfur),
        phosphorus: shade(SchemeSlot::Phosphorus),
        halogen: shade(SchemeSlot::Halogen),
        other: shade(SchemeSlot::Other),
    }
}

/// The scheme for a palette outside high-contrast mode.
pub fn scheme_for_palette(palette: Palette, monochromatic_base: HexColor) -> ColorScheme {
    match palette.fixed_scheme() {
        Some(scheme) => *scheme,
        None => monochromatic_scheme(monochromatic_base),
    }
}

/// The scheme in effect. High contrast overrides the palette entirely.
pub fn resolve(palette: Palette, high_contrast: bool, monochromatic_base: HexColor) -> ColorScheme {
    if high_contrast {
        HIGH_CONTRAST_SCHEME
    } else {
        scheme_for_palette(palette, monochromatic_base)
    }
}
