use super::HexColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Custom property the stylesheet reads for the viewer background in high-contrast
/// mode. It is only emitted while high contrast is active.
pub const VIEWER_BACKGROUND_PROPERTY: &str = "--molecule-viewer-bg";

/// The nine named colour slots of a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemeSlot {
    Background,
    Carbon,
    Hydrogen,
    Oxygen,
    Nitrogen,
    Sulfur,
    Phosphorus,
    Halogen,
    Other,
}

impl SchemeSlot {
    pub const ALL: [SchemeSlot; 9] = [
        SchemeSlot::Background,
        SchemeSlot::Carbon,
        SchemeSlot::Hydrogen,
        SchemeSlot::Oxygen,
        SchemeSlot::Nitrogen,
        SchemeSlot::Sulfur,
        SchemeSlot::Phosphorus,
        SchemeSlot::Halogen,
        SchemeSlot::Other,
    ];

    /// Slot name as used in scheme listings.
    pub fn name(&self) -> &'static str {
        match self {
            SchemeSlot::Background => "background",
            SchemeSlot::Carbon => "carbon",
            SchemeSlot::Hydrogen => "hydrogen",
            SchemeSlot::Oxygen => "oxygen",
            SchemeSlot::Nitrogen => "nitrogen",
            SchemeSlot::Sulfur => "sulfur",
            SchemeSlot::Phosphorus => "phosphorus",
            SchemeSlot::Halogen => "halogen",
            SchemeSlot::Other => "other",
        }
    }

    /// Short label shown under each swatch of the palette preview. The background has no
    /// swatch.
    pub fn legend_label(&self) -> Option<&'static str> {
        match self {
            SchemeSlot::Background => None,
            SchemeSlot::Carbon => Some("C"),
            SchemeSlot::Hydrogen => Some("H"),
            SchemeSlot::Oxygen => Some("O"),
            SchemeSlot::Nitrogen => Some("N"),
            SchemeSlot::Sulfur => Some("S"),
            SchemeSlot::Phosphorus => Some("P"),
            SchemeSlot::Halogen => Some("X"),
            SchemeSlot::Other => Some("?"),
        }
    }

    pub fn css_property(&self) -> &'static str {
        match self {
            SchemeSlot::Background => "--molecule-bg",
            SchemeSlot::Carbon => "--molecule-carbon",
            SchemeSlot::Hydrogen => "--molecule-hydrogen",
            SchemeSlot::Oxygen => "--molecule-oxygen",
            SchemeSlot::Nitrogen => "--molecule-nitrogen",
            SchemeSlot::Sulfur => "--molecule-sulfur",
            SchemeSlot::Phosphorus => "--molecule-phosphorus",
            SchemeSlot::Halogen => "--molecule-halogen",
            SchemeSlot::Other => "--molecule-other",
        }
    }
}

impl fmt::Display for SchemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete colour assignment for every slot a molecule view needs.
///
/// All nine slots are plain fields, so a scheme can never be missing a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: HexColor,
    pub carbon: HexColor,
    pub hydrogen: HexColor,
    pub oxygen: HexColor,
    pub nitrogen: HexColor,
    pub sulfur: HexColor,
    pub phosphorus: HexColor,
    pub halogen: HexColor,
    pub other: HexColor,
}

impl ColorScheme {
    pub fn get(&self, slot: SchemeSlot) -> HexColor {
        match slot {
            SchemeSlot::Background => self.background,
            SchemeSlot::Carbon => self.carbon,
            SchemeSlot::Hydrogen => self.hydrogen,
            SchemeSlot::Oxygen => self.oxygen,
            SchemeSlot::Nitrogen => self.nitrogen,
            SchemeSlot::Sulfur => self.sulfur,
            SchemeSlot::Phosphorus => self.phosphorus,
            SchemeSlot::Halogen => self.halogen,
            SchemeSlot::Other => self.other,
        }
    }

    /// Iterates all slots in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = (SchemeSlot, HexColor)> + '_ {
        SchemeSlot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }

    /// The custom properties a stylesheet consumes for this scheme, in slot order.
    ///
    /// When `high_contrast` is set the viewer background override is appended as black;
    /// otherwise it is absent and the stylesheet falls back to its own default.
    pub fn css_custom_properties(&self, high_contrast: bool) -> Vec<(&'static str, HexColor)> {
        let mut properties: Vec<_> = self
            .slots()
            .map(|(slot, color)| (slot.css_property(), color))
            .collect();
        if high_contrast {
            properties.push((VIEWER_BACKGROUND_PROPERTY, HexColor::BLACK));
        }
        properties
    }
}
