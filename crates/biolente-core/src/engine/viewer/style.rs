use crate::core::color::{ColorScheme, HexColor, Palette};
use crate::core::models::element::Element;
use std::collections::BTreeMap;

pub const STICK_RADIUS: f64 = 0.15;
pub const SPHERE_SCALE: f64 = 0.3;

pub type ElementColorMap = BTreeMap<Element, HexColor>;

/// How a representation is coloured.
#[derive(Debug, Clone, PartialEq)]
pub enum Coloring {
    /// Whatever the renderer does by default.
    Default,
    Uniform(HexColor),
    ByElement(ElementColorMap),
}

/// Ball-and-stick: thin sticks for bonds, small spheres for atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpec {
    pub stick_radius: f64,
    pub sphere_scale: f64,
    pub coloring: Coloring,
}

impl StyleSpec {
    pub fn plain() -> Self {
        Self::with_coloring(Coloring::Default)
    }

    pub fn uniform(color: HexColor) -> Self {
        Self::with_coloring(Coloring::Uniform(color))
    }

    pub fn by_element(colors: ElementColorMap) -> Self {
        Self::with_coloring(Coloring::ByElement(colors))
    }

    fn with_coloring(coloring: Coloring) -> Self {
        Self {
            stick_radius: STICK_RADIUS,
            sphere_scale: SPHERE_SCALE,
            coloring,
        }
    }
}

/// How a [`ColorScheme`] is turned into renderer calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylingMode {
    /// Explicit colours for C, H, O, N, S and P inside the style itself.
    HighContrast,
    /// Plain style, then per-element colours including the halogens.
    ElementPalette,
    /// Every atom in the scheme's carbon colour.
    Monochromatic,
    /// Plain style, renderer colours.
    Default,
}

impl StylingMode {
    /// The mode that matches a preference state. High contrast wins over the palette.
    ///
    /// Only CPK recolours by element; the other fixed palettes fall back to the
    /// renderer's own element colours.
    pub fn for_preferences(palette: Palette, high_contrast: bool) -> Self {
        if high_contrast {
            return StylingMode::HighContrast;
        }
        match palette {
            Palette::Cpk => StylingMode::ElementPalette,
            Palette::Monochromatic => StylingMode::Monochromatic,
            _ => StylingMode::Default,
        }
    }
}

/// C, H, O, N, S and P mapped to their scheme slots.
pub fn core_element_colors(scheme: &ColorScheme) -> ElementColorMap {
    Element::ALL
        .into_iter()
        .filter(|e| !e.is_halogen())
        .map(|e| (e, scheme.get(e.scheme_slot())))
        .collect()
}

/// The core elements plus F, Cl, Br and I, all four in the halogen colour.
pub fn element_colors_with_halogens(scheme: &ColorScheme) -> ElementColorMap {
    Element::ALL
        .into_iter()
        .map(|e| (e, scheme.get(e.scheme_slot())))
        .collect()
}
