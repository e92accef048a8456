use crate::core::color::SchemeSlot;
use phf::{Map, phf_map};
use std::fmt;

/// The elements Biolente recognises when analysing a structure.
///
/// This is the small set the viewer colours individually. Anything else an
/// atom record reports counts as an atom but carries no weight and no symbol in the
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    H,
    C,
    N,
    O,
    P,
    S,
    F,
    Cl,
    Br,
    I,
}

static ELEMENTS_BY_SYMBOL: Map<&'static str, Element> = phf_map! {
    "H" => Element::H,
    "C" => Element::C,
    "N" => Element::N,
    "O" => Element::O,
    "P" => Element::P,
    "S" => Element::S,
    "F" => Element::F,
    "Cl" => Element::Cl,
    "Br" => Element::Br,
    "I" => Element::I,
};

impl Element {
    pub const ALL: [Element; 10] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::P,
        Element::S,
        Element::F,
        Element::Cl,
        Element::Br,
        Element::I,
    ];

    pub const HALOGENS: [Element; 4] = [Element::F, Element::Cl, Element::Br, Element::I];

    /// Looks up an element by symbol as reported by a structure file.
    ///
    /// Surrounding whitespace is ignored and the case is normalised (`CL` and `cl` both
    /// resolve to chlorine), since PDB columns are upper-case while SDF uses mixed case.
    pub fn from_symbol(symbol: &str) -> Option<Element> {
        let trimmed = symbol.trim();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        let canonical: String = first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect();
        ELEMENTS_BY_SYMBOL.get(canonical.as_str()).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::P => "P",
            Element::S => "S",
            Element::F => "F",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
        }
    }

    /// Standard atomic weight in g/mol.
    pub fn atomic_weight(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::P => 30.974,
            Element::S => 32.065,
            Element::F => 18.998,
            Element::Cl => 35.453,
            Element::Br => 79.904,
            Element::I => 126.90,
        }
    }

    pub fn is_halogen(&self) -> bool {
        Self::HALOGENS.contains(self)
    }

    /// The colour-scheme slot that paints this element.
    pub fn scheme_slot(&self) -> SchemeSlot {
        match self {
            Element::H => SchemeSlot::Hydrogen,
            Element::C => SchemeSlot::Carbon,
            Element::N => SchemeSlot::Nitrogen,
            Element::O => SchemeSlot::Oxygen,
            Element::P => SchemeSlot::Phosphorus,
            Element::S => SchemeSlot::Sulfur,
            Element::F | Element::Cl | Element::Br | Element::I => SchemeSlot::Halogen,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
