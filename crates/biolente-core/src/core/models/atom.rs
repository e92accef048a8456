use super::element::Element;

/// One atom as reported by a renderer after it has parsed a structure.
///
/// The renderer owns parsing; Biolente only reads back what it needs for the analysis
/// panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtomRecord {
    /// Raw element symbol, if the file provided one.
    pub element: Option<String>,
    /// Indices of the atoms this atom is bonded to. A bond between `a` and `b` appears in
    /// both atoms' lists.
    pub bonds: Vec<usize>,
}

impl AtomRecord {
    pub fn new(element: &str) -> Self {
        Self {
            element: Some(element.to_string()),
            bonds: Vec::new(),
        }
    }

    pub fn with_bonds(mut self, bonds: impl IntoIterator<Item = usize>) -> Self {
        self.bonds = bonds.into_iter().collect();
        self
    }

    /// The recognised element, or `None` when the symbol is missing or unknown.
    pub fn resolved_element(&self) -> Option<Element> {
        self.element.as_deref().and_then(Element::from_symbol)
    }
}
