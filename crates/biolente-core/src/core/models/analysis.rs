use super::atom::AtomRecord;
use super::element::Element;
use std::collections::BTreeSet;

/// Summary statistics of a loaded structure, shown next to the viewer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    pub atom_count: usize,
    /// Physical bonds, each counted once.
    pub bond_count: usize,
    /// Molecular weight in g/mol, rounded to two decimals.
    pub molecular_weight: f64,
    /// Recognised elements present in the structure.
    pub elements: BTreeSet<Element>,
}

impl Analysis {
    /// Computes the analysis from the atoms a renderer reports.
    ///
    /// Every record counts as an atom. Records with a missing or unrecognised symbol add
    /// nothing to the weight and are left out of the element set.
    pub fn from_atoms(atoms: &[AtomRecord]) -> Self {
        let mut elements = BTreeSet::new();
        let mut weight = 0.0;
        let mut bond_endpoints = 0usize;

        for atom in atoms {
            bond_endpoints += atom.bonds.len();
            if let Some(element) = atom.resolved_element() {
                weight += element.atomic_weight();
                elements.insert(element);
            }
        }

        Self {
            atom_count: atoms.len(),
            bond_count: bond_endpoints / 2,
            molecular_weight: round_to_hundredths(weight),
            elements,
        }
    }

    /// Element symbols joined for display, e.g. `C, H, O`.
    pub fn element_symbols(&self) -> Vec<&'static str> {
        self.elements.iter().map(Element::symbol).collect()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
