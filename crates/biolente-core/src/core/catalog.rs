//! Catalog records and the explorer filter.
//!
//! The catalog contents are supplied by the embedding application; this module only
//! defines the record shape and how a query narrows it down.

use super::models::structure::StructureFormat;

/// Filter value that matches every kind or function.
pub const MATCH_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeEntry {
    pub id: String,
    pub name: String,
    pub formula: String,
    /// Biomolecule class, e.g. `protein` or `carbohydrate`.
    pub kind: String,
    /// Biological role, e.g. `energy` or `structural`.
    pub function: String,
    pub description: String,
    pub download_formats: Vec<StructureFormat>,
}

/// What the explorer page filters on.
///
/// `kind` and `function` of `None` or `"all"` match every entry. An empty search matches
/// every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub kind: Option<String>,
    pub function: Option<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn matches(&self, entry: &MoleculeEntry) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = entry.name.to_lowercase().contains(&term)
            || entry.formula.to_lowercase().contains(&term);

        matches_search
            && matches_exact(self.kind.as_deref(), &entry.kind)
            && matches_exact(self.function.as_deref(), &entry.function)
    }

    /// Entries matching the query, in catalog order.
    pub fn filter<'a>(&self, entries: &'a [MoleculeEntry]) -> Vec<&'a MoleculeEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

fn matches_exact(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some(MATCH_ALL) => true,
        Some(wanted) => wanted == value,
    }
}
