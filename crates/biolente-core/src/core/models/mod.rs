//! Molecular data as far as Biolente needs it.
//!
//! Parsing of structure files belongs to the renderer. These types describe what the
//! renderer reports back ([`atom::AtomRecord`]), the statistics derived from it
//! ([`analysis::Analysis`]), and how uploaded files are classified
//! ([`structure::FileKind`]).

pub mod analysis;
pub mod atom;
pub mod element;
pub mod structure;
