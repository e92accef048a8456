//! # Workflows Module
//!
//! High-level entry points that tie the palette store and the viewer together.
//!
//! ## Architecture
//!
//! - **Viewer Session** ([`session`]) - Owns a `PaletteStore` and a `ViewerAdapter` and
//!   pushes every preference change into the viewer
//! - **File Import** ([`import`]) - Classifies uploaded files by extension and routes them to
//!   the viewer or to a display-only image slot

pub mod import;
pub mod session;
