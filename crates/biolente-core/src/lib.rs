//! # Biolente Core Library
//!
//! Colour palette, accessibility theming and 3D viewer adapter logic for the Biolente
//! biomolecule explorer.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the pure colour arithmetic can be
//! tested in isolation from the stateful stores and from any concrete rendering backend.
//!
//! - **[`core`]: The Foundation.** Stateless data and pure functions: hex colours, the fixed
//!   palette tables and the monochromatic resolver, the element lookup table and structure
//!   analysis, preference repositories, and catalog filtering.
//!
//! - **[`engine`]: The Stateful Layer.** The `PaletteStore` that owns the user's palette and
//!   accessibility preferences, and the `ViewerAdapter` that drives a rendering surface
//!   through the strongly typed [`engine::viewer::Renderer`] capability trait.
//!
//! - **[`workflows`]: The Public API.** Ties the store and the adapter together: a
//!   `ViewerSession` propagates palette changes into the viewer, and the `Importer` routes
//!   uploaded files either to the renderer or to a display-only image slot.

pub mod core;
pub mod engine;
pub mod workflows;
