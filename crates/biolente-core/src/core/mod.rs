//! # Core Module
//!
//! Stateless building blocks of Biolente.
//!
//! - **Colours** ([`color`]) - Hex colours, the nine-slot `ColorScheme`, palettes and the
//!   scheme resolver with its brightness arithmetic
//! - **Molecular Models** ([`models`]) - Elements and atomic weights, atom records reported
//!   by a renderer, structure formats and the derived `Analysis`
//! - **Preferences** ([`prefs`]) - The injectable key-value repository used to persist UI
//!   preferences, with in-memory and TOML-file implementations
//! - **Catalog** ([`catalog`]) - Filtering of the molecule catalog shown by the explorer

pub mod catalog;
pub mod color;
pub mod models;
pub mod prefs;
