//! # Engine Module
//!
//! Stateful components of Biolente.
//!
//! ## Overview
//!
//! The engine holds everything that changes over a session: the user's palette and
//! accessibility preferences, and the rendering surface those preferences are applied to.
//! Both are plain owned values; nothing here reaches for global state.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Theme defaults and the font size domain
//! - **Palette Store** ([`palette_store`]) - Restores, mutates and persists preferences and
//!   derives the scheme in effect
//! - **Session Events** ([`events`]) - Callback-based notifications for the surrounding UI
//! - **Viewer** ([`viewer`]) - The `Renderer` capability trait, style descriptions and the
//!   `ViewerAdapter` lifecycle
//! - **Error Handling** ([`error`]) - Engine-level error type

pub mod config;
pub mod error;
pub mod events;
pub mod palette_store;
pub mod viewer;
