//! The 3D viewer: a typed renderer contract and the adapter that drives it.

pub mod adapter;
pub mod renderer;
pub mod style;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{PngSnapshot, ViewerAdapter};
pub use renderer::{Renderer, RendererError};
pub use style::{Coloring, ElementColorMap, StyleSpec, StylingMode};
