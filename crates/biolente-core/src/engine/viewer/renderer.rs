use super::style::{ElementColorMap, StyleSpec};
use crate::core::color::HexColor;
use crate::core::models::atom::AtomRecord;
use crate::core::models::structure::StructureFormat;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("Structure rejected: {0}")]
    Rejected(String),

    #[error("Snapshot failed: {0}")]
    Snapshot(String),
}

/// The capabilities Biolente needs from a 3D molecular rendering surface.
///
/// Implementations own the parsing of structure files; the adapter only hands over text
/// and reads back atoms. Calls that change the scene take effect on the next [`render`].
///
/// [`render`]: Renderer::render
pub trait Renderer {
    /// Handle to a model that was added to the scene.
    type Model;

    fn add_model(
        &mut self,
        content: &str,
        format: StructureFormat,
    ) -> Result<Self::Model, RendererError>;

    fn selected_atoms(&self, model: &Self::Model) -> Vec<AtomRecord>;

    /// Replaces the style of every atom of `model`.
    fn set_style(&mut self, model: &Self::Model, style: &StyleSpec);

    /// Colours the atoms of `model` by element. Elements missing from `colors` keep the
    /// renderer's default.
    fn set_color_by_element(&mut self, model: &Self::Model, colors: &ElementColorMap);

    fn set_background(&mut self, color: HexColor);

    /// Fits the camera to everything in the scene.
    fn zoom_to(&mut self);

    /// Multiplies the camera zoom by `factor`.
    fn zoom(&mut self, factor: f64);

    fn render(&mut self);

    fn remove_all_models(&mut self);

    /// The current frame as a `data:image/png;base64,...` URL.
    fn png_data_url(&self) -> Result<String, RendererError>;
}
