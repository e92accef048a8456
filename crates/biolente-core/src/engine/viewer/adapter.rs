use super::renderer::Renderer;
use super::style::{StyleSpec, StylingMode, core_element_colors, element_colors_with_halogens};
use crate::core::color::palette::CPK_SCHEME;
use crate::core::color::{ColorScheme, HexColor};
use crate::core::models::analysis::Analysis;
use crate::core::models::structure::StructureFormat;
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument, warn};

pub const ZOOM_IN_FACTOR: f64 = 1.2;
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// A rendered frame ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngSnapshot {
    pub data_url: String,
}

impl PngSnapshot {
    pub const SUGGESTED_FILE_NAME: &'static str = "molecule.png";

    pub fn suggested_file_name(&self) -> &'static str {
        Self::SUGGESTED_FILE_NAME
    }
}

struct LoadedStructure<M> {
    content: String,
    format: StructureFormat,
    analysis: Analysis,
    model: M,
}

/// Drives one rendering surface.
///
/// The adapter starts out pending, before the rendering library is available, and becomes
/// ready once [`initialize`](Self::initialize) hands it a renderer and paints the first
/// frame, so a ready adapter always has something to export. At most one structure
/// is loaded at a time. The most recent scheme and styling mode are remembered, so a
/// structure loaded later is styled the same way as the one it replaces.
pub struct ViewerAdapter<R: Renderer> {
    renderer: Option<R>,
    loaded: Option<LoadedStructure<R::Model>>,
    scheme: ColorScheme,
    mode: StylingMode,
}

impl<R: Renderer> Default for ViewerAdapter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> ViewerAdapter<R> {
    pub fn new() -> Self {
        Self {
            renderer: None,
            loaded: None,
            scheme: CPK_SCHEME,
            mode: StylingMode::ElementPalette,
        }
    }

    /// Makes the adapter ready and paints the initial background.
    pub fn initialize(&mut self, renderer: R, high_contrast: bool) {
        self.renderer = Some(renderer);
        info!("Viewer ready.");
        self.set_background(high_contrast);
    }

    pub fn is_ready(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }

    pub fn has_structure(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.loaded.as_ref().map(|l| &l.analysis)
    }

    pub fn loaded_format(&self) -> Option<StructureFormat> {
        self.loaded.as_ref().map(|l| l.format)
    }

    pub fn loaded_content(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.content.as_str())
    }

    pub fn styling(&self) -> (ColorScheme, StylingMode) {
        (self.scheme, self.mode)
    }

    /// Replaces whatever is shown with the structure in `content`.
    ///
    /// The previous model is removed before the new one is added, so if the renderer
    /// rejects `content` the viewer is left empty and repainted without it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] before initialization and
    /// [`EngineError::UnparsableStructure`] if the renderer rejects the content.
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub fn load_structure(
        &mut self,
        content: &str,
        format: StructureFormat,
    ) -> Result<Analysis, EngineError> {
        let renderer = self.renderer.as_mut().ok_or(EngineError::NotReady)?;

        renderer.remove_all_models();
        self.loaded = None;

        let model = match renderer.add_model(content, format) {
            Ok(model) => model,
            Err(source) => {
                warn!("Renderer rejected the structure: {}", source);
                renderer.render();
                return Err(EngineError::UnparsableStructure { format, source });
            }
        };

        apply_style(renderer, &model, &self.scheme, self.mode);
        renderer.zoom_to();
        renderer.render();

        let analysis = Analysis::from_atoms(&renderer.selected_atoms(&model));
        info!(
            "Loaded {} structure: {} atoms, {} bonds, {:.2} g/mol.",
            format, analysis.atom_count, analysis.bond_count, analysis.molecular_weight
        );

        self.loaded = Some(LoadedStructure {
            content: content.to_string(),
            format,
            analysis: analysis.clone(),
            model,
        });
        Ok(analysis)
    }

    /// Removes the loaded structure, if any.
    pub fn clear(&mut self) {
        if self.loaded.take().is_none() {
            return;
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.remove_all_models();
            renderer.render();
        }
        debug!("Viewer cleared.");
    }

    /// Restyles the loaded structure in place and remembers the styling for later loads.
    pub fn apply_color_scheme(&mut self, scheme: &ColorScheme, mode: StylingMode) {
        self.scheme = *scheme;
        self.mode = mode;

        let (Some(renderer), Some(loaded)) = (self.renderer.as_mut(), self.loaded.as_ref())
        else {
            return;
        };
        debug!("Restyling structure with {:?} mode.", mode);
        apply_style(renderer, &loaded.model, scheme, mode);
        renderer.render();
    }

    /// Black background in high-contrast mode, white otherwise.
    pub fn set_background(&mut self, high_contrast: bool) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let color = if high_contrast {
            HexColor::BLACK
        } else {
            HexColor::WHITE
        };
        renderer.set_background(color);
        renderer.render();
    }

    /// Multiplies the camera zoom. Non-positive and non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            debug!("Ignoring zoom factor {}.", factor);
            return;
        }
        if let Some(renderer) = self.renderer_with_structure() {
            renderer.zoom(factor);
            renderer.render();
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(ZOOM_OUT_FACTOR);
    }

    /// Fits the camera back to the whole structure.
    pub fn reset_view(&mut self) {
        if let Some(renderer) = self.renderer_with_structure() {
            renderer.zoom_to();
            renderer.render();
        }
    }

    /// Captures the current frame. Without a structure this is the bare background.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] before initialization and
    /// [`EngineError::ExportUnavailable`] if the renderer cannot produce an image.
    pub fn export_image(&self) -> Result<PngSnapshot, EngineError> {
        let renderer = self.renderer.as_ref().ok_or(EngineError::NotReady)?;
        let data_url = renderer
            .png_data_url()
            .map_err(|e| EngineError::ExportUnavailable {
                reason: e.to_string(),
            })?;
        Ok(PngSnapshot { data_url })
    }

    fn renderer_with_structure(&mut self) -> Option<&mut R> {
        if self.loaded.is_some() {
            self.renderer.as_mut()
        } else {
            None
        }
    }
}

fn apply_style<R: Renderer>(
    renderer: &mut R,
    model: &R::Model,
    scheme: &ColorScheme,
    mode: StylingMode,
) {
    match mode {
        StylingMode::HighContrast => {
            renderer.set_style(model, &StyleSpec::by_element(core_element_colors(scheme)));
        }
        StylingMode::ElementPalette => {
            renderer.set_style(model, &StyleSpec::plain());
            renderer.set_color_by_element(model, &element_colors_with_halogens(scheme));
        }
        StylingMode::Monochromatic => {
            renderer.set_style(model, &StyleSpec::uniform(scheme.carbon));
        }
        StylingMode::Default => {
            renderer.set_style(model, &StyleSpec::plain());
        }
    }
}
