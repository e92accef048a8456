use crate::core::color::{HexColor, Palette};
use crate::core::models::analysis::Analysis;
use crate::core::models::structure::StructureFormat;
use crate::core::prefs::PreferencesRepository;
use crate::engine::error::EngineError;
use crate::engine::events::{EventReporter, SessionEvent};
use crate::engine::palette_store::PaletteStore;
use crate::engine::viewer::{PngSnapshot, Renderer, ViewerAdapter};
use tracing::{debug, instrument};

/// A palette store wired to a viewer.
///
/// Changes flow one way, from the store to the viewer: every palette, contrast or base
/// colour change re-applies the scheme in effect, and contrast changes also repaint the
/// background. Changes made while the viewer is pending or empty are picked up on
/// initialization or on the next load.
pub struct ViewerSession<'a, R: Renderer, P: PreferencesRepository> {
    store: PaletteStore<P>,
    adapter: ViewerAdapter<R>,
    reporter: EventReporter<'a>,
}

impl<'a, R: Renderer, P: PreferencesRepository> ViewerSession<'a, R, P> {
    pub fn new(store: PaletteStore<P>) -> Self {
        Self::with_reporter(store, EventReporter::new())
    }

    pub fn with_reporter(store: PaletteStore<P>, reporter: EventReporter<'a>) -> Self {
        let mut adapter = ViewerAdapter::new();
        adapter.apply_color_scheme(&store.current_scheme(), store.styling_mode());
        Self {
            store,
            adapter,
            reporter,
        }
    }

    /// Hands the session its renderer once the rendering library is available.
    pub fn initialize(&mut self, renderer: R) {
        self.adapter.initialize(renderer, self.store.is_high_contrast());
        self.reporter.report(SessionEvent::BackgroundChanged {
            high_contrast: self.store.is_high_contrast(),
        });
    }

    pub fn store(&self) -> &PaletteStore<P> {
        &self.store
    }

    pub fn adapter(&self) -> &ViewerAdapter<R> {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut ViewerAdapter<R> {
        &mut self.adapter
    }

    #[instrument(skip(self, content))]
    pub fn load_structure(
        &mut self,
        content: &str,
        format: StructureFormat,
    ) -> Result<Analysis, EngineError> {
        let analysis = self.adapter.load_structure(content, format)?;
        self.reporter.report(SessionEvent::AnalysisReady(analysis.clone()));
        Ok(analysis)
    }

    pub fn clear_structure(&mut self) {
        self.adapter.clear();
    }

    pub fn change_palette(&mut self, palette: Palette) -> Result<(), EngineError> {
        self.store.change_palette(palette)?;
        self.sync_styling();
        Ok(())
    }

    pub fn change_palette_id(&mut self, id: &str) -> Result<(), EngineError> {
        self.store.change_palette_id(id)?;
        self.sync_styling();
        Ok(())
    }

    pub fn toggle_high_contrast(&mut self) -> Result<bool, EngineError> {
        let high_contrast = self.store.toggle_high_contrast()?;
        self.adapter.set_background(high_contrast);
        self.reporter.report(SessionEvent::BackgroundChanged { high_contrast });
        self.sync_styling();
        Ok(high_contrast)
    }

    pub fn change_monochromatic_base(&mut self, hex: &str) -> Result<HexColor, EngineError> {
        let base = self.store.change_monochromatic_base(hex)?;
        self.sync_styling();
        Ok(base)
    }

    pub fn adjust_font_size(&mut self, increase: bool) -> Result<u16, EngineError> {
        let percent = self.store.adjust_font_size(increase)?;
        self.reporter.report(SessionEvent::FontSizeChanged { percent });
        Ok(percent)
    }

    pub fn zoom_in(&mut self) {
        self.adapter.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.adapter.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.adapter.reset_view();
    }

    pub fn export_image(&self) -> Result<PngSnapshot, EngineError> {
        self.adapter.export_image()
    }

    fn sync_styling(&mut self) {
        let scheme = self.store.current_scheme();
        let mode = self.store.styling_mode();
        debug!("Propagating {:?} styling to the viewer.", mode);
        self.adapter.apply_color_scheme(&scheme, mode);
        self.reporter.report(SessionEvent::SchemeApplied { scheme, mode });
    }
}
