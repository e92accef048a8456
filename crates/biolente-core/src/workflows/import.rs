use super::session::ViewerSession;
use crate::core::models::analysis::Analysis;
use crate::core::models::structure::{FileKind, ImageFormat, StructureFormat};
use crate::core::prefs::PreferencesRepository;
use crate::engine::error::EngineError;
use crate::engine::viewer::Renderer;
use tracing::{info, warn};

/// What the import page currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Empty,
    /// A structure handed to the viewer.
    Structure {
        file_name: String,
        format: StructureFormat,
        analysis: Analysis,
    },
    /// An image shown as-is; the renderer never sees it.
    Image {
        file_name: String,
        format: ImageFormat,
        bytes: Vec<u8>,
    },
}

/// Routes uploaded files by extension.
#[derive(Debug, Default)]
pub struct Importer {
    display: DisplayState,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Imports one file.
    ///
    /// Structures go to the session's viewer; images only replace the display. If the
    /// renderer rejects a structure the viewer is left empty and so is the display.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFile`] for unknown extensions, in which case
    /// nothing changes, or any error from loading the structure.
    pub fn import<R, P>(
        &mut self,
        session: &mut ViewerSession<'_, R, P>,
        file_name: &str,
        content: &[u8],
    ) -> Result<&DisplayState, EngineError>
    where
        R: Renderer,
        P: PreferencesRepository,
    {
        let Some(kind) = FileKind::sniff(file_name) else {
            warn!("Rejected upload '{}': unsupported extension.", file_name);
            return Err(EngineError::UnsupportedFile {
                file_name: file_name.to_string(),
            });
        };
        info!("Importing '{}' as {}.", file_name, kind);

        let next = match kind {
            FileKind::Structure(format) => {
                let text = String::from_utf8_lossy(content);
                match session.load_structure(&text, format) {
                    Ok(analysis) => DisplayState::Structure {
                        file_name: file_name.to_string(),
                        format,
                        analysis,
                    },
                    Err(e) => {
                        self.display = DisplayState::Empty;
                        return Err(e);
                    }
                }
            }
            FileKind::Image(format) => DisplayState::Image {
                file_name: file_name.to_string(),
                format,
                bytes: content.to_vec(),
            },
        };
        self.display = next;
        Ok(&self.display)
    }

    /// Clears the display and whatever structure the viewer holds.
    pub fn reset<R, P>(&mut self, session: &mut ViewerSession<'_, R, P>)
    where
        R: Renderer,
        P: PreferencesRepository,
    {
        self.display = DisplayState::Empty;
        session.clear_structure();
    }
}
