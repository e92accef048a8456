use thiserror::Error;

use super::viewer::RendererError;
use crate::core::color::ColorError;
use crate::core::models::structure::StructureFormat;
use crate::core::prefs::PreferencesError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Color error: {source}")]
    Color {
        #[from]
        source: ColorError,
    },

    #[error("Failed to persist preferences: {source}")]
    Preferences {
        #[from]
        source: PreferencesError,
    },

    #[error("The renderer could not parse the {format} structure: {source}")]
    UnparsableStructure {
        format: StructureFormat,
        #[source]
        source: RendererError,
    },

    #[error("Image export is unavailable: {reason}")]
    ExportUnavailable { reason: String },

    #[error("The viewer is not ready yet")]
    NotReady,

    #[error("Unsupported file '{file_name}'")]
    UnsupportedFile { file_name: String },
}
