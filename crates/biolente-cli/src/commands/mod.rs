pub mod classify;
pub mod contrast;
pub mod font;
pub mod palette;
pub mod prefs;

use crate::config::AppConfig;
use crate::error::Result;
use biolente::core::prefs::TomlFileRepository;
use biolente::engine::palette_store::PaletteStore;
use tracing::debug;

/// Restores the palette store backed by the configured preferences file.
pub fn open_store(config: &AppConfig) -> Result<PaletteStore<TomlFileRepository>> {
    debug!("Opening preferences at {:?}", config.preferences_path);
    let repository = TomlFileRepository::open(&config.preferences_path)?;
    Ok(PaletteStore::restore(repository, &config.theme)?)
}
