use crate::cli::{PrefsArgs, PrefsCommands};
use crate::config::AppConfig;
use crate::error::Result;
use biolente::core::prefs::{PreferencesRepository, TomlFileRepository, keys};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: PrefsArgs, config: &AppConfig) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match args.command {
        PrefsCommands::Path => {
            writeln!(stdout, "{}", config.preferences_path.display())?;
        }
        PrefsCommands::Reset => {
            reset_file(&config.preferences_path)?;
            writeln!(stdout, "Preferences reset to defaults.")?;
        }
    }
    Ok(())
}

/// Resets the preferences file at `path`. A file that no longer parses is discarded.
pub fn reset_file(path: &Path) -> Result<()> {
    let mut repository = TomlFileRepository::open_or_discard(path)?;
    reset(&mut repository)?;
    info!("Preferences reset at {:?}", path);
    Ok(())
}

/// Removes every key Biolente stores. Unrelated keys are kept.
pub fn reset<P: PreferencesRepository>(repository: &mut P) -> Result<()> {
    for key in keys::ALL {
        repository.remove(key)?;
    }
    Ok(())
}
