use crate::error::{CliError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("br", "biolente", "biolente")
        .ok_or_else(|| CliError::Config("Could not determine config directory path.".to_string()))
}

/// `<config dir>/preferences.toml`, following the platform's conventions.
pub fn default_preferences_path() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(PREFERENCES_FILE_NAME))
}
