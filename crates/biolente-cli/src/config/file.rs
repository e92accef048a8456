use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileThemeDefaults {
    pub palette: Option<String>,
    #[serde(rename = "monochromatic-base")]
    pub monochromatic_base: Option<String>,
    #[serde(rename = "font-size")]
    pub font_size: Option<u16>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "preferences-path")]
    pub preferences_path: Option<PathBuf>,
    pub defaults: Option<FileThemeDefaults>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
