use biolente::engine::config::ThemeConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub preferences_path: PathBuf,
    pub theme: ThemeConfig,
}
