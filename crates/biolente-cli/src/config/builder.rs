use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::paths;
use biolente::core::color::{HexColor, Palette};
use biolente::engine::config::ThemeConfigBuilder;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Resolves the effective configuration.
///
/// Precedence, highest first: command-line flags, `-S KEY=VALUE` overrides, the config
/// file, built-in defaults.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &cli.config {
        Some(config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &cli.set_values)?;

    let preferences_path = match cli
        .prefs_file
        .clone()
        .or(file_config.preferences_path.clone())
    {
        Some(path) => path,
        None => paths::default_preferences_path()?,
    };

    let theme_file = file_config.defaults.unwrap_or_default();
    let palette_id = theme_file.palette.unwrap_or(defaults.palette);
    let palette = Palette::from_str(&palette_id)
        .map_err(|e| CliError::Config(format!("defaults.palette: {}", e)))?;
    let base_hex = theme_file
        .monochromatic_base
        .unwrap_or(defaults.monochromatic_base);
    let monochromatic_base = HexColor::parse(&base_hex)
        .map_err(|e| CliError::Config(format!("defaults.monochromatic-base: {}", e)))?;
    let font_size = theme_file.font_size.unwrap_or(defaults.font_size);

    let theme = ThemeConfigBuilder::new()
        .default_palette(palette)
        .default_monochromatic_base(monochromatic_base)
        .default_font_size(font_size)
        .build()
        .map_err(|e| CliError::Config(format!("defaults.font-size: {}", e)))?;

    debug!(
        "Effective configuration: preferences at {:?}, theme {:?}",
        preferences_path, theme
    );

    Ok(AppConfig {
        preferences_path,
        theme,
    })
}

fn apply_set_values(mut file_config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "preferences-path" => {
                file_config.preferences_path = Some(PathBuf::from(value_str));
            }
            "defaults.palette" => {
                file_config
                    .defaults
                    .get_or_insert_with(Default::default)
                    .palette = Some(value_str.to_string());
            }
            "defaults.monochromatic-base" => {
                file_config
                    .defaults
                    .get_or_insert_with(Default::default)
                    .monochromatic_base = Some(value_str.to_string());
            }
            "defaults.font-size" => {
                file_config
                    .defaults
                    .get_or_insert_with(Default::default)
                    .font_size = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unknown configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(file_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("biolente.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["biolente"];
        full.extend_from_slice(args);
        full.extend_from_slice(&["font", "show"]);
        Cli::parse_from(full)
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let cli = parse(&["--prefs-file", "/tmp/p.toml"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/p.toml"));
        assert_eq!(config.theme.default_palette, Palette::Cpk);
        assert_eq!(config.theme.default_monochromatic_base.to_string(), "#0072B2");
        assert_eq!(config.theme.default_font_size, 100);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            r##"
            preferences-path = "/from/file.toml"

            [defaults]
            palette = "deuteranopia"
            monochromatic-base = "#56B4E9"
            "##,
        );
        let cli = parse(&["-c", path_str(&config_path)]);

        let config = build_config(&cli).unwrap();

        assert_eq!(config.preferences_path, PathBuf::from("/from/file.toml"));
        assert_eq!(config.theme.default_palette, Palette::Deuteranopia);
        assert_eq!(config.theme.default_monochromatic_base.to_string(), "#56B4E9");
        assert_eq!(config.theme.default_font_size, 100);
    }

    #[test]
    fn set_values_override_the_file_and_flags_override_both() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            r##"
            preferences-path = "/from/file.toml"

            [defaults]
            palette = "deuteranopia"
            font-size = 90
            "##,
        );
        let cli = parse(&[
            "-c",
            path_str(&config_path),
            "-S",
            "defaults.palette=rainbow",
            "-S",
            "defaults.font-size=140",
            "-S",
            "preferences-path=/from/set.toml",
            "--prefs-file",
            "/from/flag.toml",
        ]);

        let config = build_config(&cli).unwrap();

        assert_eq!(config.preferences_path, PathBuf::from("/from/flag.toml"));
        assert_eq!(config.theme.default_palette, Palette::Rainbow);
        assert_eq!(config.theme.default_font_size, 140);
    }

    #[test]
    fn set_value_replaces_file_preferences_path() {
        let cli = parse(&["-S", "preferences-path=/from/set.toml"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.preferences_path, PathBuf::from("/from/set.toml"));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["defaults.palette", "defaults.font-size=big", "theme.dark=true"] {
            let cli = parse(&["--prefs-file", "/tmp/p.toml", "-S", bad]);
            assert!(
                matches!(build_config(&cli), Err(CliError::Config(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn invalid_default_values_are_configuration_errors() {
        for bad in [
            "defaults.palette=sepia",
            "defaults.monochromatic-base=blue",
            "defaults.font-size=155",
        ] {
            let cli = parse(&["--prefs-file", "/tmp/p.toml", "-S", bad]);
            assert!(
                matches!(build_config(&cli), Err(CliError::Config(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}
