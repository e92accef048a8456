use super::config::{FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, ThemeConfig, validate_font_size};
use super::error::EngineError;
use super::viewer::StylingMode;
use crate::core::color::{ColorScheme, HexColor, Palette, resolver};
use crate::core::prefs::{PreferencesRepository, keys};
use std::str::FromStr;
use tracing::{info, warn};

/// The user's palette and accessibility preferences.
///
/// State is read from the repository once, in [`restore`](Self::restore), and written back
/// after every mutation. A mutation only takes effect in memory after its write succeeded,
/// so the store never reports a value the repository does not hold.
#[derive(Debug)]
pub struct PaletteStore<P: PreferencesRepository> {
    repository: P,
    active_palette: Palette,
    high_contrast: bool,
    monochromatic_base: HexColor,
    font_size_percent: u16,
}

impl<P: PreferencesRepository> PaletteStore<P> {
    /// Builds the store from whatever the repository holds.
    ///
    /// Missing keys take the configured defaults. Values that cannot be interpreted are
    /// logged and replaced by the defaults too; they are not rewritten until the user
    /// changes that preference.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Preferences`] if the repository cannot be read.
    pub fn restore(repository: P, config: &ThemeConfig) -> Result<Self, EngineError> {
        let active_palette = read_or_default(
            &repository,
            keys::PALETTE,
            config.default_palette,
            |raw| Palette::from_str(raw).ok(),
        )?;
        let high_contrast = read_or_default(&repository, keys::HIGH_CONTRAST, false, |raw| {
            match raw {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            }
        })?;
        let monochromatic_base = read_or_default(
            &repository,
            keys::MONOCHROMATIC_BASE,
            config.default_monochromatic_base,
            |raw| HexColor::parse(raw).ok(),
        )?;
        let font_size_percent = read_or_default(
            &repository,
            keys::FONT_SIZE,
            config.default_font_size,
            |raw| {
                raw.parse::<u16>()
                    .ok()
                    .and_then(|v| validate_font_size(v).ok())
            },
        )?;

        info!(
            "Restored preferences: palette={}, high_contrast={}, mono_base={}, font_size={}%",
            active_palette, high_contrast, monochromatic_base, font_size_percent
        );

        Ok(Self {
            repository,
            active_palette,
            high_contrast,
            monochromatic_base,
            font_size_percent,
        })
    }

    pub fn change_palette(&mut self, palette: Palette) -> Result<(), EngineError> {
        self.repository.set(keys::PALETTE, palette.id())?;
        self.active_palette = palette;
        info!("Palette changed to {}.", palette);
        Ok(())
    }

    /// Like [`change_palette`](Self::change_palette), from a persisted or user-typed id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Color`] with `InvalidPaletteId` for unknown ids; nothing is
    /// written in that case.
    pub fn change_palette_id(&mut self, id: &str) -> Result<(), EngineError> {
        let palette = Palette::from_str(id)?;
        self.change_palette(palette)
    }

    /// Flips high contrast and returns the new value.
    pub fn toggle_high_contrast(&mut self) -> Result<bool, EngineError> {
        let next = !self.high_contrast;
        let value = if next { "true" } else { "false" };
        self.repository.set(keys::HIGH_CONTRAST, value)?;
        self.high_contrast = next;
        info!("High contrast {}.", if next { "enabled" } else { "disabled" });
        Ok(next)
    }

    /// Sets the base colour of the monochromatic palette from `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Color`] with `InvalidColorFormat` for malformed input.
    pub fn change_monochromatic_base(&mut self, hex: &str) -> Result<HexColor, EngineError> {
        let base = HexColor::parse(hex)?;
        self.repository.set(keys::MONOCHROMATIC_BASE, &base.to_string())?;
        self.monochromatic_base = base;
        info!("Monochromatic base changed to {}.", base);
        Ok(base)
    }

    /// Steps the font size by 10% in either direction, saturating at 80% and 150%.
    /// Returns the new size.
    pub fn adjust_font_size(&mut self, increase: bool) -> Result<u16, EngineError> {
        let next = if increase {
            (self.font_size_percent + FONT_SIZE_STEP).min(FONT_SIZE_MAX)
        } else {
            self.font_size_percent
                .saturating_sub(FONT_SIZE_STEP)
                .max(FONT_SIZE_MIN)
        };
        self.repository.set(keys::FONT_SIZE, &next.to_string())?;
        self.font_size_percent = next;
        info!("Font size set to {}%.", next);
        Ok(next)
    }

    /// The scheme in effect: the high-contrast scheme while high contrast is on, otherwise
    /// the active palette's.
    pub fn current_scheme(&self) -> ColorScheme {
        resolver::resolve(
            self.active_palette,
            self.high_contrast,
            self.monochromatic_base,
        )
    }

    pub fn styling_mode(&self) -> StylingMode {
        StylingMode::for_preferences(self.active_palette, self.high_contrast)
    }

    pub fn active_palette(&self) -> Palette {
        self.active_palette
    }

    pub fn is_high_contrast(&self) -> bool {
        self.high_contrast
    }

    pub fn monochromatic_base(&self) -> HexColor {
        self.monochromatic_base
    }

    pub fn font_size_percent(&self) -> u16 {
        self.font_size_percent
    }

    pub fn repository(&self) -> &P {
        &self.repository
    }

    pub fn into_repository(self) -> P {
        self.repository
    }
}

fn read_or_default<P, T>(
    repository: &P,
    key: &str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, EngineError>
where
    P: PreferencesRepository,
    T: Copy,
{
    let Some(raw) = repository.get(key)? else {
        return Ok(default);
    };
    match parse(&raw) {
        Some(value) => Ok(value),
        None => {
            warn!(
                "Ignoring invalid stored value {:?} for '{}', using the default.",
                raw, key
            );
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::ColorError;
    use crate::core::color::palette::{
        CPK_SCHEME, HIGH_CONTRAST_SCHEME, PROTANOPIA_SCHEME, TRITANOPIA_SCHEME,
    };
    use crate::core::prefs::{
        MemoryRepository, PreferenceListener, PreferencesError, SubscriptionId,
        TomlFileRepository,
    };
    use crate::engine::config::ThemeConfigBuilder;
    use std::io;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn fresh() -> PaletteStore<MemoryRepository> {
        PaletteStore::restore(MemoryRepository::new(), &ThemeConfig::default()).unwrap()
    }

    /// Reads succeed, every write fails.
    #[derive(Default)]
    struct ReadOnlyRepository(MemoryRepository);

    impl PreferencesRepository for ReadOnlyRepository {
        fn get(&self, key: &str) -> Result<Option<String>, PreferencesError> {
            self.0.get(key)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferencesError> {
            Err(PreferencesError::Io {
                path: PathBuf::from("read-only"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
        fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
            self.set(key, "")
        }
        fn subscribe(&mut self, listener: PreferenceListener) -> SubscriptionId {
            self.0.subscribe(listener)
        }
        fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            self.0.unsubscribe(id)
        }
    }

    #[test]
    fn fresh_store_uses_defaults() {
        let store = fresh();
        assert_eq!(store.active_palette(), Palette::Cpk);
        assert!(!store.is_high_contrast());
        assert_eq!(store.monochromatic_base().to_string(), "#0072B2");
        assert_eq!(store.font_size_percent(), 100);
        assert_eq!(store.current_scheme(), CPK_SCHEME);
    }

    #[test]
    fn restore_uses_configured_defaults_for_missing_keys() {
        let config = ThemeConfigBuilder::new()
            .default_palette(Palette::Rainbow)
            .default_font_size(120)
            .build()
            .unwrap();
        let store = PaletteStore::restore(MemoryRepository::new(), &config).unwrap();
        assert_eq!(store.active_palette(), Palette::Rainbow);
        assert_eq!(store.font_size_percent(), 120);
    }

    #[test]
    fn restore_reads_stored_values() {
        let repo = MemoryRepository::with_values([
            (keys::PALETTE, "tritanopia"),
            (keys::HIGH_CONTRAST, "true"),
            (keys::MONOCHROMATIC_BASE, "#cc79a7"),
            (keys::FONT_SIZE, "130"),
        ]);
        let store = PaletteStore::restore(repo, &ThemeConfig::default()).unwrap();
        assert_eq!(store.active_palette(), Palette::Tritanopia);
        assert!(store.is_high_contrast());
        assert_eq!(store.monochromatic_base().to_string(), "#CC79A7");
        assert_eq!(store.font_size_percent(), 130);
    }

    #[test]
    fn restore_ignores_invalid_stored_values() {
        let repo = MemoryRepository::with_values([
            (keys::PALETTE, "viridis"),
            (keys::HIGH_CONTRAST, "yes"),
            (keys::MONOCHROMATIC_BASE, "blue"),
            (keys::FONT_SIZE, "175"),
        ]);
        let store = PaletteStore::restore(repo, &ThemeConfig::default()).unwrap();
        assert_eq!(store.active_palette(), Palette::Cpk);
        assert!(!store.is_high_contrast());
        assert_eq!(store.monochromatic_base().to_string(), "#0072B2");
        assert_eq!(store.font_size_percent(), 100);
        assert_eq!(
            store.repository().get(keys::PALETTE).unwrap().as_deref(),
            Some("viridis")
        );
    }

    #[test]
    fn off_step_font_size_is_ignored() {
        let repo = MemoryRepository::with_values([(keys::FONT_SIZE, "95")]);
        let store = PaletteStore::restore(repo, &ThemeConfig::default()).unwrap();
        assert_eq!(store.font_size_percent(), 100);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut store = fresh();
        store.change_palette(Palette::Deuteranopia).unwrap();
        store.toggle_high_contrast().unwrap();
        store.change_monochromatic_base("#d55e00").unwrap();
        store.adjust_font_size(true).unwrap();

        let repo = store.repository();
        assert_eq!(repo.get(keys::PALETTE).unwrap().as_deref(), Some("deuteranopia"));
        assert_eq!(repo.get(keys::HIGH_CONTRAST).unwrap().as_deref(), Some("true"));
        assert_eq!(
            repo.get(keys::MONOCHROMATIC_BASE).unwrap().as_deref(),
            Some("#D55E00")
        );
        assert_eq!(repo.get(keys::FONT_SIZE).unwrap().as_deref(), Some("110"));
    }

    #[test]
    fn preferences_survive_a_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut store = PaletteStore::restore(
            TomlFileRepository::open(&path).unwrap(),
            &ThemeConfig::default(),
        )
        .unwrap();
        store.change_palette(Palette::Monochromatic).unwrap();
        store.change_monochromatic_base("#009E73").unwrap();
        store.adjust_font_size(false).unwrap();
        let before = store.current_scheme();
        drop(store);

        let restored = PaletteStore::restore(
            TomlFileRepository::open(&path).unwrap(),
            &ThemeConfig::default(),
        )
        .unwrap();
        assert_eq!(restored.active_palette(), Palette::Monochromatic);
        assert_eq!(restored.monochromatic_base().to_string(), "#009E73");
        assert_eq!(restored.font_size_percent(), 90);
        assert_eq!(restored.current_scheme(), before);
    }

    #[test]
    fn high_contrast_overrides_and_then_restores_the_palette() {
        let mut store = fresh();
        store.change_palette(Palette::Protanopia).unwrap();
        assert_eq!(store.current_scheme(), PROTANOPIA_SCHEME);
        assert_eq!(store.styling_mode(), StylingMode::Default);

        assert!(store.toggle_high_contrast().unwrap());
        assert_eq!(store.current_scheme(), HIGH_CONTRAST_SCHEME);
        assert_eq!(store.styling_mode(), StylingMode::HighContrast);

        assert!(!store.toggle_high_contrast().unwrap());
        assert_eq!(store.current_scheme(), PROTANOPIA_SCHEME);
        assert_eq!(store.styling_mode(), StylingMode::Default);
        assert_eq!(store.active_palette(), Palette::Protanopia);
    }

    #[test]
    fn all_twelve_configurations_are_reachable_from_each_other() {
        let mut store = fresh();
        for from_contrast in [false, true] {
            for from_palette in Palette::ALL {
                for to_contrast in [false, true] {
                    for to_palette in Palette::ALL {
                        store.change_palette(from_palette).unwrap();
                        if store.is_high_contrast() != from_contrast {
                            store.toggle_high_contrast().unwrap();
                        }
                        store.change_palette(to_palette).unwrap();
                        if store.is_high_contrast() != to_contrast {
                            store.toggle_high_contrast().unwrap();
                        }
                        assert_eq!(store.active_palette(), to_palette);
                        assert_eq!(store.is_high_contrast(), to_contrast);
                        let expected = resolver::resolve(
                            to_palette,
                            to_contrast,
                            store.monochromatic_base(),
                        );
                        assert_eq!(store.current_scheme(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn monochromatic_scheme_follows_the_base() {
        let mut store = fresh();
        store.change_palette(Palette::Monochromatic).unwrap();
        store.change_monochromatic_base("#E69F00").unwrap();
        let scheme = store.current_scheme();
        assert_eq!(scheme.carbon.to_string(), "#E69F00");
        assert_eq!(store.styling_mode(), StylingMode::Monochromatic);
    }

    #[test]
    fn invalid_inputs_change_nothing() {
        let mut store = fresh();
        store.change_palette(Palette::Tritanopia).unwrap();

        let err = store.change_palette_id("sepia").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Color {
                source: ColorError::InvalidPaletteId { .. }
            }
        ));
        let err = store.change_monochromatic_base("#12345").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Color {
                source: ColorError::InvalidColorFormat { .. }
            }
        ));

        assert_eq!(store.active_palette(), Palette::Tritanopia);
        assert_eq!(store.current_scheme(), TRITANOPIA_SCHEME);
        assert_eq!(store.monochromatic_base().to_string(), "#0072B2");
    }

    #[test]
    fn font_size_saturates_at_both_ends() {
        let mut store = fresh();
        for _ in 0..10 {
            store.adjust_font_size(true).unwrap();
        }
        assert_eq!(store.font_size_percent(), 150);
        assert_eq!(store.adjust_font_size(true).unwrap(), 150);

        for _ in 0..10 {
            store.adjust_font_size(false).unwrap();
        }
        assert_eq!(store.font_size_percent(), 80);
        assert_eq!(store.adjust_font_size(false).unwrap(), 80);
    }

    #[test]
    fn failed_writes_leave_state_untouched() {
        let mut store =
            PaletteStore::restore(ReadOnlyRepository::default(), &ThemeConfig::default())
                .unwrap();

        assert!(matches!(
            store.change_palette(Palette::Rainbow),
            Err(EngineError::Preferences { .. })
        ));
        assert!(store.toggle_high_contrast().is_err());
        assert!(store.change_monochromatic_base("#FFFFFF").is_err());
        assert!(store.adjust_font_size(true).is_err());

        assert_eq!(store.active_palette(), Palette::Cpk);
        assert!(!store.is_high_contrast());
        assert_eq!(store.monochromatic_base().to_string(), "#0072B2");
        assert_eq!(store.font_size_percent(), 100);
    }
}
