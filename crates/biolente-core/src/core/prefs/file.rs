use super::{
    Listeners, PreferenceChange, PreferenceListener, PreferencesError, PreferencesRepository,
    SubscriptionId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesDocument {
    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

/// A repository persisted as a TOML document with a single `[preferences]` table.
///
/// The file is read once on [`open`](Self::open) and rewritten in full after every
/// mutation. Each rewrite goes to a temporary file in the same directory that is then
/// renamed over the old one, so the document on disk is always complete. A missing file
/// is treated as empty and created on the first write, along with its parent directories.
#[derive(Debug)]
pub struct TomlFileRepository {
    path: PathBuf,
    values: BTreeMap<String, String>,
    listeners: Listeners,
}

impl TomlFileRepository {
    /// Opens the repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::Io`] if the file exists but cannot be read, and
    /// [`PreferencesError::Parse`] if it is not a valid preferences document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => {
                let document: PreferencesDocument =
                    toml::from_str(&content).map_err(|source| PreferencesError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                debug!(
                    "Loaded {} preference(s) from {:?}",
                    document.preferences.len(),
                    path
                );
                document.preferences
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No preferences file at {:?}, starting empty.", path);
                BTreeMap::new()
            }
            Err(source) => return Err(PreferencesError::Io { path, source }),
        };

        Ok(Self {
            path,
            values,
            listeners: Listeners::default(),
        })
    }

    /// Opens the repository at `path`, discarding the file if it cannot be parsed.
    ///
    /// Unreadable content is logged and removed from disk, leaving an empty repository.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::Io`] if the file cannot be read or removed.
    pub fn open_or_discard(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        match Self::open(path.clone()) {
            Err(PreferencesError::Parse { source, .. }) => {
                warn!("Discarding unreadable preferences file {:?}: {}", path, source);
                fs::remove_file(&path).map_err(|source| PreferencesError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(Self {
                    path,
                    values: BTreeMap::new(),
                    listeners: Listeners::default(),
                })
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), PreferencesError> {
        let io_error = |source| PreferencesError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_error)?;

        let document = PreferencesDocument {
            preferences: values.clone(),
        };
        let content = toml::to_string_pretty(&document)?;

        let mut staged = NamedTempFile::new_in(parent).map_err(io_error)?;
        staged.write_all(content.as_bytes()).map_err(io_error)?;
        staged.as_file().sync_all().map_err(io_error)?;
        staged.persist(&self.path).map_err(|e| io_error(e.error))?;
        info!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferencesRepository for TomlFileRepository {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferencesError> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        self.values = next;

        self.listeners.notify(&PreferenceChange {
            key: key.to_string(),
            value: Some(value.to_string()),
        });
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut next = self.values.clone();
        next.remove(key);
        self.write(&next)?;
        self.values = next;

        self.listeners.notify(&PreferenceChange {
            key: key.to_string(),
            value: None,
        });
        Ok(())
    }

    fn subscribe(&mut self, listener: PreferenceListener) -> SubscriptionId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::keys;
    use tempfile::tempdir;

    #[test]
    fn open_missing_file_starts_empty_without_creating_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let repo = TomlFileRepository::open(&path).unwrap();

        assert_eq!(repo.get(keys::PALETTE).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir/prefs.toml");

        let mut repo = TomlFileRepository::open(&path).unwrap();
        repo.set(keys::PALETTE, "tritanopia").unwrap();
        repo.set(keys::HIGH_CONTRAST, "true").unwrap();
        drop(repo);

        let reopened = TomlFileRepository::open(&path).unwrap();
        assert_eq!(
            reopened.get(keys::PALETTE).unwrap().as_deref(),
            Some("tritanopia")
        );
        assert_eq!(
            reopened.get(keys::HIGH_CONTRAST).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn file_uses_a_preferences_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut repo = TomlFileRepository::open(&path).unwrap();
        repo.set(keys::FONT_SIZE, "120").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[preferences]"));
        assert!(content.contains("biolente-font-size = \"120\""));
    }

    #[test]
    fn remove_deletes_the_key_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut repo = TomlFileRepository::open(&path).unwrap();
        repo.set(keys::MONOCHROMATIC_BASE, "#E69F00").unwrap();
        repo.remove(keys::MONOCHROMATIC_BASE).unwrap();

        let reopened = TomlFileRepository::open(&path).unwrap();
        assert_eq!(reopened.get(keys::MONOCHROMATIC_BASE).unwrap(), None);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "preferences = [this is not toml").unwrap();

        let result = TomlFileRepository::open(&path);
        assert!(matches!(result, Err(PreferencesError::Parse { .. })));
    }

    #[test]
    fn writes_leave_no_staging_files_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut repo = TomlFileRepository::open(&path).unwrap();
        repo.set(keys::PALETTE, "rainbow").unwrap();
        repo.set(keys::FONT_SIZE, "90").unwrap();
        repo.remove(keys::PALETTE).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("prefs.toml")]);
    }

    #[test]
    fn failed_write_keeps_the_previous_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let mut repo = TomlFileRepository::open(&path).unwrap();
        repo.set(keys::PALETTE, "rainbow").unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // A directory in place of the target makes the rename fail after staging.
        let blocked = dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        let mut blocked_repo = TomlFileRepository {
            path: blocked,
            values: BTreeMap::new(),
            listeners: Listeners::default(),
        };
        assert!(blocked_repo.set(keys::PALETTE, "cpk").is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn open_or_discard_drops_a_truncated_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "[preferences]\nbiolente-font-size = \"1").unwrap();

        let mut repo = TomlFileRepository::open_or_discard(&path).unwrap();

        assert!(!path.exists());
        assert_eq!(repo.get(keys::FONT_SIZE).unwrap(), None);
        repo.set(keys::FONT_SIZE, "110").unwrap();
        let reopened = TomlFileRepository::open(&path).unwrap();
        assert_eq!(reopened.get(keys::FONT_SIZE).unwrap().as_deref(), Some("110"));
    }

    #[test]
    fn open_or_discard_keeps_a_valid_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "[preferences]\nbiolente-high-contrast = \"true\"\n").unwrap();

        let repo = TomlFileRepository::open_or_discard(&path).unwrap();

        assert_eq!(
            repo.get(keys::HIGH_CONTRAST).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn failed_write_leaves_values_unchanged() {
        let dir = tempdir().unwrap();
        // The target path is a directory, so every write fails.
        let path = dir.path().to_path_buf();
        let mut repo = TomlFileRepository {
            path,
            values: BTreeMap::new(),
            listeners: Listeners::default(),
        };

        let result = repo.set(keys::PALETTE, "rainbow");
        assert!(matches!(result, Err(PreferencesError::Io { .. })));
        assert_eq!(repo.get(keys::PALETTE).unwrap(), None);
    }
}
