//! Persistence of UI preferences behind an injectable key-value interface.
//!
//! Stores never touch a global; they receive a [`PreferencesRepository`] and read it once
//! at start, then write on every mutation. Values are plain strings so that any backing
//! store with string values can implement the trait.

pub mod file;
pub mod keys;
pub mod memory;

pub use file::TomlFileRepository;
pub use memory::MemoryRepository;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("I/O error on preferences file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A successful write, delivered to subscribers after it has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceChange {
    pub key: String,
    /// The new value, or `None` if the key was removed.
    pub value: Option<String>,
}

pub type PreferenceListener = Box<dyn Fn(&PreferenceChange) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// String-valued key-value store for preferences.
pub trait PreferencesRepository {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError>;

    /// Stores `value` under `key` and notifies subscribers once the write succeeded.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferencesError>;

    /// Removes `key`. Removing a missing key is not an error and notifies nobody.
    fn remove(&mut self, key: &str) -> Result<(), PreferencesError>;

    fn subscribe(&mut self, listener: PreferenceListener) -> SubscriptionId;

    /// Returns `false` if the subscription was unknown.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Subscriber bookkeeping shared by the repository implementations.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, PreferenceListener)>,
}

impl Listeners {
    pub fn add(&mut self, listener: PreferenceListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    pub fn notify(&self, change: &PreferenceChange) {
        for (_, listener) in &self.entries {
            listener(change);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
