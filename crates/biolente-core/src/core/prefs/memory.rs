use super::{
    Listeners, PreferenceChange, PreferenceListener, PreferencesError, PreferencesRepository,
    SubscriptionId,
};
use std::collections::BTreeMap;

/// A repository that lives only as long as the process. Writes never fail.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    values: BTreeMap<String, String>,
    listeners: Listeners,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository, as if the values had been persisted by an earlier session.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            listeners: Listeners::default(),
        }
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl PreferencesRepository for MemoryRepository {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value.to_string());
        self.listeners.notify(&PreferenceChange {
            key: key.to_string(),
            value: Some(value.to_string()),
        });
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        if self.values.remove(key).is_some() {
            self.listeners.notify(&PreferenceChange {
                key: key.to_string(),
                value: None,
            });
        }
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
    use std::sync::{Arc, Mutex};

    #[test]
    fn get_returns_what_set_stored() {
        let mut repo = MemoryRepository::new();
        assert_eq!(repo.get("k").unwrap(), None);
        repo.set("k", "v").unwrap();
        assert_eq!(repo.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn subscribers_receive_sets_and_removals() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut repo = MemoryRepository::new();
        let sink = seen.clone();
        repo.subscribe(Box::new(move |change| {
            sink.lock().unwrap().push(change.clone());
        }));

        repo.set("a", "1").unwrap();
        repo.remove("a").unwrap();
        repo.remove("a").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                PreferenceChange {
                    key: "a".to_string(),
                    value: Some("1".to_string())
                },
                PreferenceChange {
                    key: "a".to_string(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let calls = Arc::new(Mutex::new(0));
        let mut repo = MemoryRepository::new();
        let counter = calls.clone();
        let id = repo.subscribe(Box::new(move |_| *counter.lock().unwrap() += 1));

        repo.set("a", "1").unwrap();
        assert!(repo.unsubscribe(id));
        assert!(!repo.unsubscribe(id));
        repo.set("a", "2").unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn with_values_seeds_the_store() {
        let repo = MemoryRepository::with_values([("x", "1"), ("y", "2")]);
        assert_eq!(repo.get("y").unwrap().as_deref(), Some("2"));
        assert_eq!(repo.values().len(), 2);
    }
}
