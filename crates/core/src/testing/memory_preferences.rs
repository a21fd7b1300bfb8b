//! In-memory preference store for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::prefs::{PrefKey, PreferencesStore, PrefsError};

/// In-memory implementation of [`PreferencesStore`].
///
/// Values live for the lifetime of the instance; nothing touches disk.
pub struct MemoryPreferences {
    values: Mutex<HashMap<&'static str, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesStore for MemoryPreferences {
    fn get(&self, key: PrefKey) -> Result<Option<String>, PrefsError> {
        Ok(self.values.lock().unwrap().get(key.as_str()).cloned())
    }

    fn set(&self, key: PrefKey, value: &str) -> Result<(), PrefsError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.as_str(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: PrefKey) -> Result<(), PrefsError> {
        self.values.lock().unwrap().remove(key.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Layout;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryPreferences::new();
        assert_eq!(store.layout().unwrap(), None);
        store.set_layout(Layout::List).unwrap();
        assert_eq!(store.layout().unwrap(), Some(Layout::List));
        store.remove(PrefKey::Layout).unwrap();
        assert_eq!(store.layout().unwrap(), None);
    }
}
