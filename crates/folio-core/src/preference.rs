use std::rc::Rc;

use crate::config::DEFAULT_THEME_KEY;
use crate::error::StoreError;
use crate::host::KeyValueStore;
use crate::theme::ThemePreference;

/// Persisted theme preference, one key in the host's key/value store.
pub struct PreferenceStore {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl PreferenceStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_THEME_KEY)
    }

    pub fn with_key(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Ok(None)` when nothing has been stored yet.
    pub fn load_theme(&self) -> Result<Option<ThemePreference>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        raw.parse::<ThemePreference>()
            .map(Some)
            .map_err(|_| StoreError::Malformed {
                key: self.key.clone(),
                value: raw,
            })
    }

    pub fn save_theme(&self, theme: ThemePreference) -> Result<(), StoreError> {
        self.store.set(&self.key, theme.as_str())
    }
}
