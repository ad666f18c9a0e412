//! Key/value preference persistence.
//!
//! DESIGN
//! ======
//! Components that persist user preferences take a [`PreferenceStore`]
//! instead of reaching for `localStorage` themselves, so the theme logic can
//! be exercised natively with [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

/// String-valued preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Process-local store for native tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`. Reads and writes are best-effort: private browsing
/// modes and disabled storage degrade to "nothing stored".
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::debug!("localStorage unavailable, preference {key:?} not persisted");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("persisting preference {key:?} failed: {err:?}");
        }
    }
}
