//! String key/value storage behind a three-operation interface.
//!
//! [`MemoryStore`] keeps everything in a process-local map and forgets it on
//! reload. [`BrowserStore`] writes through to `window.localStorage`, so
//! session data survives a page refresh.

use std::collections::HashMap;

/// get / set / remove over string keys and values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Volatile store. Used natively and when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// Returns `None` when there is no window or storage is disabled
    /// (e.g. some private browsing modes).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("SkillUpPlus: localStorage read failed ({key}): {e:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("SkillUpPlus: localStorage write failed ({key}): {e:?}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            warn!("SkillUpPlus: localStorage remove failed ({key}): {e:?}");
        }
    }
}

/// The store the app runs on: `localStorage` in the browser, falling back
/// to memory if it cannot be opened.
pub fn open_default() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = BrowserStore::open() {
            return Box::new(store);
        }
        warn!("SkillUpPlus: localStorage unavailable, keeping data in memory");
    }
    Box::new(MemoryStore::new())
}
