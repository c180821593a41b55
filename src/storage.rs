//! Key-value persistence port
//!
//! The engine only ever needs `get` and `set` of opaque strings.
//! Writes are best-effort: a store that fails to persist simply loses
//! the value, and the in-memory state remains the source of truth.

use std::collections::HashMap;

/// Opaque string store the engine persists through
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Fire-and-forget write; implementations swallow their own errors
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and the headless demo
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            let _ = storage.set_item(key, value);
        } else {
            log::warn!("LocalStorage unavailable, dropping write of {key}");
        }
    }
}
