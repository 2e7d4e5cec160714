//! Key/value preference storage.
//!
//! The theme store only ever needs string reads and writes, so storage is a
//! two-method trait. Browsers get [`BrowserStore`], which wraps
//! `localStorage` and degrades to an in-session [`MemoryStore`] when storage
//! is blocked (private mode, sandboxed iframes, disabled cookies).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage rejected write for `{key}`")]
    Rejected { key: String },
}

/// String key/value storage used for persisted preferences.
pub trait PreferenceStore {
    /// Read `key`. Unavailable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `localStorage` when the browser grants it, otherwise a session-only map.
#[cfg(feature = "browser")]
#[derive(Clone, Debug)]
pub enum BrowserStore {
    Local(web_sys::Storage),
    Session(MemoryStore),
}

#[cfg(feature = "browser")]
impl BrowserStore {
    /// Open `localStorage`, falling back to memory if access throws or is absent.
    pub fn open() -> Self {
        let storage = web_sys::window().map(|w| w.local_storage());
        match storage {
            Some(Ok(Some(storage))) => Self::Local(storage),
            _ => {
                log::warn!("localStorage unavailable; preferences last for this page only");
                Self::Session(MemoryStore::new())
            }
        }
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(_) => None,
            },
            Self::Session(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|_| StorageError::Rejected { key: key.to_owned() }),
            Self::Session(memory) => memory.set(key, value),
        }
    }
}
