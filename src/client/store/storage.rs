//! Pluggable persistence.
//!
//! `KeyValueStore` is the raw string store (`localStorage` in the browser, a map
//! everywhere else). `SessionPersistence` is the narrow load/save/clear capability
//! the session store needs, implemented on top of any key-value store by
//! `StoredSession`.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{constant::SESSION_STORAGE_KEY, model::error::StorageError},
    model::user::UserDto,
};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Reads and decodes a JSON value, `None` when the key is absent.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    store.set(key, &raw)
}

/// Where the session keeps its identity between reloads.
pub trait SessionPersistence {
    fn load(&self) -> Result<Option<UserDto>, StorageError>;
    fn save(&self, identity: &UserDto) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Identity persisted as JSON under a single key.
#[derive(Clone)]
pub struct StoredSession {
    store: Rc<dyn KeyValueStore>,
}

impl StoredSession {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SessionPersistence for StoredSession {
    fn load(&self) -> Result<Option<UserDto>, StorageError> {
        load_json(self.store.as_ref(), SESSION_STORAGE_KEY)
    }

    fn save(&self, identity: &UserDto) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), SESSION_STORAGE_KEY, identity)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_STORAGE_KEY)
    }
}
