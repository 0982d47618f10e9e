//! Best-effort persistence for the language preference and the contact draft.
//!
//! Every call reports an explicit outcome; callers decide whether a failure
//! matters (it almost never does: the page falls back to session-only state).
//! On the web the backing store is `window.localStorage`; native builds keep
//! a small JSON map in the platform data directory.

use crate::core::error::StorageError;

/// Minimal key/value capability. Implementations must never panic.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The store provided by the host environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformStore;

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::*;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    impl KeyValueStore for PlatformStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Read {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            local_storage()?
                .remove_item(key)
                .map_err(|err| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::*;

    const FILE_NAME: &str = "storage.json";

    fn storage_path() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("fr", "Experience", "Almanarre")
            .map(|dirs| dirs.data_dir().join(FILE_NAME))
            .ok_or(StorageError::Unavailable)
    }

    fn read_map(key: &str) -> Result<BTreeMap<String, String>, StorageError> {
        let path = storage_path()?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&path).map_err(|err| StorageError::Read {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
            key: key.to_string(),
            reason: err.to_string(),
        })
    }

    fn write_map(key: &str, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let path = storage_path()?;
        let write_err = |reason: String| StorageError::Write {
            key: key.to_string(),
            reason,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| write_err(err.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(map).map_err(|err| write_err(err.to_string()))?;
        fs::write(&path, raw).map_err(|err| write_err(err.to_string()))
    }

    impl KeyValueStore for PlatformStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(read_map(key)?.get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut map = read_map(key).unwrap_or_default();
            map.insert(key.to_string(), value.to_string());
            write_map(key, &map)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let mut map = read_map(key)?;
            if map.remove(key).is_some() {
                write_map(key, &map)?;
            }
            Ok(())
        }
    }
}

/// Read a JSON value stored under `key`. Absent keys are `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Corrupt {
                key: key.to_string(),
                reason: err.to_string(),
            }),
    }
}

/// Store `value` as JSON under `key`.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: serde::Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|err| StorageError::Write {
        key: key.to_string(),
        reason: err.to_string(),
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// In-memory store for unit tests.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub entries: RefCell<HashMap<String, String>>,
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

    /// Store that refuses every operation, like a browser in private mode.
    #[derive(Debug, Default)]
    pub struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{BrokenStore, MemoryStore};
    use super::*;

    #[test]
    fn json_helpers_round_trip_through_store() {
        let store = MemoryStore::default();
        save_json(&store, "k", &vec![1, 2, 3]).unwrap();
        let back: Option<Vec<u8>> = load_json(&store, "k").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn absent_key_is_none() {
        let store = MemoryStore::default();
        let value: Option<String> = load_json(&store, "missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn corrupt_value_is_reported() {
        let store = MemoryStore::default();
        store.set("k", "{not json").unwrap();
        let err = load_json::<Vec<u8>, _>(&store, "k").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn broken_store_surfaces_unavailable() {
        let err = save_json(&BrokenStore, "k", &1).unwrap_err();
        assert!(matches!(err, StorageError::Unavailable));
    }
}
