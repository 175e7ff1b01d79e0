//! Todo Persistence
//!
//! The whole list lives under one local storage key as a JSON array and is
//! overwritten wholesale on every change.

use thiserror::Error;

use crate::models::Todo;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Read error: {0}")]
    Read(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key/value string storage backing the todo list
pub trait TodoStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl TodoStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Read the persisted list.
///
/// Absent, unreadable or malformed data loads as an empty list.
pub fn load_todos(storage: &impl TodoStorage, key: &str) -> Vec<Todo> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("no stored todos under {:?}", key);
            return Vec::new();
        }
        Err(e) => {
            log::warn!("failed to read stored todos: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Todo>>(&raw) {
        Ok(todos) => todos,
        Err(e) => {
            log::warn!("ignoring malformed stored todos: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the persisted list
pub fn save_todos(storage: &impl TodoStorage, key: &str, todos: &[Todo]) -> StorageResult<()> {
    let json = serde_json::to_string(todos)?;
    storage.set_item(key, &json)
}

/// Load from `window.localStorage`, empty when it is unavailable
pub fn load_from_browser(key: &str) -> Vec<Todo> {
    match BrowserStorage::open() {
        Ok(storage) => load_todos(&storage, key),
        Err(e) => {
            log::warn!("{}", e);
            Vec::new()
        }
    }
}

/// Save to `window.localStorage`, logging failures
pub fn save_to_browser(key: &str, todos: &[Todo]) {
    let result = BrowserStorage::open().and_then(|storage| save_todos(&storage, key, todos));
    if let Err(e) = result {
        log::warn!("failed to persist {} todos: {}", todos.len(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-process storage
    #[derive(Default)]
    struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        fn new() -> Self {
            Self::default()
        }
    }

    impl TodoStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    const KEY: &str = "todos";

    fn sample() -> Vec<Todo> {
        vec![
            Todo {
                id: TodoId::from("1"),
                text: "first".to_string(),
                completed: false,
            },
            Todo {
                id: TodoId::from("2"),
                text: "second".to_string(),
                completed: true,
            },
        ]
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let storage = MemoryStorage::new();
        assert!(load_todos(&storage, KEY).is_empty());
    }

    #[test]
    fn test_malformed_loads_empty() {
        let storage = MemoryStorage::new();
        for raw in ["not json", "null", "{}", r#"[{"id":"1","text":"no flag"}]"#] {
            storage.set_item(KEY, raw).unwrap();
            assert!(load_todos(&storage, KEY).is_empty(), "expected empty for {}", raw);
        }
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let todos = sample();

        save_todos(&storage, KEY, &todos).unwrap();
        assert_eq!(load_todos(&storage, KEY), todos);
    }

    #[test]
    fn test_save_overwrites() {
        let storage = MemoryStorage::new();
        save_todos(&storage, KEY, &sample()).unwrap();
        save_todos(&storage, KEY, &[]).unwrap();

        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("[]"));
        assert!(load_todos(&storage, KEY).is_empty());
    }

    #[test]
    fn test_stored_format() {
        let storage = MemoryStorage::new();
        save_todos(&storage, KEY, &sample()[..1]).unwrap();

        let raw = storage.get_item(KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"1","text":"first","completed":false}]"#);
    }

    #[test]
    fn test_duplicate_ids_load_unvalidated() {
        let storage = MemoryStorage::new();
        let raw = r#"[{"id":"x","text":"a","completed":false},{"id":"x","text":"b","completed":true}]"#;
        storage.set_item(KEY, raw).unwrap();

        let todos = load_todos(&storage, KEY);
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, todos[1].id);
    }
}
