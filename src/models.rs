//! Frontend Models
//!
//! Data structures persisted to local storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque todo identifier.
///
/// Stored as a plain JSON string. Fresh ids are v4 UUIDs, but any string read
/// back from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new incomplete todo with a fresh id
    pub fn new(text: String) -> Self {
        Self {
            id: TodoId::new(),
            text,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("Buy milk".to_string());
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert!(Uuid::parse_str(todo.id.as_str()).is_ok());
    }

    #[test]
    fn test_fresh_ids_differ() {
        assert_ne!(TodoId::new(), TodoId::new());
    }

    #[test]
    fn test_json_shape() {
        let todo = Todo {
            id: TodoId::from("abc"),
            text: "Walk dog".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":"abc","text":"Walk dog","completed":true}"#);
    }
}
