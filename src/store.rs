//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};
use crate::theme::Theme;
use crate::todos;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos in insertion order
    pub todos: Vec<Todo>,
    /// Active color theme (not persisted)
    pub theme: Theme,
}

impl AppState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new todo to the store
pub fn store_add_todo(store: &AppStore, text: String) -> TodoId {
    let id = todos::add_todo(&mut store.todos().write(), text);
    log::debug!("added todo {}", id);
    id
}

/// Flip a todo's completed flag by ID
pub fn store_toggle_todo(store: &AppStore, id: &TodoId) {
    if todos::toggle_todo(&mut store.todos().write(), id) {
        log::debug!("toggled todo {}", id);
    }
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: &TodoId) {
    if todos::remove_todo(&mut store.todos().write(), id) {
        log::debug!("removed todo {}", id);
    }
}

/// Switch between the light and dark theme
pub fn store_toggle_theme(store: &AppStore) {
    let mut theme = store.theme().write();
    *theme = theme.toggled();
    log::debug!("theme switched to {}", theme.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(f: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(AppState::new(Vec::new()))));
    }

    #[test]
    fn test_store_todo_helpers() {
        with_store(|store| {
            let first = store_add_todo(&store, "first".to_string());
            let second = store_add_todo(&store, "second".to_string());

            store_toggle_todo(&store, &first);
            let todos = store.todos().get_untracked();
            assert_eq!(todos.len(), 2);
            assert!(todos[0].completed);
            assert!(!todos[1].completed);

            store_remove_todo(&store, &first);
            let todos = store.todos().get_untracked();
            assert_eq!(todos.len(), 1);
            assert_eq!(todos[0].id, second);
        });
    }

    #[test]
    fn test_store_toggle_theme() {
        with_store(|store| {
            assert_eq!(store.theme().get_untracked(), Theme::Light);
            store_toggle_theme(&store);
            assert_eq!(store.theme().get_untracked(), Theme::Dark);
        });
    }
}
