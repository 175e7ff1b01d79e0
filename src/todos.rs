//! Todo List Transitions
//!
//! Pure functions over the ordered todo list.

use std::collections::HashMap;

use crate::models::{Todo, TodoId};

/// Render key of a list row: id, occurrence of that id so far, completed
pub type RowKey = (TodoId, usize, bool);

/// Validate new todo text.
///
/// Whitespace-only input is rejected. Accepted text is returned as typed.
pub fn prepare_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Append a new incomplete todo, returning its id
pub fn add_todo(todos: &mut Vec<Todo>, text: String) -> TodoId {
    let todo = Todo::new(text);
    let id = todo.id.clone();
    todos.push(todo);
    id
}

/// Flip the completed flag of the todo with `id`
pub fn toggle_todo(todos: &mut [Todo], id: &TodoId) -> bool {
    let mut changed = false;
    for todo in todos.iter_mut().filter(|t| &t.id == id) {
        todo.completed = !todo.completed;
        changed = true;
    }
    changed
}

/// Remove the todo with `id`
pub fn remove_todo(todos: &mut Vec<Todo>, id: &TodoId) -> bool {
    let before = todos.len();
    todos.retain(|t| &t.id != id);
    todos.len() != before
}

pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.completed).count()
}

/// Pair each todo with a key unique within the list.
///
/// Ids loaded from storage may repeat, so the occurrence index keeps the keys
/// of such records apart.
pub fn keyed_rows(todos: Vec<Todo>) -> Vec<(RowKey, Todo)> {
    let mut seen: HashMap<TodoId, usize> = HashMap::new();
    todos
        .into_iter()
        .map(|todo| {
            let occurrence = seen.entry(todo.id.clone()).or_default();
            let key = (todo.id.clone(), *occurrence, todo.completed);
            *occurrence += 1;
            (key, todo)
        })
        .collect()
}
