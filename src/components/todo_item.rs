//! Todo Item Component
//!
//! A single row: clickable text and a remove button.

use leptos::prelude::*;

use crate::models::{Todo, TodoId};

/// Inline style of the todo text
fn text_style(completed: bool) -> String {
    format!(
        "text-decoration: {}; cursor: pointer; flex: 1;",
        if completed { "line-through" } else { "none" }
    )
}

/// A single todo row
///
/// # Arguments
/// * `on_toggle` - Called with the todo id when the text is clicked
/// * `on_remove` - Called with the todo id when "Remove" is clicked
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_remove: Callback<TodoId>,
) -> impl IntoView {
    let toggle_id = todo.id.clone();
    let remove_id = todo.id;
    let completed = todo.completed;

    view! {
        <div
            class=move || if completed { "todo-item completed" } else { "todo-item" }
            style="margin-bottom: 10px; display: flex; align-items: center;"
        >
            <span
                class="todo-text"
                style=text_style(completed)
                on:click=move |_| on_toggle.run(toggle_id.clone())
            >
                {todo.text}
            </span>
            <button
                class="remove-btn"
                style="margin-left: 5px;"
                on:click=move |_| on_remove.run(remove_id.clone())
            >
                "Remove"
            </button>
        </div>
    }
}
