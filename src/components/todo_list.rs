//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::{Todo, TodoId};
use crate::todos::keyed_rows;

/// Renders todos in list order
#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_remove: Callback<TodoId>,
) -> impl IntoView {
    view! {
        <div class="todo-list">
            <For
                each=move || keyed_rows(todos.get())
                // completed is part of the key so a toggled row re-renders
                key=|(key, _)| key.clone()
                children=move |(_, todo)| {
                    view! {
                        <TodoItem todo=todo on_toggle=on_toggle on_remove=on_remove />
                    }
                }
            />
        </div>
    }
}
