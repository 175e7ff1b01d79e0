//! TODO Widget App
//!
//! Root component: loads the list, persists every change, renders the themed
//! container.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, ThemeSwitch, TodoList};
use crate::config::WidgetConfig;
use crate::context::ThemeContext;
use crate::models::TodoId;
use crate::storage;
use crate::store::{store_remove_todo, store_toggle_todo, AppState, AppStateStoreFields};
use crate::todos::completed_count;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let WidgetConfig { storage_key, title, .. } = config;

    let initial = storage::load_from_browser(&storage_key);
    log::info!("loaded {} todos from {:?}", initial.len(), storage_key);

    // State
    let store = Store::new(AppState::new(initial));
    provide_context(store);

    let theme = Signal::derive(move || store.theme().get());
    let ctx = ThemeContext::new(theme);
    provide_context(ctx);

    // Write the whole list back on every change
    Effect::new(move |_| {
        store.todos().with(|todos| storage::save_to_browser(&storage_key, todos));
    });

    let todos = Signal::derive(move || store.todos().get());
    let on_toggle = Callback::new(move |id: TodoId| store_toggle_todo(&store, &id));
    let on_remove = Callback::new(move |id: TodoId| store_remove_todo(&store, &id));

    view! {
        <div class="todo-app" style=move || ctx.container_style()>
            <h1>{title}</h1>

            <NewTodoForm />

            <TodoList todos=todos on_toggle=on_toggle on_remove=on_remove />

            <p class="todo-count">
                {move || store.todos().with(|todos| {
                    format!("{} items, {} completed", todos.len(), completed_count(todos))
                })}
            </p>

            <ThemeSwitch />
        </div>
    }
}
