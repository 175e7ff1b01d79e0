//! New Todo Form Component
//!
//! Text input and add button. The input takes focus when mounted.

use leptos::html;
use leptos::prelude::*;

use crate::store::{store_add_todo, use_app_store};
use crate::todos;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Whitespace-only input is ignored and left in the box
        let Some(text) = todos::prepare_text(&new_text.get()) else {
            return;
        };
        store_add_todo(&store, text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <label>
                "New Todo:"
                <input
                    type="text"
                    node_ref=input_ref
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
