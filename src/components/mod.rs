//! UI Components
//!
//! Leptos components making up the widget.

mod new_todo_form;
mod theme_switch;
mod todo_item;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use theme_switch::ThemeSwitch;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
