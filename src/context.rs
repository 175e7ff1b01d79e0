//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::theme::Theme;

/// Active theme, provided to every component under the widget container
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
}

impl ThemeContext {
    pub fn new(theme: Signal<Theme>) -> Self {
        Self { theme }
    }

    pub fn container_style(&self) -> String {
        self.theme.get().container_style()
    }
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
