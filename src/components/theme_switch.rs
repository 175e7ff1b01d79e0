//! Theme Switch Component

use leptos::prelude::*;

use crate::context::use_theme;
use crate::store::{store_toggle_theme, use_app_store};

/// Button naming the theme a click switches to
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_theme();

    view! {
        <button class="theme-switch" on:click=move |_| store_toggle_theme(&store)>
            {move || ctx.theme.get().switch_label()}
        </button>
    }
}
