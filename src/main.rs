//! TODO Widget Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod storage;
mod store;
mod theme;
mod todos;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
