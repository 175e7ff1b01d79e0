//! Widget Configuration

use log::LevelFilter;

pub const DEFAULT_STORAGE_KEY: &str = "todos";
pub const DEFAULT_TITLE: &str = "TODO App";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Local storage key holding the JSON todo array
    pub storage_key: String,
    /// Heading shown above the form
    pub title: String,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}
