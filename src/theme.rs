//! Color Themes
//!
//! Two hardcoded palettes, switched in memory.

/// Background and text colors of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub color: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#fff",
    color: "#333",
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#333",
    color: "#fff",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Label of the switch button, naming the theme a click switches to
    pub fn switch_label(self) -> String {
        format!("Switch to {} Theme", self.toggled().name())
    }

    /// Inline style of the widget container
    pub fn container_style(self) -> String {
        let palette = self.palette();
        format!(
            "background: {}; color: {}; padding: 20px; border-radius: 8px;",
            palette.background, palette.color
        )
    }
}
