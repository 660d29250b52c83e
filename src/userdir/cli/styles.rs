//! Styles for the userdir CLI.
//!
//! Renderers never pick colors directly. They ask the theme for a semantic name
//! (`name`, `muted`, `current-page`, ...) and the theme maps it to a `console::Style`.
//! Changing the look of the CLI means changing this file only.
//!
//! Styling is applied only when the terminal supports it (`console::colors_enabled`),
//! unless a caller forces it either way, which the render tests do.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared by the renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const NAME: &str = "name";
    pub const MUTED: &str = "muted";
    pub const ID: &str = "id";
    pub const LABEL: &str = "label";
    pub const CURRENT_PAGE: &str = "current-page";
    pub const PAGE: &str = "page";
    pub const DISABLED: &str = "disabled";
    pub const ACCENT: &str = "accent";
    pub const QUOTE: &str = "quote";
}

#[derive(Debug, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` with the named style. Unknown names render plain.
    pub fn paint(&self, name: &str, text: &str, use_color: Option<bool>) -> String {
        let enabled = use_color.unwrap_or_else(console::colors_enabled);
        match self.styles.get(name) {
            Some(style) if enabled => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

pub static USERDIR_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::NAME, Style::new().bold())
        .add(names::MUTED, Style::new().color256(246))
        .add(names::ID, Style::new().yellow())
        .add(names::LABEL, Style::new().color256(246).italic())
        .add(names::CURRENT_PAGE, Style::new().black().on_cyan().bold())
        .add(names::PAGE, Style::new().cyan())
        .add(names::DISABLED, Style::new().color256(240))
        .add(names::ACCENT, Style::new().magenta().bold())
        .add(names::QUOTE, Style::new().italic())
});
