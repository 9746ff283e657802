use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod latte;
pub mod mocha;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header: Style,

    pub input: Style,
    pub placeholder: Style,

    pub suggestion: Style,
    pub suggestion_selected: Style,
    pub suggestion_url: Style,

    pub welcome_heading: Style,
    pub emphasis: Style,

    pub article_title: Style,
    pub article_text: Style,
    pub link: Style,

    pub status_info: Style,
    pub status_error: Style,
    pub loading: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

/// The only preference that survives a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::from_palette(&latte::CATPPUCCIN_LATTE),
            ThemeMode::Dark => Self::from_palette(&mocha::CATPPUCCIN_MOCHA),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.mantle).fg(p.subtext1),

            input: Style::default().fg(p.text),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),

            suggestion: Style::default().bg(p.mantle).fg(p.text),
            suggestion_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            suggestion_url: Style::default().bg(p.mantle).fg(p.overlay1),

            welcome_heading: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            emphasis: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),

            article_title: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            article_text: Style::default().fg(p.text),
            link: Style::default()
                .fg(p.sapphire)
                .add_modifier(Modifier::UNDERLINED),

            status_info: Style::default()
                .bg(p.teal)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            loading: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default()
                .bg(dim_color(p.green, 0.9))
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.surface1).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn test_modes_produce_distinct_themes() {
        assert_ne!(
            Theme::from_mode(ThemeMode::Light),
            Theme::from_mode(ThemeMode::Dark)
        );
        assert_eq!(Theme::default(), Theme::from_mode(ThemeMode::Light));
    }
}
