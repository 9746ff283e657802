use crate::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The search bar. Always a single line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputState<'a> {
    pub text_area: AppTextArea<'a>,
}

impl InputState<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.lines().join("")
    }

    /// Replaces the content and puts the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.move_cursor(CursorMove::End);
        self.text_area = AppTextArea(area);
    }

    /// Feeds a key to the text area and reports whether the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.text();
        self.text_area.input(key);
        if self.text_area.lines().len() > 1 {
            let joined = self.text();
            self.set_text(&joined);
        }
        self.text() != before
    }

    /// Re-applies styling before a draw; `set_text` discards it.
    pub fn prepare(&mut self, theme: &Theme, placeholder: &'static str, focused: bool) {
        self.text_area.set_style(theme.input);
        self.text_area.set_cursor_line_style(Style::default());
        self.text_area.set_placeholder_text(placeholder);
        self.text_area.set_placeholder_style(theme.placeholder);
        self.text_area.set_cursor_style(if focused {
            Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            Style::default()
        });
    }
}
