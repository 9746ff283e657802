use crate::app::state::{AppMode, AppState};
use crate::i18n::APP_TITLE;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = match self.state.mode {
            AppMode::Search => " SEARCH ",
            AppMode::Article => " ARTICLE ",
            AppMode::LanguageSelection => " LANGUAGE ",
            AppMode::Help => " HELP ",
        };
        let language = format!(
            " {} {} ",
            self.state.language.code().to_uppercase(),
            self.state.language.label()
        );
        let theme_label = format!(" {} ", self.state.theme_mode.label());

        let spans = vec![
            Span::styled(format!(" {APP_TITLE} "), self.theme.header_logo),
            Span::raw(" "),
            Span::styled(mode, self.theme.header_active),
            Span::raw(" "),
            Span::styled(language, self.theme.header_item),
            Span::raw(" "),
            Span::styled(theme_label, self.theme.header_item),
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
