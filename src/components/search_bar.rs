use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SearchBar<'a> {
    pub input: &'a AppTextArea<'a>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width > 0 && inner.height > 0 {
            self.input.render(inner, buf);
        }
    }
}
