use crate::app::state::SuggestionsState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

/// Dropdown drawn over the body, right under the search bar.
pub struct SuggestionsDropdown<'a> {
    pub state: &'a SuggestionsState,
    pub theme: &'a Theme,
}

impl Widget for SuggestionsDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.suggestion);

        let title_width = (area.width as usize / 2).max(1);
        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let selected = self.state.selected == Some(i);
                let (title_style, url_style) = if selected {
                    (self.theme.suggestion_selected, self.theme.suggestion_selected)
                } else {
                    (self.theme.suggestion, self.theme.suggestion_url)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}", suggestion.title, width = title_width),
                        title_style,
                    ),
                    Span::styled(format!(" {} ", suggestion.url), url_style),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
