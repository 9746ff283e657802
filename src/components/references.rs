use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

/// External links of the current article, in response order.
pub struct ReferencesPanel<'a> {
    pub title: &'a str,
    pub references: &'a [String],
    pub selected: usize,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for ReferencesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title.to_string(), title_style),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("n/p", self.theme.footer_segment_key),
                Span::raw(": select "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(": open "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        if self.references.is_empty() {
            Paragraph::new(Line::from(Span::styled("-", self.theme.dimmed)))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .references
            .iter()
            .map(|url| ListItem::new(Line::from(Span::styled(url.as_str(), self.theme.link))))
            .collect();

        let highlight = if self.focused {
            self.theme.list_selected
        } else {
            self.theme.list_item
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
