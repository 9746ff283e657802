use crate::app::state::LanguageSelectionState;
use crate::domain::language::Language;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct LanguageSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a LanguageSelectionState,
    pub current: Language,
}

impl Widget for LanguageSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.state.languages.len() as u16 + 2;
        let modal_area = centered_rect_fixed_height(40, height, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SELECT LANGUAGE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let items: Vec<ListItem> = self
            .state
            .languages
            .iter()
            .enumerate()
            .map(|(i, language)| {
                let style = if i == self.state.selected_index {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if i == self.state.selected_index {
                    "> "
                } else {
                    "  "
                };
                let marker = if *language == self.current { " *" } else { "" };

                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<4}", language.code()), style),
                    Span::styled(language.label(), style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        // Keeps the highlight visible when the terminal is shorter than the list
        let mut list_state = ListState::default().with_selected(Some(self.state.selected_index));
        StatefulWidget::render(List::new(items).block(block), modal_area, buf, &mut list_state);
    }
}
