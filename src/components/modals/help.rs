use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Search",
        &[
            (" Enter", "Search the typed term or the highlighted suggestion"),
            (" \u{2193} / \u{2191}", "Move through suggestions"),
            (" Esc", "Close suggestions / Clear the message"),
            (" Tab", "Focus the article"),
        ],
    ),
    (
        "Article",
        &[
            (" j / k", "Scroll one line"),
            (" PgDn / PgUp", "Scroll one page"),
            (" n / p", "Next / previous reference"),
            (" Enter / o", "Open the reference in the browser"),
            (" i", "Open the image in the browser"),
            (" / / Tab", "Back to the search bar"),
        ],
    ),
    (
        "Preferences",
        &[
            (" Ctrl+T", "Toggle light / dark theme"),
            (" Ctrl+L", "Choose the Wikipedia language"),
        ],
    ),
    (
        "General",
        &[
            (" F1 / ?", "Show this help"),
            (" Ctrl+Q / q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (keys, desc) in bindings.iter() {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*keys, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
