use crate::i18n::{Strings, EXAMPLE_SEARCHES};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Landing page shown until the query is first edited.
pub struct Welcome<'a> {
    pub strings: &'a Strings,
    pub theme: &'a Theme,
}

impl Widget for Welcome<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let logo_ascii = [
            r" __      __ _  _    _  ",
            r" \ \    / /(_)| |__(_) ",
            r"  \ \/\/ / | || / /| | ",
            r"   \_/\_/  |_||_\_\|_| ",
        ];

        let mut lines: Vec<Line> = logo_ascii
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.header_logo)))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.strings.welcome,
            self.theme.welcome_heading,
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(self.strings.description));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.strings.example_search,
            self.theme.emphasis,
        )));
        lines.push(Line::from(""));
        for example in EXAMPLE_SEARCHES {
            lines.push(Line::from(Span::styled(example, self.theme.link)));
        }

        let logo_height = lines.len() as u16 + 2;
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(logo_height / 2).max(area.y),
            width: area.width,
            height: logo_height.min(area.height),
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            paragraph.render(centered_area, buf);
        }
    }
}
