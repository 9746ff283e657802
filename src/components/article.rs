use crate::app::state::{ArticleState, AppState};
use crate::domain::models::SearchResult;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Main results pane: loading line, error line, or the article itself.
pub struct ArticleView<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for ArticleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let strings = self.state.strings();
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };

        let heading = self
            .state
            .result
            .as_ref()
            .map_or(strings.results_title, |r| r.title.as_str());
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(heading.to_string(), title_style),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("PgUp/PgDn", self.theme.footer_segment_key),
                Span::raw(format!(": {} ", strings.scroll_hint)),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let lines = if self.state.is_loading {
            vec![Line::from(vec![
                Span::styled(self.state.spinner.clone(), self.theme.loading),
                Span::raw(" "),
                Span::styled(strings.loading, self.theme.loading),
            ])]
        } else if let Some(error) = &self.state.error {
            vec![Line::from(Span::styled(
                error.clone(),
                self.theme.status_error,
            ))]
        } else if let Some(result) = &self.state.result {
            article_lines(result, &self.state.article, self.theme)
        } else {
            Vec::new()
        };

        let scroll = if self.state.result.is_some() && !self.state.is_loading {
            self.state.article.scroll
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

/// Screen rows the article occupies once wrapped to `width`.
#[must_use]
pub fn content_rows(
    result: &SearchResult,
    article: &ArticleState,
    theme: &Theme,
    width: u16,
) -> usize {
    Paragraph::new(article_lines(result, article, theme))
        .wrap(Wrap { trim: false })
        .line_count(width)
}

fn article_lines<'a>(
    result: &'a SearchResult,
    article: &'a ArticleState,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(result.title.as_str(), theme.article_title)),
        Line::from(""),
    ];
    if let Some(image) = &result.image {
        lines.push(Line::from(vec![
            Span::styled("Image: ", theme.emphasis),
            Span::styled(image.as_str(), theme.link),
        ]));
        lines.push(Line::from(""));
    }
    lines.extend(
        article
            .body
            .lines()
            .map(|line| Line::from(Span::styled(line, theme.article_text))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> SearchResult {
        SearchResult {
            title: "Rust".to_string(),
            extract: String::new(),
            image: None,
            references: Vec::new(),
        }
    }

    #[test]
    fn test_long_line_counts_every_wrapped_row() {
        let article = ArticleState {
            body: "word ".repeat(40),
            ..ArticleState::default()
        };
        let theme = Theme::default();
        // title, blank, then the body on a single row
        assert_eq!(content_rows(&result(), &article, &theme, 400), 3);
        assert!(content_rows(&result(), &article, &theme, 20) >= 12);
    }
}
