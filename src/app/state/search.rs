use crate::domain::models::Suggestion;
use ratatui::layout::Size;

/// Autocomplete dropdown under the search bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionsState {
    pub items: Vec<Suggestion>,
    pub selected: Option<usize>,
}

impl SuggestionsState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    pub fn replace(&mut self, items: Vec<Suggestion>) {
        self.items = items;
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(self.items.len() - 1),
        });
    }

    // Moving up from the first entry returns focus to the text.
    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleState {
    /// Extract flattened to plain text.
    pub body: String,
    pub scroll: u16,
    pub selected_reference: usize,
    /// Inside of the article pane as of the last draw.
    pub viewport: Size,
}

impl ArticleState {
    /// Furthest scroll that still fills the viewport with `content_rows` rows.
    #[must_use]
    pub fn max_scroll(&self, content_rows: usize) -> u16 {
        let max = content_rows.saturating_sub(usize::from(self.viewport.height));
        u16::try_from(max).unwrap_or(u16::MAX)
    }
}
