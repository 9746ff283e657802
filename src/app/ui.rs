use crate::app::features::article::max_scroll;
use crate::app::state::{AppMode, AppState};
use crate::components::article::ArticleView;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::{HelpModal, LanguageSelectionModal};
use crate::components::references::ReferencesPanel;
use crate::components::search_bar::SearchBar;
use crate::components::suggestions::SuggestionsDropdown;
use crate::components::welcome::Welcome;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect, Size},
    Frame,
};

const SEARCH_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub article: Rect,
    pub references: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(SEARCH_HEIGHT), // Search bar
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    let body = main[2];
    let show_references = !app_state.show_landing && app_state.result.is_some();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if show_references {
            [Constraint::Percentage(65), Constraint::Percentage(35)]
        } else {
            [Constraint::Percentage(100), Constraint::Percentage(0)]
        })
        .split(body);

    AppLayout {
        header: main[0],
        search: main[1],
        body,
        article: columns[0],
        references: columns[1],
        footer: main[3],
    }
}

/// Where the suggestion dropdown is drawn, if it is visible at all.
pub fn suggestions_area(layout: &AppLayout, app_state: &AppState) -> Option<Rect> {
    if app_state.mode != AppMode::Search || app_state.suggestions.is_empty() {
        return None;
    }
    let height = (app_state.suggestions.items.len() as u16 + 1).min(layout.body.height);
    if height == 0 || layout.search.width == 0 {
        return None;
    }
    Some(Rect {
        x: layout.search.x,
        y: layout.body.y,
        width: layout.search.width,
        height,
    })
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let focused_search = app_state.mode == AppMode::Search;
    let placeholder = app_state.strings().placeholder;
    app_state
        .input
        .prepare(&app_state.theme, placeholder, focused_search);

    let layout = get_layout(area, app_state);
    // Scroll limits are measured against what was drawn last
    app_state.article.viewport = Size {
        width: layout.article.width.saturating_sub(2),
        height: layout.article.height.saturating_sub(2),
    };
    app_state.article.scroll = app_state.article.scroll.min(max_scroll(app_state));

    let state: &AppState = app_state;
    let theme = &state.theme;

    // --- Header ---
    f.render_widget(Header { state, theme }, layout.header);

    // --- Search ---
    f.render_widget(
        SearchBar {
            input: &state.input.text_area,
            theme,
            focused: focused_search,
        },
        layout.search,
    );

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        if state.show_landing {
            f.render_widget(
                Welcome {
                    strings: state.strings(),
                    theme,
                },
                layout.body,
            );
        } else {
            let focused_article = state.mode == AppMode::Article;
            f.render_widget(
                ArticleView {
                    state,
                    theme,
                    focused: focused_article,
                },
                layout.article,
            );
            if let Some(result) = &state.result {
                if layout.references.width > 0 {
                    f.render_widget(
                        ReferencesPanel {
                            title: state.strings().references_title,
                            references: &result.references,
                            selected: state.article.selected_reference,
                            theme,
                            focused: focused_article,
                        },
                        layout.references,
                    );
                }
            }
        }
    }

    // --- Footer ---
    f.render_widget(Footer { state, theme }, layout.footer);

    // --- Overlays ---
    if let Some(dropdown) = suggestions_area(&layout, state) {
        f.render_widget(
            SuggestionsDropdown {
                state: &state.suggestions,
                theme,
            },
            dropdown,
        );
    }

    match state.mode {
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(HelpModal { theme }, area);
        }
        AppMode::LanguageSelection => {
            if let Some(selection) = &state.language_selection {
                dim_area(f.buffer_mut(), area);
                f.render_widget(
                    LanguageSelectionModal {
                        theme,
                        state: selection,
                        current: state.language,
                    },
                    area,
                );
            }
        }
        AppMode::Search | AppMode::Article => {}
    }
}
