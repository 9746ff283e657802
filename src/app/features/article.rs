use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState},
};
use crate::components::article::content_rows;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusArticle => {
            if state.result.is_some() {
                state.suggestions.clear();
                state.mode = AppMode::Article;
            }
            UpdateResult::Handled(None)
        }
        Action::FocusSearch => {
            state.mode = AppMode::Search;
            UpdateResult::Handled(None)
        }
        Action::ScrollArticleDown(amount) => {
            let limit = max_scroll(state);
            state.article.scroll = state.article.scroll.saturating_add(*amount).min(limit);
            UpdateResult::Handled(None)
        }
        Action::ScrollArticleUp(amount) => {
            state.article.scroll = state.article.scroll.saturating_sub(*amount);
            UpdateResult::Handled(None)
        }
        Action::SelectNextReference => {
            let len = reference_count(state);
            if len > 0 {
                state.article.selected_reference = (state.article.selected_reference + 1) % len;
            }
            UpdateResult::Handled(None)
        }
        Action::SelectPrevReference => {
            let len = reference_count(state);
            if len > 0 {
                state.article.selected_reference = if state.article.selected_reference == 0 {
                    len - 1
                } else {
                    state.article.selected_reference - 1
                };
            }
            UpdateResult::Handled(None)
        }
        Action::OpenSelectedReference => {
            let url = state
                .result
                .as_ref()
                .and_then(|r| r.references.get(state.article.selected_reference))
                .cloned();
            UpdateResult::Handled(url.map(Command::OpenUrl))
        }
        Action::OpenImage => {
            let url = state.result.as_ref().and_then(|r| r.image.clone());
            UpdateResult::Handled(url.map(Command::OpenUrl))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Scroll limit for the current result at the last drawn viewport. Before the
/// first draw every logical line counts as one row.
pub fn max_scroll(state: &AppState) -> u16 {
    let Some(result) = &state.result else {
        return 0;
    };
    let width = match state.article.viewport.width {
        0 => u16::MAX,
        width => width,
    };
    state
        .article
        .max_scroll(content_rows(result, &state.article, &state.theme, width))
}

fn reference_count(state: &AppState) -> usize {
    state.result.as_ref().map_or(0, |r| r.references.len())
}
