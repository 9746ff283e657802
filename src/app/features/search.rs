use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ArticleState},
};
use crate::domain::html;
use crate::domain::language::Language;
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) => {
            if !state.input.input(*key) {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(text_changed(state))
        }
        Action::SubmitSearch => {
            let query = state.input.text();
            UpdateResult::Handled(submit(state, &query))
        }
        Action::SearchFor(title) => {
            state.input.set_text(title);
            UpdateResult::Handled(submit(state, title))
        }
        Action::SuggestionNext => {
            state.suggestions.select_next();
            UpdateResult::Handled(None)
        }
        Action::SuggestionPrev => {
            state.suggestions.select_prev();
            UpdateResult::Handled(None)
        }
        Action::CloseSuggestions => {
            state.suggestions.clear();
            UpdateResult::Handled(None)
        }
        Action::SuggestionsLoaded {
            language,
            query,
            suggestions,
        } => {
            if is_current(state, *language, query) {
                state.suggestions.replace(suggestions.clone());
            } else {
                debug!(%language, %query, "dropping stale suggestions");
            }
            UpdateResult::Handled(None)
        }
        Action::SuggestionsFailed { language, query } => {
            if is_current(state, *language, query) {
                state.suggestions.clear();
            }
            UpdateResult::Handled(None)
        }
        Action::SearchFinished(outcome) => {
            state.is_loading = false;
            match outcome {
                Ok(result) => {
                    state.error = None;
                    state.article = ArticleState {
                        body: html::to_plain_text(&result.extract),
                        viewport: state.article.viewport,
                        ..ArticleState::default()
                    };
                    state.result = Some(result.clone());
                }
                Err(kind) => {
                    state.result = None;
                    state.article = ArticleState {
                        viewport: state.article.viewport,
                        ..ArticleState::default()
                    };
                    state.error = Some(kind.user_message(state.strings()).to_string());
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

// Replies for older text or another edition no longer apply.
fn is_current(state: &AppState, language: Language, query: &str) -> bool {
    language == state.language && query == state.input.text()
}

fn text_changed(state: &mut AppState) -> Option<Command> {
    state.show_landing = false;
    state.suggestions.selected = None;

    let text = state.input.text();
    if text.trim().is_empty() {
        state.suggestions.clear();
        return None;
    }
    Some(Command::Suggest {
        language: state.language,
        query: text,
    })
}

fn submit(state: &mut AppState, query: &str) -> Option<Command> {
    state.suggestions.clear();
    state.show_landing = false;
    state.result = None;
    state.article = ArticleState {
        viewport: state.article.viewport,
        ..ArticleState::default()
    };

    let query = query.trim();
    if query.is_empty() {
        state.is_loading = false;
        state.error = Some(state.strings().empty_query.to_string());
        return None;
    }

    state.error = None;
    state.is_loading = true;
    Some(Command::Search {
        language: state.language,
        query: query.to_string(),
    })
}
