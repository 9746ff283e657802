use super::*;
use crate::app::state::{AppMode, STATUS_TTL_TICKS};
use crate::domain::error::ErrorKind;
use crate::domain::language::Language;
use crate::domain::models::{SearchResult, Suggestion};
use crate::theme::{Theme, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn type_text(state: &mut AppState, text: &str) -> Option<Command> {
    let mut last = None;
    for c in text.chars() {
        last = update(
            state,
            Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        );
    }
    last
}

fn sample_result() -> SearchResult {
    SearchResult {
        title: "Rust (programming language)".to_string(),
        extract: "<p>Rust is a <b>general-purpose</b> language.</p><p>Second.</p>".to_string(),
        image: Some("https://upload.wikimedia.org/rust.png".to_string()),
        references: vec![
            "https://www.rust-lang.org/".to_string(),
            "https://doc.rust-lang.org/".to_string(),
        ],
    }
}

fn suggestion(title: &str) -> Suggestion {
    Suggestion {
        title: title.to_string(),
        url: format!("https://en.wikipedia.org/wiki/{title}"),
    }
}

#[test]
fn test_empty_submit_shows_validation_without_request() {
    let mut state = AppState::default();
    state.result = Some(sample_result());

    let command = update(&mut state, Action::SubmitSearch);

    assert_eq!(command, None);
    assert_eq!(state.error.as_deref(), Some("Please enter a search term."));
    assert_eq!(state.result, None);
    assert!(!state.is_loading);
}

#[test]
fn test_whitespace_submit_is_treated_as_empty() {
    let mut state = AppState::default();
    type_text(&mut state, "   ");

    assert_eq!(update(&mut state, Action::SubmitSearch), None);
    assert!(state.error.is_some());
}

#[test]
fn test_submit_trims_and_starts_loading() {
    let mut state = AppState::default();
    type_text(&mut state, "  Rust ");
    state.suggestions.replace(vec![suggestion("Rust")]);
    state.error = Some("old".to_string());

    let command = update(&mut state, Action::SubmitSearch);

    assert_eq!(
        command,
        Some(Command::Search {
            language: Language::En,
            query: "Rust".to_string()
        })
    );
    assert!(state.is_loading);
    assert!(!state.show_landing);
    assert!(state.error.is_none());
    assert!(state.suggestions.is_empty());
}

#[test]
fn test_typing_requests_suggestions_and_hides_landing() {
    let mut state = AppState::default();
    assert!(state.show_landing);

    let command = type_text(&mut state, "Ru");

    assert!(!state.show_landing);
    assert_eq!(
        command,
        Some(Command::Suggest {
            language: Language::En,
            query: "Ru".to_string()
        })
    );
}

#[test]
fn test_clearing_text_clears_suggestions_without_request() {
    let mut state = AppState::default();
    type_text(&mut state, "R");
    state.suggestions.replace(vec![suggestion("Rust")]);

    let command = update(
        &mut state,
        Action::TextAreaInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
    );

    assert_eq!(command, None);
    assert!(state.suggestions.is_empty());
}

#[test]
fn test_stale_suggestions_are_dropped() {
    let mut state = AppState::default();
    type_text(&mut state, "Rus");

    update(
        &mut state,
        Action::SuggestionsLoaded {
            language: Language::En,
            query: "Ru".to_string(),
            suggestions: vec![suggestion("Ruby")],
        },
    );
    assert!(state.suggestions.is_empty());

    update(
        &mut state,
        Action::SuggestionsLoaded {
            language: Language::En,
            query: "Rus".to_string(),
            suggestions: vec![suggestion("Rust"), suggestion("Russia")],
        },
    );
    assert_eq!(state.suggestions.items.len(), 2);

    // A late failure for older text leaves the current list alone
    update(
        &mut state,
        Action::SuggestionsFailed {
            language: Language::En,
            query: "R".to_string(),
        },
    );
    assert_eq!(state.suggestions.items.len(), 2);
}

#[test]
fn test_suggestions_from_previous_language_are_dropped() {
    let mut state = AppState::default();
    type_text(&mut state, "rus");

    update(&mut state, Action::SwitchLanguage(Language::De));
    update(
        &mut state,
        Action::SuggestionsLoaded {
            language: Language::En,
            query: "rus".to_string(),
            suggestions: vec![suggestion("Rust")],
        },
    );
    assert!(state.suggestions.is_empty());

    update(
        &mut state,
        Action::SuggestionsLoaded {
            language: Language::De,
            query: "rus".to_string(),
            suggestions: vec![suggestion("Russland")],
        },
    );
    assert_eq!(state.suggestions.items[0].title, "Russland");
}

#[test]
fn test_choosing_a_suggestion_searches_its_title() {
    let mut state = AppState::default();
    type_text(&mut state, "Rus");
    state
        .suggestions
        .replace(vec![suggestion("Rust"), suggestion("Russia")]);
    update(&mut state, Action::SuggestionNext);
    update(&mut state, Action::SuggestionNext);

    let title = state.suggestions.selected_suggestion().unwrap().title.clone();
    let command = update(&mut state, Action::SearchFor(title));

    assert_eq!(state.input.text(), "Russia");
    assert_eq!(
        command,
        Some(Command::Search {
            language: Language::En,
            query: "Russia".to_string()
        })
    );
}

#[test]
fn test_search_success_populates_result() {
    let mut state = AppState::default();
    state.is_loading = true;

    update(&mut state, Action::SearchFinished(Ok(sample_result())));

    assert!(!state.is_loading);
    assert_eq!(state.result, Some(sample_result()));
    assert_eq!(
        state.article.body,
        "Rust is a general-purpose language.\n\nSecond."
    );
    assert_eq!(state.article.scroll, 0);
}

#[test]
fn test_search_failures_map_to_localized_messages() {
    let mut state = AppState::default();

    update(&mut state, Action::SearchFinished(Err(ErrorKind::NotFound)));
    assert_eq!(state.error.as_deref(), Some("No results found."));
    assert_eq!(state.result, None);

    update(&mut state, Action::SearchFinished(Err(ErrorKind::Failure)));
    assert_eq!(
        state.error.as_deref(),
        Some("Something went wrong. Please try again.")
    );
}

#[test]
fn test_toggle_theme_requests_persistence() {
    let mut state = AppState::default();

    let command = update(&mut state, Action::ToggleTheme);

    assert_eq!(command, Some(Command::PersistTheme(ThemeMode::Dark)));
    assert_eq!(state.theme, Theme::from_mode(ThemeMode::Dark));
    assert!(state.status_message.is_some());

    let command = update(&mut state, Action::ToggleTheme);
    assert_eq!(command, Some(Command::PersistTheme(ThemeMode::Light)));
}

#[test]
fn test_language_picker_switches_strings_without_searching() {
    let mut state = AppState::default();
    state.result = Some(sample_result());

    update(&mut state, Action::EnterLanguageSelection);
    assert_eq!(state.mode, AppMode::LanguageSelection);

    update(&mut state, Action::SelectLanguageNext);
    let command = update(&mut state, Action::ConfirmLanguage);

    assert_eq!(command, None);
    assert_eq!(state.language, Language::Es);
    assert_eq!(state.mode, AppMode::Search);
    assert!(state.language_selection.is_none());
    assert_eq!(state.result, Some(sample_result()));

    update(&mut state, Action::SubmitSearch);
    assert_eq!(
        state.error.as_deref(),
        Some("Por favor, introduce un término de búsqueda.")
    );
}

#[test]
fn test_language_picker_wraps_backwards() {
    let mut state = AppState::default();
    update(&mut state, Action::EnterLanguageSelection);
    update(&mut state, Action::SelectLanguagePrev);
    update(&mut state, Action::ConfirmLanguage);
    assert_eq!(state.language, Language::Fi);
}

#[test]
fn test_article_scroll_is_clamped() {
    let mut state = AppState::default();
    update(&mut state, Action::SearchFinished(Ok(sample_result())));

    update(&mut state, Action::ScrollArticleDown(50));
    assert_eq!(
        state.article.scroll,
        crate::app::features::article::max_scroll(&state)
    );

    update(&mut state, Action::ScrollArticleUp(50));
    assert_eq!(state.article.scroll, 0);
}

#[test]
fn test_references_wrap_and_open() {
    let mut state = AppState::default();
    update(&mut state, Action::SearchFinished(Ok(sample_result())));
    update(&mut state, Action::FocusArticle);
    assert_eq!(state.mode, AppMode::Article);

    update(&mut state, Action::SelectPrevReference);
    assert_eq!(state.article.selected_reference, 1);
    assert_eq!(
        update(&mut state, Action::OpenSelectedReference),
        Some(Command::OpenUrl("https://doc.rust-lang.org/".to_string()))
    );

    update(&mut state, Action::SelectNextReference);
    assert_eq!(state.article.selected_reference, 0);

    assert_eq!(
        update(&mut state, Action::OpenImage),
        Some(Command::OpenUrl(
            "https://upload.wikimedia.org/rust.png".to_string()
        ))
    );
}

#[test]
fn test_focus_article_requires_a_result() {
    let mut state = AppState::default();
    update(&mut state, Action::FocusArticle);
    assert_eq!(state.mode, AppMode::Search);
    assert_eq!(update(&mut state, Action::OpenImage), None);
}

#[test]
fn test_help_returns_to_previous_mode() {
    let mut state = AppState::default();
    update(&mut state, Action::SearchFinished(Ok(sample_result())));
    update(&mut state, Action::FocusArticle);

    update(&mut state, Action::ToggleHelp);
    assert_eq!(state.mode, AppMode::Help);
    update(&mut state, Action::CancelMode);
    assert_eq!(state.mode, AppMode::Article);
}

#[test]
fn test_escape_closes_suggestions_then_error() {
    let mut state = AppState::default();
    state.suggestions.replace(vec![suggestion("Rust")]);
    state.error = Some("err".to_string());

    update(&mut state, Action::CancelMode);
    assert!(state.suggestions.is_empty());
    assert!(state.error.is_some());

    update(&mut state, Action::CancelMode);
    assert!(state.error.is_none());
}

#[test]
fn test_status_message_expires_on_ticks() {
    let mut state = AppState::default();
    update(&mut state, Action::StatusMessage("Opened".to_string()));

    for _ in 0..STATUS_TTL_TICKS - 1 {
        update(&mut state, Action::Tick);
    }
    assert!(state.status_message.is_some());
    update(&mut state, Action::Tick);
    assert!(state.status_message.is_none());
}

#[test]
fn test_quit() {
    let mut state = AppState::default();
    update(&mut state, Action::Quit);
    assert!(state.should_quit);
}
