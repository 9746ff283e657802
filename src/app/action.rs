use crate::app::command::Command;
use crate::domain::error::ErrorKind;
use crate::domain::language::Language;
use crate::domain::models::{SearchResult, Suggestion};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search Bar ---
    TextAreaInput(KeyEvent), // Edit the query
    SubmitSearch,            // Search whatever is typed
    SearchFor(String),       // Search a specific title (suggestion, example)
    SuggestionNext,
    SuggestionPrev,
    CloseSuggestions,

    // --- Article ---
    FocusArticle,
    FocusSearch,
    ScrollArticleUp(u16),
    ScrollArticleDown(u16),
    SelectNextReference,
    SelectPrevReference,
    OpenSelectedReference, // Hand the highlighted link to the browser
    OpenImage,             // Hand the thumbnail URL to the browser

    // --- Preferences ---
    ToggleTheme,
    EnterLanguageSelection,
    SelectLanguageNext,
    SelectLanguagePrev,
    ConfirmLanguage,
    SwitchLanguage(Language),

    // --- UI Mode Transitions ---
    ToggleHelp,
    CancelMode,

    // --- Async Results ---
    SearchFinished(Result<SearchResult, ErrorKind>),
    // Tagged with the request so late replies can be told apart
    SuggestionsLoaded {
        language: Language,
        query: String,
        suggestions: Vec<Suggestion>,
    },
    SuggestionsFailed {
        language: Language,
        query: String,
    },
    StatusMessage(String),
}
