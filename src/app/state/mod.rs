use super::keymap::KeyMap;
use crate::domain::language::Language;
use crate::domain::models::SearchResult;
use crate::i18n::{self, Strings};
use crate::theme::{Theme, ThemeMode};
use std::sync::Arc;

pub mod input;
pub mod language;
pub mod search;

pub use input::{AppTextArea, InputState};
pub use language::LanguageSelectionState;
pub use search::{ArticleState, SuggestionsState};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks a status message stays on screen.
pub const STATUS_TTL_TICKS: u16 = 12;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Search,            // Typing in the search bar
    Article,           // Scrolling the result and its references
    LanguageSelection, // Picking the wiki language
    Help,              // Showing the help overlay
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub previous_mode: AppMode, // Restored when an overlay closes
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: Option<String>,
    pub status_ttl: u16,

    // --- Search ---
    pub input: InputState<'a>,
    pub suggestions: SuggestionsState,
    pub show_landing: bool,

    // --- Result ---
    pub result: Option<SearchResult>,
    pub article: ArticleState,

    // --- Preferences ---
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub language: Language,
    pub language_selection: Option<LanguageSelectionState>,

    // --- Animation ---
    pub spinner: String,
    pub frame_count: u64,

    pub keymap: Arc<KeyMap>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(language: Language, theme_mode: ThemeMode) -> Self {
        Self {
            language,
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            ..Default::default()
        }
    }

    /// UI strings in the active language.
    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        i18n::strings(self.language)
    }

    pub fn open_overlay(&mut self, overlay: AppMode) {
        if !matches!(self.mode, AppMode::Help | AppMode::LanguageSelection) {
            self.previous_mode = self.mode;
        }
        self.mode = overlay;
    }

    pub fn close_overlay(&mut self) {
        self.mode = self.previous_mode;
        self.language_selection = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ttl = STATUS_TTL_TICKS;
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Search,
            previous_mode: AppMode::Search,
            is_loading: false,
            error: None,
            status_message: None,
            status_ttl: 0,
            input: InputState::default(),
            suggestions: SuggestionsState::default(),
            show_landing: true,
            result: None,
            article: ArticleState::default(),
            theme_mode: ThemeMode::default(),
            theme: Theme::default(),
            language: Language::default(),
            language_selection: None,
            spinner: SPINNER_FRAMES[0].to_string(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
        }
    }
}
