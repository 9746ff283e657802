use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::collections::HashMap;

const PAGE: u16 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Active everywhere except the modal overlays
    pub global: HashMap<KeyEvent, Action>,
    pub search_mode: HashMap<KeyEvent, Action>,
    pub article_mode: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut search_mode = HashMap::new();
        let mut article_mode = HashMap::new();

        // --- Global ---
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('q'), Action::Quit);
        global.insert(ctrl('t'), Action::ToggleTheme);
        global.insert(ctrl('l'), Action::EnterLanguageSelection);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        global.insert(key(KeyCode::Esc), Action::CancelMode);
        global.insert(key(KeyCode::PageDown), Action::ScrollArticleDown(PAGE));
        global.insert(key(KeyCode::PageUp), Action::ScrollArticleUp(PAGE));

        // --- Search Mode ---
        search_mode.insert(key(KeyCode::Down), Action::SuggestionNext);
        search_mode.insert(key(KeyCode::Up), Action::SuggestionPrev);
        search_mode.insert(key(KeyCode::Tab), Action::FocusArticle);

        // --- Article Mode ---
        article_mode.insert(ch('j'), Action::ScrollArticleDown(1));
        article_mode.insert(key(KeyCode::Down), Action::ScrollArticleDown(1));
        article_mode.insert(ch('k'), Action::ScrollArticleUp(1));
        article_mode.insert(key(KeyCode::Up), Action::ScrollArticleUp(1));
        article_mode.insert(ch('n'), Action::SelectNextReference);
        article_mode.insert(ch(']'), Action::SelectNextReference);
        article_mode.insert(ch('p'), Action::SelectPrevReference);
        article_mode.insert(ch('['), Action::SelectPrevReference);
        article_mode.insert(key(KeyCode::Enter), Action::OpenSelectedReference);
        article_mode.insert(ch('o'), Action::OpenSelectedReference);
        article_mode.insert(ch('i'), Action::OpenImage);
        article_mode.insert(ch('/'), Action::FocusSearch);
        article_mode.insert(key(KeyCode::Tab), Action::FocusSearch);
        article_mode.insert(key(KeyCode::BackTab), Action::FocusSearch);
        article_mode.insert(ch('t'), Action::ToggleTheme);
        article_mode.insert(ch('l'), Action::EnterLanguageSelection);
        article_mode.insert(ch('?'), Action::ToggleHelp);
        article_mode.insert(ch('q'), Action::Quit);

        Self {
            global,
            search_mode,
            article_mode,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = normalize(event);
        let mode_map = match mode {
            AppMode::Search => Some(&self.search_mode),
            AppMode::Article => Some(&self.article_mode),
            AppMode::LanguageSelection | AppMode::Help => None,
        };
        if let Some(action) = mode_map.and_then(|m| m.get(&event)) {
            return Some(action.clone());
        }
        self.global.get(&event).cloned()
    }
}

// Terminals disagree on whether shifted characters carry SHIFT; the char already says it.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent {
        code: event.code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
