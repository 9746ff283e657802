use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, LanguageSelectionState},
};
use crate::theme::Theme;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CancelMode => {
            match state.mode {
                AppMode::Help | AppMode::LanguageSelection => state.close_overlay(),
                AppMode::Article => state.mode = AppMode::Search,
                AppMode::Search => {
                    if state.suggestions.is_empty() {
                        state.error = None;
                    } else {
                        state.suggestions.clear();
                    }
                }
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            if state.mode == AppMode::Help {
                state.close_overlay();
            } else {
                state.open_overlay(AppMode::Help);
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            state.theme = Theme::from_mode(state.theme_mode);
            state.set_status(format!("{} theme", state.theme_mode.label()));
            UpdateResult::Handled(Some(Command::PersistTheme(state.theme_mode)))
        }
        Action::EnterLanguageSelection => {
            state.language_selection = Some(LanguageSelectionState::new(state.language));
            state.open_overlay(AppMode::LanguageSelection);
            UpdateResult::Handled(None)
        }
        Action::SelectLanguageNext => {
            if let Some(sel) = &mut state.language_selection {
                sel.selected_index = (sel.selected_index + 1) % sel.languages.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectLanguagePrev => {
            if let Some(sel) = &mut state.language_selection {
                if sel.selected_index == 0 {
                    sel.selected_index = sel.languages.len() - 1;
                } else {
                    sel.selected_index -= 1;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmLanguage => {
            let chosen = state
                .language_selection
                .as_ref()
                .and_then(LanguageSelectionState::selected);
            match chosen {
                Some(language) => update(state, &Action::SwitchLanguage(language)),
                None => {
                    state.close_overlay();
                    UpdateResult::Handled(None)
                }
            }
        }
        Action::SwitchLanguage(language) => {
            state.language = *language;
            state.suggestions.clear();
            if state.mode == AppMode::LanguageSelection {
                state.close_overlay();
            }
            state.set_status(format!("{} ({})", language.label(), language.code()));
            UpdateResult::Handled(None)
        }
        Action::StatusMessage(message) => {
            state.set_status(message.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
