use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    match app_state.mode {
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q' | '?') => {
                    Some(Action::ToggleHelp)
                }
                _ => None,
            },
            _ => None,
        },
        AppMode::LanguageSelection => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectLanguageNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectLanguagePrev),
                KeyCode::Enter => Some(Action::ConfirmLanguage),
                _ => None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::SelectLanguageNext),
                MouseEventKind::ScrollUp => Some(Action::SelectLanguagePrev),
                _ => None,
            },
            _ => None,
        },
        AppMode::Search => match event {
            Event::Key(key) => {
                if let Some(action) = app_state.keymap.get_action(key, app_state.mode) {
                    return Some(action);
                }
                match key.code {
                    KeyCode::Enter => Some(
                        match app_state.suggestions.selected_suggestion() {
                            Some(suggestion) => Action::SearchFor(suggestion.title.clone()),
                            None => Action::SubmitSearch,
                        },
                    ),
                    _ => Some(Action::TextAreaInput(key)),
                }
            }
            Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
            _ => None,
        },
        AppMode::Article => match event {
            Event::Key(key) => app_state.keymap.get_action(key, app_state.mode),
            Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
            _ => None,
        },
    }
}

fn map_mouse(
    mouse: crossterm::event::MouseEvent,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);

    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::ScrollArticleUp(1)),
        MouseEventKind::ScrollDown => Some(Action::ScrollArticleDown(1)),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(dropdown) = ui::suggestions_area(&layout, app_state) {
                if contains(dropdown, mouse.column, mouse.row) {
                    let index = mouse.row.saturating_sub(dropdown.y + 1) as usize;
                    return app_state
                        .suggestions
                        .items
                        .get(index)
                        .map(|s| Action::SearchFor(s.title.clone()));
                }
            }
            if contains(layout.search, mouse.column, mouse.row) {
                Some(Action::FocusSearch)
            } else if contains(layout.body, mouse.column, mouse.row) {
                Some(Action::FocusArticle)
            } else {
                None
            }
        }
        _ => None,
    }
}
