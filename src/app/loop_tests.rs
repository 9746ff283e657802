use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::persistence::PreferenceStore;
use crate::app::state::AppState;
use crate::domain::error::{ErrorKind, WikiError};
use crate::domain::language::Language;
use crate::domain::models::{SearchResult, Suggestion};
use crate::domain::wiki::MockWikiFacade;
use crate::theme::ThemeMode;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn rust_result() -> SearchResult {
    SearchResult {
        title: "Rust".to_string(),
        extract: "<p>Rust is a language.</p>".to_string(),
        image: None,
        references: Vec::new(),
    }
}

#[tokio::test]
async fn test_handle_command_search_success() {
    let mut mock = MockWikiFacade::new();
    mock.expect_search()
        .withf(|language, title| *language == Language::De && title == "Rust")
        .times(1)
        .returning(|_, _| Ok(rust_result()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search {
            language: Language::De,
            query: "Rust".to_string(),
        },
        Arc::new(mock),
        PreferenceStore::disabled(),
        tx,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::SearchFinished(Ok(rust_result())));
}

#[tokio::test]
async fn test_handle_command_search_errors_are_classified() {
    let mut mock = MockWikiFacade::new();
    mock.expect_search()
        .returning(|_, title| Err(WikiError::NotFound(title.to_string())));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search {
            language: Language::En,
            query: "Nope".to_string(),
        },
        Arc::new(mock),
        PreferenceStore::disabled(),
        tx,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::SearchFinished(Err(ErrorKind::NotFound)));
}

#[tokio::test]
async fn test_handle_command_suggestions_echo_their_query() {
    let mut mock = MockWikiFacade::new();
    mock.expect_suggest().returning(|_, _| {
        Ok(vec![Suggestion {
            title: "Rust".to_string(),
            url: "https://en.wikipedia.org/wiki/Rust".to_string(),
        }])
    });

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Suggest {
            language: Language::En,
            query: "Ru".to_string(),
        },
        Arc::new(mock),
        PreferenceStore::disabled(),
        tx,
    )
    .unwrap();

    match rx.recv().await.unwrap() {
        Action::SuggestionsLoaded {
            language,
            query,
            suggestions,
        } => {
            assert_eq!(language, Language::En);
            assert_eq!(query, "Ru");
            assert_eq!(suggestions.len(), 1);
        }
        other => panic!("Expected Action::SuggestionsLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_handle_command_suggestion_failure() {
    let mut mock = MockWikiFacade::new();
    mock.expect_suggest()
        .returning(|_, _| Err(WikiError::NotFound(String::new())));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Suggest {
            language: Language::En,
            query: "Ru".to_string(),
        },
        Arc::new(mock),
        PreferenceStore::disabled(),
        tx,
    )
    .unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        Action::SuggestionsFailed {
            language: Language::En,
            query: "Ru".to_string()
        }
    );
}

#[tokio::test]
async fn test_persist_theme_writes_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    let (tx, _rx) = mpsc::channel(1);

    handle_command(
        Command::PersistTheme(ThemeMode::Dark),
        Arc::new(MockWikiFacade::new()),
        PreferenceStore::at(&path),
        tx,
    )
    .unwrap();

    // The write happens on the blocking pool
    let store = PreferenceStore::at(&path);
    for _ in 0..200 {
        if store.load_theme() == ThemeMode::Dark {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(store.load_theme(), ThemeMode::Dark);
}

#[tokio::test]
async fn test_full_search_round_trip_into_state() {
    let mut mock = MockWikiFacade::new();
    mock.expect_search()
        .returning(|_, _| Err(WikiError::NotFound("x".to_string())));

    let adapter: Arc<dyn WikiFacade> = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(2);
    let mut state = AppState::default();
    state.input.set_text("Atlantis");

    let command = crate::app::reducer::update(&mut state, Action::SubmitSearch).unwrap();
    assert!(state.is_loading);
    handle_command(command, adapter, PreferenceStore::disabled(), tx).unwrap();

    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);

    assert!(!state.is_loading);
    assert_eq!(state.result, None);
    assert_eq!(state.error.as_deref(), Some("No results found."));
}

#[tokio::test]
async fn test_empty_query_never_reaches_the_network() {
    let mut mock = MockWikiFacade::new();
    mock.expect_search().never();
    mock.expect_suggest().never();

    let adapter = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(10);

    for code in [KeyCode::Char(' '), KeyCode::Backspace, KeyCode::Enter, KeyCode::Enter] {
        event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                code,
                KeyModifiers::NONE,
            ))))
            .await
            .unwrap();
    }
    event_tx
        .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        ))))
        .await
        .unwrap();

    run_loop_with_events(
        &mut terminal,
        AppState::default(),
        adapter,
        PreferenceStore::disabled(),
        event_rx,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockWikiFacade::new();
    // No image and no references, so nothing is ever handed to a browser
    mock.expect_search().returning(|_, title| {
        Ok(SearchResult {
            title: title.to_string(),
            extract: "<p>First paragraph.</p><ul><li>one</li><li>two</li></ul>".to_string(),
            image: None,
            references: Vec::new(),
        })
    });
    mock.expect_suggest().returning(|_, text| {
        Ok((0..3)
            .map(|i| Suggestion {
                title: format!("{text} {i}"),
                url: format!("https://en.wikipedia.org/wiki/{text}_{i}"),
            })
            .collect())
    });

    let adapter = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Quit works from every mode
        let _ = event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(
            &mut terminal,
            app_state,
            adapter,
            PreferenceStore::disabled(),
            event_rx,
        ),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        14 => KeyCode::F(1),
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    // Quitting early would cut the run short
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('q' | 'c')) {
        modifiers.remove(KeyModifiers::CONTROL);
    }
    if code == KeyCode::Char('q') {
        return Event::Key(KeyEvent::new(KeyCode::Char('w'), modifiers));
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
