use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use wikibrowse::app::{persistence::PreferenceStore, r#loop::run_loop, state::AppState};
use wikibrowse::cli::{self, Cli};
use wikibrowse::config::Config;
use wikibrowse::domain::language::Language;
use wikibrowse::domain::wiki::WikiFacade;
use wikibrowse::infrastructure::wikipedia::WikipediaClient;
use wikibrowse::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // A log file that cannot be opened just means no logs
    if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
        let _ = logging::init(&path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(language) = cli.lang {
        config.language = language;
    }
    let language = config.language;

    // Built before terminal setup so a failure leaves the terminal untouched
    let adapter: Arc<dyn WikiFacade> = Arc::new(WikipediaClient::new(config)?);

    match cli.command {
        Some(command) => Ok(cli::run(command, adapter.as_ref(), language, cli.json).await),
        None => {
            run_tui(adapter, language).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_tui(adapter: Arc<dyn WikiFacade>, language: Language) -> Result<()> {
    setup_panic_hook();

    let prefs = PreferenceStore::new();
    let app_state = AppState::new(language, prefs.load_theme());
    tracing::info!(%language, theme = app_state.theme_mode.label(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, adapter, prefs).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    res
}
