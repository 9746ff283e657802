use crate::app::{action::Action, command::Command, persistence::PreferenceStore};
use crate::domain::wiki::WikiFacade;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub fn handle_command(
    command: Command,
    adapter: Arc<dyn WikiFacade>,
    prefs: PreferenceStore,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Search { language, query } => {
            tokio::spawn(async move {
                info!(%language, %query, "searching");
                let outcome = adapter.search(language, &query).await.map_err(|e| {
                    warn!(%language, %query, error = %e, "search failed");
                    e.kind()
                });
                let _ = tx.send(Action::SearchFinished(outcome)).await;
            });
        }
        Command::Suggest { language, query } => {
            tokio::spawn(async move {
                let action = match adapter.suggest(language, &query).await {
                    Ok(suggestions) => Action::SuggestionsLoaded {
                        language,
                        query,
                        suggestions,
                    },
                    Err(e) => {
                        debug!(%language, %query, error = %e, "suggestions failed");
                        Action::SuggestionsFailed { language, query }
                    }
                };
                let _ = tx.send(action).await;
            });
        }
        Command::PersistTheme(mode) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = prefs.save_theme(mode) {
                    warn!(error = %e, "failed to persist theme");
                }
            });
        }
        Command::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                let message = match open::that(&url) {
                    Ok(()) => {
                        info!(%url, "opened in browser");
                        format!("Opened {url}")
                    }
                    Err(e) => {
                        warn!(%url, error = %e, "failed to open browser");
                        format!("Could not open {url}: {e}")
                    }
                };
                let _ = tx.blocking_send(Action::StatusMessage(message));
            });
        }
    }
    Ok(())
}
