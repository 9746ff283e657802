use crate::config;
use crate::theme::ThemeMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Where the theme choice lives between runs.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

pub fn get_preferences_path() -> Option<PathBuf> {
    config::config_dir().map(|dir| dir.join(PREFERENCES_FILE))
}

impl PreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: get_preferences_path(),
        }
    }

    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store that never touches disk.
    #[must_use]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Missing or unreadable preferences fall back to the light theme.
    #[must_use]
    pub fn load_theme(&self) -> ThemeMode {
        let Some(path) = &self.path else {
            return ThemeMode::default();
        };
        if !path.exists() {
            return ThemeMode::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Preferences>(&content) {
                Ok(prefs) => prefs.theme,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                    ThemeMode::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read preferences");
                ThemeMode::default()
            }
        }
    }

    pub fn save_theme(&self, theme: ThemeMode) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string(&Preferences { theme })?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
