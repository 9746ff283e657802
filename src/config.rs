use crate::domain::language::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_HOST_TEMPLATE: &str = "https://{lang}.wikipedia.org";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edition searched at startup. Not persisted when changed in the UI.
    pub language: Language,
    /// `{lang}` is replaced with the language code.
    pub host_template: String,
    pub user_agent: String,
    pub suggestion_limit: u32,
    pub thumbnail_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            host_template: DEFAULT_HOST_TEMPLATE.to_string(),
            user_agent: format!(
                "wikibrowse/{} (terminal Wikipedia client)",
                env!("CARGO_PKG_VERSION")
            ),
            suggestion_limit: 10,
            thumbnail_size: 500,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("wikibrowse");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        get_config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Missing file means defaults; an unreadable or invalid one is logged and
    /// also yields defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read config");
                return Self::default();
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn host_for(&self, language: Language) -> String {
        self.host_template.replace("{lang}", language.code())
    }
}
