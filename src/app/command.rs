use crate::domain::language::Language;
use crate::theme::ThemeMode;

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { language: Language, query: String },
    Suggest { language: Language, query: String },
    PersistTheme(ThemeMode),
    OpenUrl(String),
}
