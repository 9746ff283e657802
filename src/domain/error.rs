use crate::i18n::Strings;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("search term is empty")]
    EmptyQuery,

    #[error("no article found for '{0}'")]
    NotFound(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unsupported language code '{0}'")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, WikiError>;

/// What the user gets told. Every failure collapses into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyQuery,
    NotFound,
    Failure,
}

impl ErrorKind {
    #[must_use]
    pub fn user_message(self, strings: &Strings) -> &'static str {
        match self {
            ErrorKind::EmptyQuery => strings.empty_query,
            ErrorKind::NotFound => strings.no_results,
            ErrorKind::Failure => strings.error_message,
        }
    }
}

impl WikiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            WikiError::EmptyQuery => ErrorKind::EmptyQuery,
            WikiError::NotFound(_) => ErrorKind::NotFound,
            WikiError::Http(_) | WikiError::Decode(_) | WikiError::UnsupportedLanguage(_) => {
                ErrorKind::Failure
            }
        }
    }

    #[must_use]
    pub fn user_message(&self, strings: &Strings) -> &'static str {
        self.kind().user_message(strings)
    }
}
