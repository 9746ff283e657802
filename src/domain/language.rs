use super::error::WikiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Wikipedia edition the client can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Zh,
    Hi,
    Ar,
    Pt,
    Bn,
    Ru,
    Ja,
    De,
    Ko,
    Fr,
    It,
    Pl,
    Uk,
    Ro,
    Tr,
    Fa,
    Sv,
    Fi,
}

impl Language {
    #[must_use]
    pub fn all() -> &'static [Language] {
        &[
            Language::En,
            Language::Es,
            Language::Zh,
            Language::Hi,
            Language::Ar,
            Language::Pt,
            Language::Bn,
            Language::Ru,
            Language::Ja,
            Language::De,
            Language::Ko,
            Language::Fr,
            Language::It,
            Language::Pl,
            Language::Uk,
            Language::Ro,
            Language::Tr,
            Language::Fa,
            Language::Sv,
            Language::Fi,
        ]
    }

    /// Subdomain of the edition, e.g. `de` for `de.wikipedia.org`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::Ar => "ar",
            Language::Pt => "pt",
            Language::Bn => "bn",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::De => "de",
            Language::Ko => "ko",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Pl => "pl",
            Language::Uk => "uk",
            Language::Ro => "ro",
            Language::Tr => "tr",
            Language::Fa => "fa",
            Language::Sv => "sv",
            Language::Fi => "fi",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Zh => "中文 (Chinese)",
            Language::Hi => "हिन्दी (Hindi)",
            Language::Ar => "العربية (Arabic)",
            Language::Pt => "Português (Portuguese)",
            Language::Bn => "বাংলা (Bengali)",
            Language::Ru => "Русский (Russian)",
            Language::Ja => "日本語 (Japanese)",
            Language::De => "Deutsch (German)",
            Language::Ko => "한국어 (Korean)",
            Language::Fr => "Français (French)",
            Language::It => "Italiano (Italian)",
            Language::Pl => "Polski (Polish)",
            Language::Uk => "Українська (Ukrainian)",
            Language::Ro => "Română (Romanian)",
            Language::Tr => "Türkçe (Turkish)",
            Language::Fa => "فارسی (Persian)",
            Language::Sv => "Svenska (Swedish)",
            Language::Fi => "Suomi (Finnish)",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Position in [`Language::all`], used by the picker.
    #[must_use]
    pub fn index(&self) -> usize {
        Self::all().iter().position(|l| l == self).unwrap_or(0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = WikiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| WikiError::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::all().len(), 20);
    }

    #[test]
    fn test_from_str_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(" DE ".parse::<Language>().unwrap(), Language::De);
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(matches!(err, WikiError::UnsupportedLanguage(code) if code == "xx"));
    }

    #[test]
    fn test_index_matches_position() {
        assert_eq!(Language::En.index(), 0);
        assert_eq!(Language::Fi.index(), Language::all().len() - 1);
    }
}
