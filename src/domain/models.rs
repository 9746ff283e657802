use serde::Serialize;

/// Everything shown for one article. Replaced wholesale on every search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub extract: String, // HTML fragment
    pub image: Option<String>,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub url: String,
}
