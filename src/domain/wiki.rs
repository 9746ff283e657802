use super::error::Result;
use super::language::Language;
use super::models::{SearchResult, Suggestion};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WikiFacade: Send + Sync {
    // Intro extract, thumbnail and external links for an exact title
    async fn search(&self, language: Language, title: &str) -> Result<SearchResult>;

    // Opensearch completions for partially typed text
    async fn suggest(&self, language: Language, text: &str) -> Result<Vec<Suggestion>>;
}
