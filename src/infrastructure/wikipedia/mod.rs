pub mod response;

use crate::config::Config;
use crate::domain::error::{Result, WikiError};
use crate::domain::language::Language;
use crate::domain::models::{SearchResult, Suggestion};
use crate::domain::wiki::WikiFacade;
use crate::i18n;
use async_trait::async_trait;
use tracing::debug;

/// HTTP client for the MediaWiki action API of each language edition.
pub struct WikipediaClient {
    http: reqwest::Client,
    config: Config,
}

impl WikipediaClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn api_url(&self, language: Language) -> String {
        format!("{}/w/api.php", self.config.host_for(language))
    }

    async fn get_text(&self, language: Language, params: &[(&str, &str)]) -> Result<String> {
        let response = self
            .http
            .get(self.api_url(language))
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl WikiFacade for WikipediaClient {
    async fn search(&self, language: Language, title: &str) -> Result<SearchResult> {
        let title = title.trim();
        if title.is_empty() {
            return Err(WikiError::EmptyQuery);
        }

        debug!(%language, title, "querying article");
        let thumbnail_size = self.config.thumbnail_size.to_string();
        let body = self
            .get_text(
                language,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("prop", "extracts|pageimages|extlinks"),
                    ("titles", title),
                    ("exintro", "1"),
                    ("pithumbsize", &thumbnail_size),
                ],
            )
            .await?;

        response::parse_search(&body, title, i18n::strings(language).no_description)
    }

    async fn suggest(&self, language: Language, text: &str) -> Result<Vec<Suggestion>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        debug!(%language, text, "fetching suggestions");
        let limit = self.config.suggestion_limit.to_string();
        let body = self
            .get_text(
                language,
                &[
                    ("action", "opensearch"),
                    ("format", "json"),
                    ("namespace", "0"),
                    ("limit", &limit),
                    ("search", text),
                ],
            )
            .await?;

        response::parse_suggestions(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_follows_language() {
        let client = WikipediaClient::new(Config::default()).unwrap();
        assert_eq!(
            client.api_url(Language::En),
            "https://en.wikipedia.org/w/api.php"
        );
        assert_eq!(
            client.api_url(Language::Zh),
            "https://zh.wikipedia.org/w/api.php"
        );
    }

    #[test]
    fn test_api_url_honours_host_template() {
        let config = Config {
            host_template: "http://127.0.0.1:8080/{lang}".to_string(),
            ..Config::default()
        };
        let client = WikipediaClient::new(config).unwrap();
        assert_eq!(
            client.api_url(Language::Pl),
            "http://127.0.0.1:8080/pl/w/api.php"
        );
    }

    #[tokio::test]
    async fn test_blank_search_never_reaches_the_network() {
        let config = Config {
            host_template: "http://invalid.invalid".to_string(),
            ..Config::default()
        };
        let client = WikipediaClient::new(config).unwrap();

        let err = client.search(Language::En, "   ").await.unwrap_err();
        assert!(matches!(err, WikiError::EmptyQuery));
        assert!(client.suggest(Language::En, " ").await.unwrap().is_empty());
    }
}
