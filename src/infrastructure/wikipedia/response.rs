use crate::domain::error::{Result, WikiError};
use crate::domain::models::{SearchResult, Suggestion};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Pages,
}

/// `query.pages` keyed by page id, kept in document order.
#[derive(Debug, Default)]
struct Pages(Vec<(String, Page)>);

impl<'de> Deserialize<'de> for Pages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PagesVisitor;

        impl<'de> Visitor<'de> for PagesVisitor {
            type Value = Pages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of page ids to pages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Pages, A::Error> {
                let mut pages = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Page>()? {
                    pages.push(entry);
                }
                Ok(Pages(pages))
            }
        }

        deserializer.deserialize_map(PagesVisitor)
    }
}

impl Pages {
    /// The page a browser would list first: real page ids in ascending
    /// order, then placeholder keys such as `-1` in document order.
    fn into_first(mut self) -> Option<Page> {
        let page_id = |key: &str| key.parse::<u32>().ok().filter(|id| id.to_string() == key);
        let position = self
            .0
            .iter()
            .enumerate()
            .filter_map(|(i, (key, _))| page_id(key).map(|id| (id, i)))
            .min()
            .map(|(_, i)| i)
            .or_else(|| (!self.0.is_empty()).then_some(0))?;
        Some(self.0.swap_remove(position).1)
    }
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    missing: Option<IgnoredAny>,
    #[serde(default)]
    invalid: Option<IgnoredAny>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
    #[serde(default)]
    extlinks: Vec<ExtLink>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Debug, Deserialize)]
struct ExtLink {
    #[serde(rename = "*", alias = "url")]
    url: String,
}

impl Page {
    fn into_result(self, no_description: &str) -> Option<SearchResult> {
        if self.missing.is_some() || self.invalid.is_some() {
            return None;
        }
        Some(SearchResult {
            title: self.title?,
            extract: self
                .extract
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| no_description.to_string()),
            image: self.thumbnail.map(|t| t.source),
            references: self.extlinks.into_iter().map(|l| l.url).collect(),
        })
    }
}

/// Maps an `action=query` body onto a [`SearchResult`]. Only the first page is
/// considered; no `query` object, a missing page or an invalid title all mean
/// not found.
pub fn parse_search(body: &str, title: &str, no_description: &str) -> Result<SearchResult> {
    let response: QueryResponse = serde_json::from_str(body)?;
    response
        .query
        .and_then(|q| q.pages.into_first())
        .and_then(|page| page.into_result(no_description))
        .ok_or_else(|| WikiError::NotFound(title.to_string()))
}

/// `[query, [titles], [descriptions], [urls]]`
#[derive(Debug, Deserialize)]
struct OpenSearchResponse(String, Vec<String>, Vec<String>, Vec<String>);

/// Zips opensearch titles and urls. One suggestion per title; a title without
/// a url gets an empty one.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>> {
    let OpenSearchResponse(_, titles, _, urls) = serde_json::from_str(body)?;
    Ok(titles
        .into_iter()
        .enumerate()
        .map(|(i, title)| Suggestion {
            title,
            url: urls.get(i).cloned().unwrap_or_default(),
        })
        .collect())
}
