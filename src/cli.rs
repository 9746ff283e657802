use crate::domain::error::WikiError;
use crate::domain::html;
use crate::domain::language::Language;
use crate::domain::models::{SearchResult, Suggestion};
use crate::domain::wiki::WikiFacade;
use crate::i18n;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(
    name = "wikibrowse",
    about = "Search Wikipedia from the terminal",
    version
)]
pub struct Cli {
    /// Wikipedia edition to use (en, es, de, ja, ...).
    #[arg(long, global = true, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the default location.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Without a subcommand the interactive browser starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the summary, image and external links of an article.
    Search {
        /// Article title; several words are joined with spaces.
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Print title suggestions for partially typed text.
    Suggest {
        #[arg(required = true)]
        terms: Vec<String>,
    },
}

fn parse_language(code: &str) -> Result<Language, WikiError> {
    code.parse()
}

/// Runs a one-shot subcommand, reporting failures on stderr.
pub async fn run(
    command: Command,
    adapter: &dyn WikiFacade,
    language: Language,
    as_json: bool,
) -> ExitCode {
    let mut stdout = std::io::stdout();
    let outcome = match command {
        Command::Search { terms } => {
            search(adapter, language, &terms.join(" "), as_json, &mut stdout).await
        }
        Command::Suggest { terms } => {
            suggest(adapter, language, &terms.join(" "), as_json, &mut stdout).await
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<WikiError>() {
                Some(wiki) => {
                    warn!(error = %wiki, "command failed");
                    eprintln!("{}", wiki.user_message(i18n::strings(language)));
                }
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

pub async fn search<W: Write>(
    adapter: &dyn WikiFacade,
    language: Language,
    query: &str,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(WikiError::EmptyQuery.into());
    }
    let result = adapter.search(language, query).await?;
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write_result(out, &result, i18n::strings(language).references_title)?;
    }
    Ok(())
}

pub async fn suggest<W: Write>(
    adapter: &dyn WikiFacade,
    language: Language,
    text: &str,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    let suggestions = adapter.suggest(language, text).await?;
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&suggestions)?)?;
    } else {
        write_suggestions(out, &suggestions)?;
    }
    Ok(())
}

fn write_result<W: Write>(out: &mut W, result: &SearchResult, references_title: &str) -> Result<()> {
    writeln!(out, "{}", result.title)?;
    if let Some(image) = &result.image {
        writeln!(out, "Image: {image}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", html::to_plain_text(&result.extract))?;
    if !result.references.is_empty() {
        writeln!(out)?;
        writeln!(out, "{references_title}")?;
        for (i, url) in result.references.iter().enumerate() {
            writeln!(out, "{:>3}. {url}", i + 1)?;
        }
    }
    Ok(())
}

fn write_suggestions<W: Write>(out: &mut W, suggestions: &[Suggestion]) -> Result<()> {
    for suggestion in suggestions {
        writeln!(out, "{}\t{}", suggestion.title, suggestion.url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wiki::MockWikiFacade;

    fn article() -> SearchResult {
        SearchResult {
            title: "Rust".to_string(),
            extract: "<p>Rust is <i>fast</i>.</p>".to_string(),
            image: Some("https://upload.wikimedia.org/rust.png".to_string()),
            references: vec!["https://www.rust-lang.org/".to_string()],
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["wikibrowse", "search", "Rust", "language", "--lang", "de"])
            .unwrap();
        assert_eq!(cli.lang, Some(Language::De));
        assert_eq!(
            cli.command,
            Some(Command::Search {
                terms: vec!["Rust".to_string(), "language".to_string()]
            })
        );
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["wikibrowse"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["wikibrowse", "--lang", "xx"]).is_err());
    }

    #[tokio::test]
    async fn test_search_prints_plain_text_article() {
        let mut mock = MockWikiFacade::new();
        mock.expect_search()
            .withf(|_, title| title == "Rust")
            .returning(|_, _| Ok(article()));

        let mut out = Vec::new();
        search(&mock, Language::En, "  Rust ", false, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Rust\nImage: https://upload.wikimedia.org/rust.png\n\nRust is fast.\n\nReferences:\n  1. https://www.rust-lang.org/\n"
        );
    }

    #[tokio::test]
    async fn test_search_json_output() {
        let mut mock = MockWikiFacade::new();
        mock.expect_search().returning(|_, _| Ok(article()));

        let mut out = Vec::new();
        search(&mock, Language::En, "Rust", true, &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["title"], "Rust");
        assert_eq!(value["references"][0], "https://www.rust-lang.org/");
    }

    #[tokio::test]
    async fn test_empty_search_skips_the_network() {
        let mut mock = MockWikiFacade::new();
        mock.expect_search().never();

        let mut out = Vec::new();
        let err = search(&mock, Language::En, "   ", false, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WikiError>(),
            Some(WikiError::EmptyQuery)
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_prints_tab_separated_pairs() {
        let mut mock = MockWikiFacade::new();
        mock.expect_suggest().returning(|_, _| {
            Ok(vec![
                Suggestion {
                    title: "Rust".to_string(),
                    url: "https://en.wikipedia.org/wiki/Rust".to_string(),
                },
                Suggestion {
                    title: "Rust Belt".to_string(),
                    url: String::new(),
                },
            ])
        });

        let mut out = Vec::new();
        suggest(&mock, Language::En, "Rus", false, &mut out)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Rust\thttps://en.wikipedia.org/wiki/Rust\nRust Belt\t\n"
        );
    }
}
