//! Flattening of the HTML extracts returned by the query API into plain text
//! that a terminal paragraph can wrap.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("li regex"));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br regex"));
static BLOCK_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</(?:p|div|h[1-6]|ul|ol|dl|blockquote|table)\s*>").expect("block regex")
});
static ITEM_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(?:dd|dt|tr)\s*>").expect("item regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").expect("entity regex"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").expect("space regex"));
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("blank regex"));

/// Converts an HTML fragment into plain text. Block elements become blank-line
/// separated paragraphs, list items become bullets, every other tag is dropped.
#[must_use]
pub fn to_plain_text(html: &str) -> String {
    // Source newlines are insignificant whitespace in HTML.
    let text = html.replace(['\r', '\n', '\t'], " ");
    let text = COMMENT.replace_all(&text, "");
    let text = LIST_ITEM.replace_all(&text, "\n• ");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = ITEM_END.replace_all(&text, "\n");
    let text = BLOCK_END.replace_all(&text, "\n\n");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| SPACES.replace_all(line, " ").trim().to_string())
        .collect();
    let joined = lines.join("\n");
    BLANK_RUNS.replace_all(&joined, "\n\n").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    let numeric = NUMERIC_ENTITY.replace_all(text, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            _ => None,
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    // `&amp;` last so that `&amp;lt;` stays `&lt;`.
    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&ndash;", "–")
        .replace("&mdash;", "—")
        .replace("&amp;", "&")
}
