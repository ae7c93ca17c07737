use super::extract::{find_romname_header, find_system_name};
use crate::ReportError;
use itertools::Itertools;
use lazy_regex::regex;
use scraper::Html;
use tracing::debug;

const NON_CONTENT: [&str; 3] = ["script", "style", "noscript"];

#[derive(Debug, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub text: String,
    pub system_name: Option<String>,
    pub romname_header: Option<String>,
}

/// Flattens a record page into one text blob and pulls the two lookups that
/// need the markup tree (platform heading, rom name row).
pub fn normalize(html: &str) -> Result<NormalizedDocument, ReportError> {
    if html.trim().is_empty() {
        return Err(ReportError::Parse("document is empty".to_string()));
    }

    let doc = Html::parse_document(html);
    if !doc.errors.is_empty() {
        debug!("Recovered from {} markup errors", doc.errors.len());
    }

    Ok(NormalizedDocument {
        text: visible_text(&doc),
        system_name: find_system_name(&doc),
        romname_header: find_romname_header(&doc),
    })
}

fn visible_text(doc: &Html) -> String {
    let raw = doc
        .tree
        .root()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|parent| {
                parent
                    .value()
                    .as_element()
                    .map_or(false, |el| NON_CONTENT.contains(&el.name()))
            })
        })
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .join("\n");

    collapse_whitespace(&raw)
}

fn collapse_whitespace(raw: &str) -> String {
    let text = regex!(r"[ \t]+").replace_all(raw, " ");
    let text = regex!(r"\n(?:[ \t]*\n)+").replace_all(&text, "\n");
    text.trim().to_string()
}
