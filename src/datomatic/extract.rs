use itertools::Itertools;
use lazy_static::lazy_static;
use regex::RegexBuilder;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

const E: &str = "Invalid selector";
lazy_static! {
    static ref SYSTEM_HEADING: Selector = Selector::parse("h3").expect(E);
    static ref ANY_HEADING: Selector = Selector::parse("h1, h2, h4, h5, h6").expect(E);
    static ref ROMNAME_ROW: Selector = Selector::parse("tr.romname_section").expect(E);
    static ref TD: Selector = Selector::parse("td").expect(E);
}

fn joined_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .join(" ")
}

/// Platform name from the record heading. Dat-o-MATIC puts it in an `h3`;
/// other heading levels are only consulted when there is none.
pub fn find_system_name(doc: &Html) -> Option<String> {
    doc.select(&SYSTEM_HEADING)
        .next()
        .or_else(|| doc.select(&ANY_HEADING).next())
        .map(joined_text)
}

/// Canonical rom name from the first cell of the `romname_section` row.
pub fn find_romname_header(doc: &Html) -> Option<String> {
    let row = doc.select(&ROMNAME_ROW).next()?;
    let cell = row.select(&TD).next()?;

    let text = joined_text(cell).replace('\u{a0}', "");
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Value following the first label in `labels` that occurs in `text`.
///
/// Labels are tried in order and the first one with a match wins, whatever
/// the document order of the matches.
pub fn find_field<L: AsRef<str>>(text: &str, labels: &[L]) -> Option<String> {
    labels.iter().find_map(|label| {
        let pattern = format!(
            r"\b{}\b\s*[:\-]?\s*([A-Za-z0-9._\-]+)",
            regex::escape(label.as_ref())
        );
        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                warn!("Skip label {:?}: {}", label.as_ref(), e);
                return None;
            }
        };
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// First run of filename-ish characters ending in `.{ext}`.
///
/// Only newlines, angle brackets and quotes stop the run, so leading words on
/// the same line end up in the token.
pub fn find_first_file_with_ext(text: &str, ext: &str) -> Option<String> {
    let pattern = format!(r#"([^\n\r<>"']+?\.{})\b"#, regex::escape(ext));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
