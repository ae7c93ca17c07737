use lazy_regex::regex;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Checksums {
    pub crc32: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
}

impl Checksums {
    pub fn is_empty(&self) -> bool {
        self.crc32.is_none() && self.md5.is_none() && self.sha1.is_none()
    }
}

/// Byte offset of the first case-insensitive occurrence of `needle` at or
/// after `from`.
fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let re = match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            warn!("Skip search for {:?}: {}", needle, e);
            return None;
        }
    };
    re.find(&haystack[from..]).map(|m| from + m.start())
}

fn capture_hex(re: &Regex, window: &str) -> Option<String> {
    re.captures(window)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Checksums listed between `anchor` and the next `boundary`.
///
/// A missing anchor starts the window at the beginning of `text`, a missing
/// boundary ends it at the end of `text`.
pub fn extract_hashes_near(text: &str, anchor: &str, boundary: &str) -> Checksums {
    let start = find_ignore_case(text, anchor, 0).unwrap_or(0);
    let end = find_ignore_case(text, boundary, start).unwrap_or(text.len());
    let window = &text[start..end];

    Checksums {
        crc32: capture_hex(regex!(r"\bCRC32\b\s*[:\-]?\s*([0-9a-fA-F]{8})\b"), window),
        md5: capture_hex(regex!(r"\bMD5\b\s*[:\-]?\s*([0-9a-fA-F]{32})\b"), window),
        sha1: capture_hex(
            regex!(r"\bSHA[- ]?1\b\s*[:\-]?\s*([0-9a-fA-F]{40})\b"),
            window,
        ),
    }
}
