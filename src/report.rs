use crate::config::Fallbacks;
use crate::datomatic::{Checksums, DatomaticRecord};
use crate::ReportError;
use serde::Serialize;
use std::fmt;

/// A record with every fallback resolved, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub header: String,
    pub game_id: String,
    pub system_name: String,
    pub url: String,
    pub pkg: Checksums,
    #[serde(skip_serializing_if = "Checksums::is_empty")]
    pub rap: Checksums,
}

impl Report {
    pub fn new(record: DatomaticRecord, url: &str, fallbacks: &Fallbacks) -> Self {
        Report {
            header: record.title.unwrap_or_else(|| fallbacks.header.clone()),
            game_id: record.game_id.unwrap_or_else(|| fallbacks.game_id.clone()),
            system_name: record
                .system_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| fallbacks.system_name.clone()),
            url: url.to_string(),
            pkg: record.pkg,
            rap: record.rap,
        }
    }

    pub fn link_text(&self) -> String {
        if self.system_name.is_empty() {
            "Datomatic".to_string()
        } else {
            format!("Datomatic - {}", self.system_name)
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

struct HashLine<'a>(&'a Checksums);

fn slot(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl fmt::Display for HashLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CRC32: [b]{}[/b] | MD5: [b]{}[/b] | SHA-1: [b]{}[/b]",
            slot(&self.0.crc32),
            slot(&self.0.md5),
            slot(&self.0.sha1)
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[align=center][b]{}[/b]", self.header)?;
        writeln!(f, "Game ID: [b]{}[/b]", self.game_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "Verified against No-Intro Checksums [url={}]{}[/url]",
            self.url,
            self.link_text()
        )?;
        writeln!(f, "PKG - {}", HashLine(&self.pkg))?;
        if !self.rap.is_empty() {
            writeln!(f, "RAP - {}", HashLine(&self.rap))?;
        }
        write!(
            f,
            "To use these files, install them on a modified PS3 or RPCS3[/align]"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const URL: &str = "https://datomatic.no-intro.org/index.php?page=show_record&s=999&n=0001";

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn pkg_record() -> DatomaticRecord {
        DatomaticRecord {
            title: some("Cool Game (USA)"),
            system_name: some("Sony - PlayStation 3"),
            game_id: some("BCUS98765"),
            pkg_file: some("Cool Game (USA).pkg"),
            rap_file: None,
            pkg: Checksums {
                crc32: some("aabbccdd"),
                md5: Some("0".repeat(32)),
                sha1: Some("0".repeat(40)),
            },
            rap: Checksums::default(),
        }
    }

    #[test]
    fn test_render_pkg_only() {
        let report = Report::new(pkg_record(), URL, &Fallbacks::default());
        let expected = format!(
            "[align=center][b]Cool Game (USA)[/b]\n\
             Game ID: [b]BCUS98765[/b]\n\
             \n\
             Verified against No-Intro Checksums [url={}]Datomatic - Sony - PlayStation 3[/url]\n\
             PKG - CRC32: [b]aabbccdd[/b] | MD5: [b]{}[/b] | SHA-1: [b]{}[/b]\n\
             To use these files, install them on a modified PS3 or RPCS3[/align]",
            URL,
            "0".repeat(32),
            "0".repeat(40)
        );
        assert_eq!(report.to_string(), expected);
        assert!(!report.to_string().contains("RAP - "));
    }

    #[test]
    fn test_render_pkg_and_rap() {
        let mut record = pkg_record();
        record.rap = Checksums {
            crc32: some("deadbeef"),
            md5: None,
            sha1: None,
        };
        let rendered = Report::new(record, URL, &Fallbacks::default()).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[4].starts_with("PKG - CRC32: [b]aabbccdd[/b]"));
        assert_eq!(
            lines[5],
            "RAP - CRC32: [b]deadbeef[/b] | MD5: [b][/b] | SHA-1: [b][/b]"
        );
    }

    #[test]
    fn test_render_fallbacks() {
        let record = DatomaticRecord {
            system_name: some(""),
            ..DatomaticRecord::default()
        };
        let rendered = Report::new(record, URL, &Fallbacks::default()).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "[align=center][b]Dat-o-MATIC Record[/b]");
        assert_eq!(lines[1], "Game ID: [b]N/A[/b]");
        assert!(lines[3].ends_with("]Datomatic - Sony - PlayStation 3 (PSN) (Themes)[/url]"));
        assert_eq!(
            lines[4],
            "PKG - CRC32: [b][/b] | MD5: [b][/b] | SHA-1: [b][/b]"
        );
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_render_custom_fallbacks() {
        let fallbacks = Fallbacks {
            header: "Unknown".to_string(),
            system_name: String::new(),
            game_id: "-".to_string(),
        };
        let rendered = Report::new(DatomaticRecord::default(), URL, &fallbacks).to_string();

        assert!(rendered.starts_with("[align=center][b]Unknown[/b]\nGame ID: [b]-[/b]\n"));
        assert!(rendered.contains(&format!("[url={}]Datomatic[/url]", URL)));
    }

    #[test]
    fn test_render_is_idempotent() {
        let report = Report::new(pkg_record(), URL, &Fallbacks::default());
        assert_eq!(report.to_string(), report.to_string());
        assert_eq!(report.to_json().unwrap(), report.to_json().unwrap());
    }

    #[test]
    fn test_to_json() {
        let report = Report::new(pkg_record(), URL, &Fallbacks::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["header"], "Cool Game (USA)");
        assert_eq!(value["game_id"], "BCUS98765");
        assert_eq!(value["pkg"]["crc32"], "aabbccdd");
        assert!(value.get("rap").is_none());
    }
}
