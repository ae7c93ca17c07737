pub const DEFAULT_HEADER: &str = "Dat-o-MATIC Record";
pub const DEFAULT_SYSTEM_NAME: &str = "Sony - PlayStation 3 (PSN) (Themes)";
pub const MISSING_GAME_ID: &str = "N/A";

/// Text that closes the last file section of a record page.
pub const END_MARKER: &str = "The dump";

pub const ID_LABELS: [&str; 5] = ["Game ID", "Title ID", "TitleID", "Serial", "Product Code"];

pub const PKG_EXT: &str = "pkg";
pub const RAP_EXT: &str = "rap";

/// Values used in the report when a field could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    pub header: String,
    pub system_name: String,
    pub game_id: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Fallbacks {
            header: DEFAULT_HEADER.to_string(),
            system_name: DEFAULT_SYSTEM_NAME.to_string(),
            game_id: MISSING_GAME_ID.to_string(),
        }
    }
}
