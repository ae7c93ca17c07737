mod extract;
mod hashes;
mod normalize;

pub use extract::{find_field, find_first_file_with_ext, find_romname_header, find_system_name};
pub use hashes::{extract_hashes_near, Checksums};
pub use normalize::{normalize, NormalizedDocument};

use crate::config::{END_MARKER, ID_LABELS, PKG_EXT, RAP_EXT};
use crate::ReportError;
use tracing::{debug, warn};

/// Fields pulled out of one Dat-o-MATIC record page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatomaticRecord {
    pub title: Option<String>,
    pub system_name: Option<String>,
    pub game_id: Option<String>,
    pub pkg_file: Option<String>,
    pub rap_file: Option<String>,
    pub pkg: Checksums,
    pub rap: Checksums,
}

#[derive(Debug, Clone)]
pub struct DatomaticExtractor {
    pub id_labels: Vec<String>,
    pub end_marker: String,
}

impl Default for DatomaticExtractor {
    fn default() -> Self {
        DatomaticExtractor {
            id_labels: ID_LABELS.iter().map(ToString::to_string).collect(),
            end_marker: END_MARKER.to_string(),
        }
    }
}

impl DatomaticExtractor {
    pub fn extract(&self, html: &str) -> Result<DatomaticRecord, ReportError> {
        let doc = normalize(html)?;
        let text = doc.text.as_str();

        let game_id = find_field(text, self.id_labels.as_slice());
        if game_id.is_none() {
            warn!("No identifier found for labels {:?}", self.id_labels);
        }

        let pkg_file = find_first_file_with_ext(text, PKG_EXT);
        let rap_file = find_first_file_with_ext(text, RAP_EXT);
        debug!("PKG file: {:?}, RAP file: {:?}", pkg_file, rap_file);

        // The RAP section follows the PKG section, so it closes the PKG window.
        let pkg = match &pkg_file {
            Some(pkg_file) => {
                let boundary = rap_file.as_deref().unwrap_or(&self.end_marker);
                extract_hashes_near(text, pkg_file, boundary)
            }
            None => {
                warn!("No .{} file found", PKG_EXT);
                Checksums::default()
            }
        };
        let rap = rap_file
            .as_deref()
            .map(|rap_file| extract_hashes_near(text, rap_file, &self.end_marker))
            .unwrap_or_default();

        Ok(DatomaticRecord {
            title: doc.romname_header,
            system_name: doc.system_name,
            game_id,
            pkg_file,
            rap_file,
            pkg,
            rap,
        })
    }
}
