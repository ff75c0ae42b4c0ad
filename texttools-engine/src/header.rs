//! Analysis header stored with every result file

use crate::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version tag written into headers; a different tag invalidates caches
pub const ANALYZE_VERSION: &str = "1.0.1";

/// Local timestamp format for `Date of analysis`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `_meta` block of a metadata file or word table
///
/// Every field is optional on read so that incomplete headers can be
/// reported as stale instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisHeader {
    /// Source file name without directories
    #[serde(rename = "Filename", default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Absolute folder path, for folder aggregates
    #[serde(rename = "Folder", default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// MD5 of the source
    #[serde(rename = "MD5", default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// CRC32 of the source
    #[serde(rename = "CRC32", default, skip_serializing_if = "Option::is_none")]
    pub crc32: Option<String>,
    /// When the analysis ran
    #[serde(rename = "Date of analysis", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Analyzer version tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze_version: Option<String>,
    /// Language code used for tokenization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl AnalysisHeader {
    /// Header for a single analyzed file
    pub fn for_file(path: &Path, fingerprint: Fingerprint, version: &str, language: &str) -> Self {
        Self {
            filename: path.file_name().map(|n| n.to_string_lossy().into_owned()),
            folder: None,
            md5: Some(fingerprint.md5),
            crc32: Some(fingerprint.crc32),
            date: Some(now()),
            analyze_version: Some(version.to_string()),
            language: Some(language.to_string()),
        }
    }

    /// Header for a folder aggregate
    pub fn for_folder(folder: &Path) -> Self {
        Self {
            folder: Some(folder.display().to_string()),
            date: Some(now()),
            ..Self::default()
        }
    }

    /// Labelled rows for the top of a word-frequency CSV, present fields only
    pub fn csv_rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Filename", &self.filename),
            ("Folder", &self.folder),
            ("Date of Analysis", &self.date),
            ("CRC32 Checksum", &self.crc32),
            ("MD5 Hash", &self.md5),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
