//! Incremental re-analysis check
//!
//! A source needs no new analysis when its metadata header still
//! matches the file's fingerprint, the analyzer version and the
//! requested language. Anything else, including a missing or broken
//! metadata file, makes the cached result stale. The check itself never
//! fails.

use crate::fingerprint::fingerprint;
use crate::header::AnalysisHeader;
use crate::storage::{metadata_path, read_header};
use std::fmt;
use std::path::Path;

/// Outcome of a cache check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// Stored results describe the current source
    Fresh,
    /// The source must be analyzed again
    Stale(StaleReason),
}

impl CacheStatus {
    /// Whether stored results can be reused
    pub fn is_fresh(&self) -> bool {
        matches!(self, CacheStatus::Fresh)
    }
}

/// Why stored results cannot be reused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// No readable metadata file
    MetadataUnavailable(String),
    /// The source itself could not be fingerprinted
    SourceUnreadable(String),
    /// The header lacks a field
    MissingField(&'static str),
    /// A header field differs from the current value
    Mismatch {
        /// Header field name
        field: &'static str,
        /// Value in the metadata file
        stored: String,
        /// Current value
        current: String,
    },
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::MetadataUnavailable(reason) => write!(f, "no usable metadata: {reason}"),
            StaleReason::SourceUnreadable(reason) => write!(f, "cannot read source: {reason}"),
            StaleReason::MissingField(field) => write!(f, "metadata header has no {field}"),
            StaleReason::Mismatch {
                field,
                stored,
                current,
            } => write!(f, "{field} differs: {stored} in metadata vs. {current} now"),
        }
    }
}

/// Compares stored analysis headers with the current state of a source
#[derive(Debug, Clone)]
pub struct CacheValidator {
    version: String,
}

impl CacheValidator {
    /// Validator for results written by analyzer `version`
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Check whether `source` needs a fresh analysis in `language`
    pub fn check(&self, source: &Path, language: &str) -> CacheStatus {
        let status = match self.compare(source, language) {
            Ok(()) => CacheStatus::Fresh,
            Err(reason) => CacheStatus::Stale(reason),
        };
        match &status {
            CacheStatus::Fresh => log::debug!("{}: metadata is up to date", source.display()),
            CacheStatus::Stale(reason) => log::info!("{}: {reason}", source.display()),
        }
        status
    }

    fn compare(&self, source: &Path, language: &str) -> Result<(), StaleReason> {
        let header: AnalysisHeader = read_header(&metadata_path(source))
            .map_err(|e| StaleReason::MetadataUnavailable(e.to_string()))?;
        let current =
            fingerprint(source).map_err(|e| StaleReason::SourceUnreadable(e.to_string()))?;

        expect_field("CRC32", header.crc32.as_deref(), &current.crc32)?;
        expect_field("MD5", header.md5.as_deref(), &current.md5)?;
        expect_field("analyze_version", header.analyze_version.as_deref(), &self.version)?;
        expect_field("language", header.language.as_deref(), language)
    }
}

fn expect_field(field: &'static str, stored: Option<&str>, current: &str) -> Result<(), StaleReason> {
    let stored = stored.ok_or(StaleReason::MissingField(field))?;
    if stored == current {
        Ok(())
    } else {
        Err(StaleReason::Mismatch {
            field,
            stored: stored.to_string(),
            current: current.to_string(),
        })
    }
}
