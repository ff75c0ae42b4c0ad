//! Result file formats and file naming
//!
//! Every analyzed source `<stem>.<ext>` gets two siblings:
//! `<stem>_metadata.json` with the full document tree and
//! `<stem>_wordfrequencies.csv` with its word table. Folder-level files
//! start with an underscore so they are never mistaken for per-document
//! results.

mod diff;
mod matrix;
mod metadata;
mod paths;
mod word_table;

pub use diff::{format_general, write_diff};
pub use matrix::{read_matrix, write_matrix};
pub use metadata::{read_header, read_metadata, write_metadata, MetadataFile};
pub use paths::{
    diff_path, document_base, folder_word_table_path, list_files_with_suffix, matrix_path,
    metadata_path, word_table_path, CORPUS_MATRIX_FILE, DIFF_SUFFIX, METADATA_SUFFIX,
    WORD_TABLE_SUFFIX,
};
pub use word_table::{read_word_counts, write_word_table};

use crate::error::EngineError;
use std::path::Path;

/// Classify a serde_json failure: I/O problems stay I/O, the rest is a
/// format error
pub(crate) fn json_error(path: &Path, err: serde_json::Error) -> EngineError {
    if err.is_io() {
        EngineError::io(path, err.into())
    } else {
        EngineError::parse(path, err)
    }
}

pub(crate) fn csv_error(path: &Path, err: csv::Error) -> EngineError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => EngineError::io(path, source),
        _ => EngineError::parse(path, message),
    }
}
