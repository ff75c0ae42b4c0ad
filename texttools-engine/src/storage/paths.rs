use crate::error::{EngineError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix of per-document metadata files
pub const METADATA_SUFFIX: &str = "_metadata.json";
/// Suffix of word-frequency tables
pub const WORD_TABLE_SUFFIX: &str = "_wordfrequencies.csv";
/// Suffix of corpus diff files
pub const DIFF_SUFFIX: &str = "_corpusdiff.csv";
/// File name of the corpus matrix inside a learned folder
pub const CORPUS_MATRIX_FILE: &str = "_corpus_matrix.json";

/// Source path without its result suffix or extension
///
/// `texts/brief.txt` and `texts/brief_wordfrequencies.csv` both map to
/// `texts/brief`.
pub fn document_base(source: &Path) -> PathBuf {
    if let Some(name) = source.file_name().and_then(|n| n.to_str()) {
        if let Some(stem) = name.strip_suffix(WORD_TABLE_SUFFIX) {
            return source.with_file_name(stem);
        }
    }
    source.with_extension("")
}

fn with_suffix(source: &Path, suffix: &str) -> PathBuf {
    let mut path: OsString = document_base(source).into_os_string();
    path.push(suffix);
    PathBuf::from(path)
}

/// `<stem>_metadata.json` next to the source
pub fn metadata_path(source: &Path) -> PathBuf {
    with_suffix(source, METADATA_SUFFIX)
}

/// `<stem>_wordfrequencies.csv` next to the source
pub fn word_table_path(source: &Path) -> PathBuf {
    with_suffix(source, WORD_TABLE_SUFFIX)
}

/// `<stem>_corpusdiff.csv` next to the document
pub fn diff_path(document: &Path) -> PathBuf {
    with_suffix(document, DIFF_SUFFIX)
}

/// `_corpus_matrix.json` inside `folder`
pub fn matrix_path(folder: &Path) -> PathBuf {
    folder.join(CORPUS_MATRIX_FILE)
}

/// `_<folder>_wordfrequencies.csv` inside the folder
pub fn folder_word_table_path(folder: &Path) -> Result<PathBuf> {
    let absolute = folder
        .canonicalize()
        .map_err(|e| EngineError::io(folder, e))?;
    let name = absolute
        .file_name()
        .ok_or_else(|| EngineError::input(folder, "folder has no name"))?
        .to_string_lossy()
        .into_owned();
    Ok(absolute.join(format!("_{name}{WORD_TABLE_SUFFIX}")))
}

/// Regular files in `folder` whose name ends with `suffix`, sorted by name
///
/// With `skip_underscore`, names starting with `_` (folder aggregates)
/// are left out.
pub fn list_files_with_suffix(
    folder: &Path,
    suffix: &str,
    skip_underscore: bool,
) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|e| EngineError::io(folder, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::io(folder, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("skipping non UTF-8 file name {}", path.display());
            continue;
        };
        if !name.ends_with(suffix) || (skip_underscore && name.starts_with('_')) {
            continue;
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
