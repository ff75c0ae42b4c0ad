//! Corpus learning and document evaluation on files

use crate::analyzer::Analyzer;
use crate::error::{EngineError, Result};
use crate::storage::{
    diff_path, list_files_with_suffix, matrix_path, read_matrix, read_word_counts, write_diff,
    write_matrix, WORD_TABLE_SUFFIX,
};
use std::fmt;
use std::path::{Path, PathBuf};
use texttools_core::{merge_counts, CorpusDiff, CorpusMatrix, WordCounts};

/// Result of learning a corpus
#[derive(Debug)]
pub struct LearnOutcome {
    /// The learned matrix
    pub matrix: CorpusMatrix,
    /// Where it was written
    pub path: PathBuf,
    /// Word tables merged into the matrix
    pub files_used: usize,
    /// Word tables found
    pub files_total: usize,
    /// Word tables that could not be read
    pub skipped: Vec<(PathBuf, EngineError)>,
}

impl fmt::Display for LearnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} files used, {} distinct words",
            self.files_used, self.files_total, self.matrix.meta.unique_count
        )
    }
}

/// Builds a corpus matrix from the word tables of an analyzed folder
#[derive(Debug, Clone, Default)]
pub struct CorpusLearner {
    pretty_json: bool,
}

impl CorpusLearner {
    /// Create a learner
    pub fn new(pretty_json: bool) -> Self {
        Self { pretty_json }
    }

    /// Merge every per-document word table of `folder` and write
    /// `_corpus_matrix.json` into it
    ///
    /// Folder aggregates (names starting with `_`) are not merged. Tables
    /// that fail to parse are skipped and reported.
    pub fn learn(&self, folder: &Path) -> Result<LearnOutcome> {
        if !folder.is_dir() {
            return Err(EngineError::input(folder, "not an existing folder"));
        }

        let files = list_files_with_suffix(folder, WORD_TABLE_SUFFIX, true)?;
        log::info!("learning from {} word tables in {}", files.len(), folder.display());

        let mut merged = WordCounts::new();
        let mut files_used = 0;
        let mut skipped = Vec::new();
        for file in &files {
            match read_word_counts(file) {
                Ok(counts) => {
                    log::debug!("merging {} ({} words)", file.display(), counts.len());
                    merged = merge_counts(merged, &counts);
                    files_used += 1;
                }
                Err(error) => {
                    log::warn!("skipping {error}");
                    skipped.push((file.clone(), error));
                }
            }
        }

        let source = folder
            .canonicalize()
            .unwrap_or_else(|_| folder.to_path_buf())
            .display()
            .to_string();
        let matrix = CorpusMatrix::from_counts(source, merged)?;
        let path = matrix_path(folder);
        write_matrix(&path, &matrix, self.pretty_json)?;
        log::info!("wrote corpus matrix {}", path.display());

        Ok(LearnOutcome {
            matrix,
            path,
            files_used,
            files_total: files.len(),
            skipped,
        })
    }
}

/// Resolve a matrix argument: a matrix file, or a learned folder
pub fn locate_matrix(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        let matrix = matrix_path(path);
        if matrix.is_file() {
            Ok(matrix)
        } else {
            Err(EngineError::input(path, "folder has no corpus matrix, run learn first"))
        }
    } else if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(EngineError::input(path, "not an existing matrix file or folder"))
    }
}

/// Result of evaluating a document
#[derive(Debug)]
pub struct EvaluateOutcome {
    /// Over-used words, descending
    pub diff: CorpusDiff,
    /// Where the diff was written
    pub path: PathBuf,
}

/// Compares documents against a learned corpus
#[derive(Debug)]
pub struct CorpusEvaluator<'a> {
    analyzer: &'a Analyzer,
}

impl<'a> CorpusEvaluator<'a> {
    /// Evaluate with `analyzer` providing document tables
    pub fn new(analyzer: &'a Analyzer) -> Self {
        Self { analyzer }
    }

    /// Diff `document` against the matrix at `matrix` and write
    /// `<base>_corpusdiff.csv` next to the document
    pub fn evaluate(&self, matrix: &Path, document: &Path) -> Result<EvaluateOutcome> {
        let matrix_file = locate_matrix(matrix)?;
        let matrix = read_matrix(&matrix_file)?;
        let table = self.analyzer.table_for(document)?;

        let diff = matrix.evaluate(&table);
        let path = diff_path(document);
        write_diff(&path, &diff)?;
        log::info!(
            "{} words above corpus frequency, wrote {}",
            diff.len(),
            path.display()
        );

        Ok(EvaluateOutcome { diff, path })
    }
}
