//! Quantitative text metrics for TextTools
//!
//! This crate holds the pure, deterministic part of the analysis: no
//! I/O, no tokenization. It turns a tokenized [`Document`] into
//! per-sentence and per-word statistics, readability indices and a
//! word-frequency table, and it merges frequency tables into a corpus
//! baseline that single documents can be compared against.
//!
//! # Example
//!
//! ```rust
//! use texttools_core::{compute_metadata, compute_readability, Document, FrequencyTable, Sentence, Word};
//!
//! let mut document = Document::new(vec![Sentence::new(
//!     "Das Haus ist alt.",
//!     vec![
//!         Word::monosyllable("Das"),
//!         Word::monosyllable("Haus"),
//!         Word::monosyllable("ist"),
//!         Word::monosyllable("alt"),
//!     ],
//! )]);
//!
//! compute_metadata(&mut document).unwrap();
//! let report = compute_readability(&document).unwrap();
//! let table = FrequencyTable::from_document(&document).unwrap();
//!
//! assert_eq!(document.word_count, 4);
//! assert!(report.score("fre").is_some());
//! assert_eq!(table.len(), 4);
//! ```

pub mod checksum;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod metadata;
pub mod precision;
pub mod readability;
pub mod types;

pub use corpus::{merge_counts, CorpusDiff, CorpusMatrix, CorpusMeta, CorpusWord, DiffEntry};
pub use error::{ComputationError, Result};
pub use frequency::{FrequencyTable, WordCounts, WordFrequency};
pub use metadata::compute_metadata;
pub use readability::{compute_readability, FleschAssessment, ReadabilityReport};
pub use types::{Document, Sentence, Superlative, Word};

/// Compute metadata and readability for a tokenized document and build
/// its frequency table.
pub fn analyze_document(document: &mut Document) -> Result<FrequencyTable> {
    compute_metadata(document)?;
    document.reading_ease = Some(compute_readability(document)?);
    FrequencyTable::from_document(document)
}
