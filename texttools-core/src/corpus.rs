//! Corpus baseline ("common sense matrix") and document comparison
//!
//! Learning a corpus is a fold of per-document word counts through
//! [`merge_counts`]. The merged counts become a [`CorpusMatrix`], ranked
//! by count. [`CorpusMatrix::evaluate`] then diffs a document's
//! frequency table against that baseline.

use crate::error::{ComputationError, Result};
use crate::frequency::{FrequencyTable, WordCounts};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Add `increment` into `acc`.
///
/// Words new to the accumulator are appended, so the result keeps
/// first-merged order. Final counts do not depend on merge order or
/// grouping.
pub fn merge_counts(mut acc: WordCounts, increment: &WordCounts) -> WordCounts {
    for (word, count) in increment {
        *acc.entry(word.clone()).or_insert(0) += count;
    }
    acc
}

/// Summary of a learned corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMeta {
    /// Folder the corpus was learned from
    pub source: String,
    /// Sum of all word counts
    pub total_count: u64,
    /// Number of distinct words
    pub unique_count: usize,
}

/// `[word, count, frequency]`, serialized as a three-element array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusWord(pub String, pub u64, pub f64);

impl CorpusWord {
    pub fn word(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }

    pub fn frequency(&self) -> f64 {
        self.2
    }
}

/// Merged word-frequency baseline of a folder of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusMatrix {
    pub meta: CorpusMeta,
    /// Sorted by count, descending; ties keep first-merged order
    pub words: Vec<CorpusWord>,
}

impl CorpusMatrix {
    /// Rank merged counts and derive frequencies.
    pub fn from_counts(source: impl Into<String>, counts: WordCounts) -> Result<Self> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(ComputationError::EmptyCorpus);
        }

        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let unique_count = ranked.len();
        let words = ranked
            .into_iter()
            .map(|(word, count)| CorpusWord(word, count, count as f64 / total as f64))
            .collect();

        Ok(Self {
            meta: CorpusMeta {
                source: source.into(),
                total_count: total,
                unique_count,
            },
            words,
        })
    }

    /// Words the document uses more often than the corpus does.
    ///
    /// Words missing from the corpus are left out: a zero baseline gives
    /// no meaningful excess. Only strictly positive differences are kept,
    /// sorted descending; ties keep the document's frequency order.
    pub fn evaluate(&self, document: &FrequencyTable) -> CorpusDiff {
        let baseline: HashMap<&str, f64> = self
            .words
            .iter()
            .map(|w| (w.word(), w.frequency()))
            .collect();

        let mut entries: Vec<DiffEntry> = document
            .ranked()
            .into_iter()
            .filter_map(|(word, freq)| {
                let corpus = baseline.get(word).copied().unwrap_or(0.0);
                (corpus > 0.0 && freq.frequency > corpus).then(|| DiffEntry {
                    word: word.to_string(),
                    difference: freq.frequency - corpus,
                })
            })
            .collect();
        entries.sort_by(|a, b| b.difference.total_cmp(&a.difference));

        CorpusDiff { entries }
    }
}

/// One over-used word and by how much its frequency exceeds the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    pub word: String,
    pub difference: f64,
}

/// Ranked excess usage of a document relative to a corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusDiff {
    pub entries: Vec<DiffEntry>,
}

impl CorpusDiff {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> WordCounts {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_merge_adds_counts() {
        let merged = merge_counts(
            counts(&[("der", 3), ("hund", 1)]),
            &counts(&[("hund", 2), ("katze", 4)]),
        );
        assert_eq!(merged, counts(&[("der", 3), ("hund", 3), ("katze", 4)]));
    }

    #[test]
    fn test_matrix_ranks_by_count_with_stable_ties() {
        let matrix =
            CorpusMatrix::from_counts("corpus", counts(&[("b", 2), ("a", 5), ("c", 2)])).unwrap();
        let order: Vec<&str> = matrix.words.iter().map(CorpusWord::word).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(matrix.meta.total_count, 9);
        assert_eq!(matrix.meta.unique_count, 3);
        assert_eq!(matrix.words[0].frequency(), 5.0 / 9.0);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        assert_eq!(
            CorpusMatrix::from_counts("x", WordCounts::new()).unwrap_err(),
            ComputationError::EmptyCorpus
        );
    }

    #[test]
    fn test_serializes_words_as_arrays() {
        let matrix = CorpusMatrix::from_counts("f", counts(&[("a", 1)])).unwrap();
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["words"][0], serde_json::json!(["a", 1, 1.0]));
        assert_eq!(json["meta"]["total_count"], 1);
    }

    #[test]
    fn test_evaluate_excludes_absent_and_underused_words() {
        // corpus: der 0.5, hund 0.25, katze 0.25
        let matrix = CorpusMatrix::from_counts(
            "c",
            counts(&[("der", 2), ("hund", 1), ("katze", 1)]),
        )
        .unwrap();
        // document: hund 0.5, maus 0.25, der 0.25
        let doc = FrequencyTable::from_counts(counts(&[("hund", 2), ("maus", 1), ("der", 1)]))
            .unwrap();

        let diff = matrix.evaluate(&doc);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.entries[0].word, "hund");
        assert_eq!(diff.entries[0].difference, 0.25);
        assert!(!diff.entries.iter().any(|e| e.word == "maus"));
    }

    #[test]
    fn test_evaluate_sorts_descending() {
        let matrix = CorpusMatrix::from_counts(
            "c",
            counts(&[("a", 10), ("b", 10), ("c", 10), ("d", 70)]),
        )
        .unwrap();
        let doc = FrequencyTable::from_counts(counts(&[("a", 2), ("b", 5), ("c", 3)])).unwrap();

        let diff = matrix.evaluate(&doc);
        let words: Vec<&str> = diff.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["b", "c", "a"]);
        assert!(diff.entries.iter().all(|e| e.difference > 0.0));
    }
}
