//! Case-folded word frequency tables

use crate::error::{ComputationError, Result};
use crate::types::Document;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Word → absolute count, in first-seen order
pub type WordCounts = IndexMap<String, u64>;

/// Count and relative frequency of one word
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub count: u64,
    pub frequency: f64,
}

/// Mapping from lower-cased word to its count and frequency.
///
/// Frequencies are always derived from the counts and sum to 1.0 over
/// the table. Entries keep the order in which words were first seen,
/// which is what breaks ties when ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    words: IndexMap<String, WordFrequency>,
}

impl FrequencyTable {
    /// Build the table for a document. "Word" and "word" share one entry.
    pub fn from_document(document: &Document) -> Result<Self> {
        let mut counts = WordCounts::new();
        for word in document.words() {
            *counts.entry(word.word.to_lowercase()).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    /// Build a table from absolute counts, recomputing all frequencies.
    pub fn from_counts(counts: WordCounts) -> Result<Self> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(ComputationError::EmptyDocument);
        }

        let words = counts
            .into_iter()
            .map(|(word, count)| {
                let frequency = count as f64 / total as f64;
                (word, WordFrequency { count, frequency })
            })
            .collect();
        Ok(Self { words })
    }

    /// Look up a word (already lower-cased)
    pub fn get(&self, word: &str) -> Option<&WordFrequency> {
        self.words.get(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all counts
    pub fn total_count(&self) -> u64 {
        self.words.values().map(|w| w.count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordFrequency)> {
        self.words.iter().map(|(word, freq)| (word.as_str(), freq))
    }

    /// Entries sorted descending by count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, &WordFrequency)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        entries
    }

    /// Absolute counts in first-seen order
    pub fn counts(&self) -> WordCounts {
        self.words
            .iter()
            .map(|(word, freq)| (word.clone(), freq.count))
            .collect()
    }
}
