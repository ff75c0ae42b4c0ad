//! Readability indices
//!
//! The formulas are pure functions over document aggregates. They are
//! combined into a [`ReadabilityReport`] by [`compute_readability`], which
//! reads the counts from a document whose metadata has been computed.

use crate::error::{ComputationError, Result};
use crate::precision::round_digits;
use crate::types::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flesch Reading Ease, German variant: `180 - asl - 58.5 * asw`
pub fn flesch_reading_ease(asl: f64, asw: f64) -> f64 {
    180.0 - asl - (58.5 * asw)
}

/// Flesch-Kincaid Grade Level: `0.39 * asl + 11.8 * asw - 15.59`
pub fn flesch_kincaid_grade_level(asl: f64, asw: f64) -> f64 {
    (0.39 * asl) + (11.8 * asw) - 15.59
}

/// Gunning-Fog Index: `((w / s) + d) * 0.4`
///
/// `d` is the number of words with at least three syllables.
pub fn gunning_fog_index(words: f64, sentences: f64, complex_words: f64) -> f64 {
    ((words / sentences) + complex_words) * 0.4
}

/// Inputs of the Wiener Sachtextformel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SachtextInputs {
    /// Words per word with three or more syllables
    pub ms: f64,
    /// Average sentence length in words
    pub sl: f64,
    /// Words per word with six or more letters
    pub iw: f64,
    /// Words per single-syllable word
    pub es: f64,
}

/// The four variants of the Wiener Sachtextformel, in order.
pub fn wiener_sachtextformel(inputs: SachtextInputs) -> [f64; 4] {
    let SachtextInputs { ms, sl, iw, es } = inputs;
    [
        0.1935 * ms + 0.1672 * sl + 0.1297 * iw - 0.0327 * es - 0.875,
        0.2007 * ms + 0.1682 * sl + 0.1373 * iw - 2.779,
        0.2963 * ms + 0.1905 * sl - 1.1144,
        0.2656 * sl + 0.2744 * ms - 1.693,
    ]
}

/// Assessment band of a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleschAssessment {
    /// Below zero
    Invalid,
    VeryDifficult,
    Difficult,
    MediumDifficult,
    Medium,
    MediumEasy,
    Easy,
    VeryEasy,
    /// Above 100 (or not a number). The scale defines no band here and
    /// the score is reported as is.
    Undefined,
}

impl FleschAssessment {
    /// Classify a score; upper bounds are inclusive.
    pub fn assess(fre: f64) -> Self {
        if fre.is_nan() {
            FleschAssessment::Undefined
        } else if fre < 0.0 {
            FleschAssessment::Invalid
        } else if fre <= 30.0 {
            FleschAssessment::VeryDifficult
        } else if fre <= 50.0 {
            FleschAssessment::Difficult
        } else if fre <= 60.0 {
            FleschAssessment::MediumDifficult
        } else if fre <= 70.0 {
            FleschAssessment::Medium
        } else if fre <= 80.0 {
            FleschAssessment::MediumEasy
        } else if fre <= 90.0 {
            FleschAssessment::Easy
        } else if fre <= 100.0 {
            FleschAssessment::VeryEasy
        } else {
            FleschAssessment::Undefined
        }
    }

    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            FleschAssessment::Invalid => "invalid FRE index",
            FleschAssessment::VeryDifficult => "very difficult",
            FleschAssessment::Difficult => "difficult",
            FleschAssessment::MediumDifficult => "medium difficult",
            FleschAssessment::Medium => "medium",
            FleschAssessment::MediumEasy => "medium easy",
            FleschAssessment::Easy => "easy",
            FleschAssessment::VeryEasy => "very easy",
            FleschAssessment::Undefined => "undefined",
        }
    }
}

impl fmt::Display for FleschAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single report entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexValue {
    Count(usize),
    Score(f64),
    Assessment(String),
}

/// One line of the readability report, e.g. `{id: "fre", name: ..., value: 72.25}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityIndex {
    pub id: String,
    pub name: String,
    pub value: IndexValue,
}

impl ReadabilityIndex {
    fn count(id: &str, name: &str, value: usize) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value: IndexValue::Count(value),
        }
    }

    fn score(id: &str, name: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value: IndexValue::Score(round_digits(value)),
        }
    }
}

/// Ordered list of readability results, serialized as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadabilityReport {
    pub indices: Vec<ReadabilityIndex>,
}

impl ReadabilityReport {
    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&IndexValue> {
        self.indices.iter().find(|i| i.id == id).map(|i| &i.value)
    }

    /// Look up a numeric score by id
    pub fn score(&self, id: &str) -> Option<f64> {
        match self.get(id)? {
            IndexValue::Score(value) => Some(*value),
            _ => None,
        }
    }
}

/// Word counts the indices depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordClassCounts {
    pub at_least_six_letters: usize,
    pub at_least_three_syllables: usize,
    pub one_syllable: usize,
}

impl WordClassCounts {
    /// Count the word classes over an analyzed document
    pub fn from_document(document: &Document) -> Self {
        document
            .words()
            .fold(WordClassCounts::default(), |mut counts, word| {
                if word.char_count >= 6 {
                    counts.at_least_six_letters += 1;
                }
                if word.syllable_count >= 3 {
                    counts.at_least_three_syllables += 1;
                }
                if word.syllable_count == 1 {
                    counts.one_syllable += 1;
                }
                counts
            })
    }
}

fn per_class(words: usize, class_count: usize) -> f64 {
    if class_count == 0 {
        0.0
    } else {
        words as f64 / class_count as f64
    }
}

/// Compute every index for an analyzed document.
///
/// The document must have passed metadata computation; a document with
/// no words or no sentences is rejected.
pub fn compute_readability(document: &Document) -> Result<ReadabilityReport> {
    let words = document.word_count;
    let sentences = document.sentence_count;
    if sentences == 0 {
        return Err(ComputationError::DivisionByZero {
            unit: "document".to_string(),
            denominator: "sentences",
        });
    }
    if words == 0 {
        return Err(ComputationError::EmptyDocument);
    }

    let asl = document.average_words_per_sentence;
    let asw = document.average_syllables_per_word;
    let counts = WordClassCounts::from_document(document);

    let fre = flesch_reading_ease(asl, asw);
    let fkgl = flesch_kincaid_grade_level(asl, asw);
    let gfi = gunning_fog_index(
        words as f64,
        sentences as f64,
        counts.at_least_three_syllables as f64,
    );
    let [wsf1, wsf2, wsf3, wsf4] = wiener_sachtextformel(SachtextInputs {
        ms: per_class(words, counts.at_least_three_syllables),
        sl: asl,
        iw: per_class(words, counts.at_least_six_letters),
        es: per_class(words, counts.one_syllable),
    });

    let indices = vec![
        ReadabilityIndex::count(
            "words_with_6_letters",
            "Words with at least 6 letters",
            counts.at_least_six_letters,
        ),
        ReadabilityIndex::count(
            "words_with_at_least_3_syllables",
            "Words with at least 3 syllables",
            counts.at_least_three_syllables,
        ),
        ReadabilityIndex::count(
            "words_with_only_one_syllable",
            "Words with only one syllable",
            counts.one_syllable,
        ),
        ReadabilityIndex::score("fre", "Flesch-Reading-Ease (DE)", fre),
        ReadabilityIndex {
            id: "frea".to_string(),
            name: "Flesch-Reading-Ease (DE) Assessment".to_string(),
            value: IndexValue::Assessment(FleschAssessment::assess(fre).to_string()),
        },
        ReadabilityIndex::score("fkgl", "Flesch-Kincaid Grade Level (US)", fkgl),
        ReadabilityIndex::score("gfi", "Gunning-Fog Index (US)", gfi),
        ReadabilityIndex::score("wsf1", "Erste Wiener Sachtextformel (DE)", wsf1),
        ReadabilityIndex::score("wsf2", "Zweite Wiener Sachtextformel (DE)", wsf2),
        ReadabilityIndex::score("wsf3", "Dritte Wiener Sachtextformel (DE)", wsf3),
        ReadabilityIndex::score("wsf4", "Vierte Wiener Sachtextformel (DE)", wsf4),
    ];

    Ok(ReadabilityReport { indices })
}
