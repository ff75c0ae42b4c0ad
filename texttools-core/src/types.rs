//! Document tree produced by tokenization and enriched by metadata computation
//!
//! Derived fields start at zero and are filled in by
//! [`compute_metadata`](crate::metadata::compute_metadata). Field names
//! serialize in camelCase, which is the layout of the metadata file.

use crate::readability::ReadabilityReport;
use serde::{Deserialize, Serialize};

/// Maximum of a per-unit count together with the checksum of the first
/// unit that reached it.
///
/// Stored as `{"sentence": <crc32>, "count": n}` or `{"word": <crc32>,
/// "count": n}` depending on the unit; see [`sentence_holder`] and
/// [`word_holder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Superlative {
    /// CRC32 of the first sentence or word reaching `count`
    pub checksum: Option<String>,
    /// The maximum value seen
    pub count: usize,
}

impl Superlative {
    /// Record a candidate. Only a strictly greater count replaces the
    /// current holder, so ties keep the first occurrence.
    pub fn observe(&mut self, count: usize, checksum: &str) {
        if self.checksum.is_none() || count > self.count {
            self.count = count;
            self.checksum = Some(checksum.to_string());
        }
    }
}

/// Generates a serde adapter that stores a [`Superlative`] holder under `$key`
macro_rules! holder_adapter {
    ($module:ident, $key:ident) => {
        #[doc = concat!("Serde adapter naming the holder `", stringify!($key), "`")]
        pub mod $module {
            use super::Superlative;
            use serde::{Deserialize, Deserializer, Serialize, Serializer};

            #[derive(Serialize)]
            struct Stored<'a> {
                $key: Option<&'a str>,
                count: usize,
            }

            #[derive(Deserialize)]
            struct Loaded {
                #[serde(default)]
                $key: Option<String>,
                #[serde(default)]
                count: usize,
            }

            pub fn serialize<S: Serializer>(
                value: &Superlative,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                Stored {
                    $key: value.checksum.as_deref(),
                    count: value.count,
                }
                .serialize(serializer)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Superlative, D::Error> {
                let loaded = Loaded::deserialize(deserializer)?;
                Ok(Superlative {
                    checksum: loaded.$key,
                    count: loaded.count,
                })
            }
        }
    };
}

holder_adapter!(sentence_holder, sentence);
holder_adapter!(word_holder, word);

/// A single token with its syllables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Original token
    pub word: String,
    /// Hyphenation units; concatenated they give back the word
    pub syllables: Vec<String>,
    #[serde(default)]
    pub syllable_count: usize,
    #[serde(default)]
    pub char_count: usize,
    #[serde(default)]
    pub crc32: String,
    #[serde(default)]
    pub average_syllable_length: f64,
}

impl Word {
    /// Create a word from its syllables
    pub fn new(word: impl Into<String>, syllables: Vec<String>) -> Self {
        Self {
            word: word.into(),
            syllables,
            ..Default::default()
        }
    }

    /// Create a word that is its own single syllable
    pub fn monosyllable(word: impl Into<String>) -> Self {
        let word = word.into();
        let syllables = vec![word.clone()];
        Self::new(word, syllables)
    }
}

/// A sentence span and its words, in text order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// Original sentence text
    pub sentence: String,
    pub words: Vec<Word>,
    #[serde(default)]
    pub crc32: String,
    #[serde(default)]
    pub punctuation_count: usize,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub char_count: usize,
    #[serde(default)]
    pub syllable_count: usize,
    #[serde(default)]
    pub average_syllables_per_word: f64,
    #[serde(default)]
    pub average_syllable_length: f64,
    #[serde(default)]
    pub average_word_length: f64,
    #[serde(default, with = "word_holder")]
    pub max_syllable_count_per_word: Superlative,
}

impl Sentence {
    /// Create a sentence from its text and words
    pub fn new(sentence: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            sentence: sentence.into(),
            words,
            ..Default::default()
        }
    }
}

/// A whole text: ordered sentences plus document-level aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub sentence_count: usize,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub syllable_count: usize,
    #[serde(default)]
    pub char_count: usize,
    #[serde(default)]
    pub punctuation_count: usize,
    #[serde(default, with = "sentence_holder")]
    pub max_punctuation_count_per_sentence: Superlative,
    #[serde(default, with = "sentence_holder")]
    pub max_word_count_per_sentence: Superlative,
    #[serde(default, with = "sentence_holder")]
    pub max_char_count_per_sentence: Superlative,
    #[serde(default, with = "word_holder")]
    pub max_syllable_count_per_word: Superlative,
    #[serde(default, with = "word_holder")]
    pub max_char_count_per_word: Superlative,
    #[serde(default)]
    pub average_words_per_sentence: f64,
    #[serde(default)]
    pub average_syllables_per_word: f64,
    #[serde(default)]
    pub average_syllable_length: f64,
    #[serde(default)]
    pub average_word_length: f64,
    #[serde(default)]
    pub average_punctuation_per_sentence: f64,
    /// Readability indices, present once the document has been scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_ease: Option<ReadabilityReport>,
}

impl Document {
    /// Create a document from tokenized sentences
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self {
            sentences,
            ..Default::default()
        }
    }

    /// All words of the document in text order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences.iter().flat_map(|s| s.words.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superlative_first_occurrence_wins() {
        let mut max = Superlative::default();
        max.observe(2, "A");
        max.observe(3, "B");
        max.observe(3, "C");
        max.observe(1, "D");
        assert_eq!(max.count, 3);
        assert_eq!(max.checksum.as_deref(), Some("B"));
    }

    #[test]
    fn test_superlative_zero_count_is_recorded() {
        let mut max = Superlative::default();
        max.observe(0, "A");
        max.observe(0, "B");
        assert_eq!(max.checksum.as_deref(), Some("A"));
    }

    #[test]
    fn test_monosyllable() {
        let word = Word::monosyllable("Hi");
        assert_eq!(word.syllables, vec!["Hi".to_string()]);
    }

    #[test]
    fn test_words_iterates_in_order() {
        let doc = Document::new(vec![
            Sentence::new("A b.", vec![Word::monosyllable("A"), Word::monosyllable("b")]),
            Sentence::new("C.", vec![Word::monosyllable("C")]),
        ]);
        let words: Vec<&str> = doc.words().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["A", "b", "C"]);
    }

    #[test]
    fn test_superlatives_name_their_unit() {
        let mut doc = Document::new(vec![Sentence::new("Hi.", vec![Word::monosyllable("Hi")])]);
        doc.max_word_count_per_sentence.observe(1, "ABC");
        doc.max_syllable_count_per_word.observe(1, "DEF");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json["maxWordCountPerSentence"],
            serde_json::json!({"sentence": "ABC", "count": 1})
        );
        assert_eq!(
            json["maxSyllableCountPerWord"],
            serde_json::json!({"word": "DEF", "count": 1})
        );
        assert!(json["sentences"][0]["maxSyllableCountPerWord"].get("word").is_some());

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back.max_word_count_per_sentence, doc.max_word_count_per_sentence);
        assert_eq!(back.max_syllable_count_per_word.checksum.as_deref(), Some("DEF"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let word = Word::monosyllable("Hi");
        let json = serde_json::to_value(&word).unwrap();
        assert!(json.get("syllableCount").is_some());
        assert!(json.get("averageSyllableLength").is_some());
    }
}
