//! Derived per-word, per-sentence and per-document metrics
//!
//! A single pass over the sentences with a nested pass over their words
//! fills every derived field of a [`Document`] in place. Superlatives are
//! tracked during the walk, so a tie keeps the earliest sentence or word.

use crate::checksum::crc32_hex;
use crate::error::{ComputationError, Result};
use crate::precision::ratio;
use crate::types::{Document, Sentence, Superlative, Word};

/// ASCII punctuation, the set counted per sentence
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Count punctuation characters in `text`.
pub fn count_punctuation(text: &str) -> usize {
    text.chars().filter(|c| PUNCTUATION.contains(*c)).count()
}

/// Fill every derived field of `document`.
///
/// Fails with [`ComputationError::DivisionByZero`] for a document without
/// sentences or a sentence without words, and with
/// [`ComputationError::NoSyllables`] when a word carries no syllables.
pub fn compute_metadata(document: &mut Document) -> Result<()> {
    let mut totals = Totals::default();

    for (index, sentence) in document.sentences.iter_mut().enumerate() {
        compute_sentence(sentence, index, &mut totals)?;
    }

    let sentence_count = document.sentences.len();
    let doc_unit = || "document".to_string();

    document.sentence_count = sentence_count;
    document.word_count = totals.words;
    document.syllable_count = totals.syllables;
    document.char_count = totals.chars;
    document.punctuation_count = totals.punctuation;
    document.max_punctuation_count_per_sentence = totals.max_punctuation;
    document.max_word_count_per_sentence = totals.max_words;
    document.max_char_count_per_sentence = totals.max_sentence_chars;
    document.max_syllable_count_per_word = totals.max_syllables;
    document.max_char_count_per_word = totals.max_word_chars;

    document.average_words_per_sentence =
        ratio(totals.words, sentence_count, doc_unit, "sentences")?;
    document.average_syllables_per_word =
        ratio(totals.syllables, totals.words, doc_unit, "words")?;
    document.average_syllable_length =
        ratio(totals.chars, totals.syllables, doc_unit, "syllables")?;
    document.average_word_length = ratio(totals.chars, totals.words, doc_unit, "words")?;
    document.average_punctuation_per_sentence =
        ratio(totals.punctuation, sentence_count, doc_unit, "sentences")?;

    Ok(())
}

#[derive(Default)]
struct Totals {
    words: usize,
    syllables: usize,
    chars: usize,
    punctuation: usize,
    max_punctuation: Superlative,
    max_words: Superlative,
    max_sentence_chars: Superlative,
    max_syllables: Superlative,
    max_word_chars: Superlative,
}

fn compute_word(word: &mut Word) -> Result<()> {
    let syllable_count = word.syllables.len();
    if syllable_count == 0 {
        return Err(ComputationError::NoSyllables {
            word: word.word.clone(),
        });
    }

    word.syllable_count = syllable_count;
    word.char_count = word.word.chars().count();
    word.crc32 = crc32_hex(&word.word);
    word.average_syllable_length = ratio(
        word.char_count,
        syllable_count,
        || format!("word '{}'", word.word),
        "syllables",
    )?;
    Ok(())
}

fn compute_sentence(sentence: &mut Sentence, index: usize, totals: &mut Totals) -> Result<()> {
    let mut chars = 0;
    let mut syllables = 0;
    let mut max_syllables = Superlative::default();

    for word in sentence.words.iter_mut() {
        compute_word(word)?;

        chars += word.char_count;
        syllables += word.syllable_count;
        max_syllables.observe(word.syllable_count, &word.crc32);
        totals.max_syllables.observe(word.syllable_count, &word.crc32);
        totals.max_word_chars.observe(word.char_count, &word.crc32);
    }

    let word_count = sentence.words.len();
    let unit = || format!("sentence {}", index + 1);

    sentence.crc32 = crc32_hex(&sentence.sentence);
    sentence.punctuation_count = count_punctuation(&sentence.sentence);
    sentence.word_count = word_count;
    sentence.char_count = chars;
    sentence.syllable_count = syllables;
    sentence.max_syllable_count_per_word = max_syllables;
    sentence.average_syllables_per_word = ratio(syllables, word_count, unit, "words")?;
    sentence.average_word_length = ratio(chars, word_count, unit, "words")?;
    sentence.average_syllable_length = ratio(chars, syllables, unit, "syllables")?;

    totals
        .max_punctuation
        .observe(sentence.punctuation_count, &sentence.crc32);
    totals.max_words.observe(word_count, &sentence.crc32);
    totals.max_sentence_chars.observe(chars, &sentence.crc32);
    totals.words += word_count;
    totals.syllables += syllables;
    totals.chars += chars;
    totals.punctuation += sentence.punctuation_count;

    Ok(())
}
