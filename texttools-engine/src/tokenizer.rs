//! Text to [`Document`] conversion
//!
//! A [`Tokenizer`] is built explicitly for one language; there is no
//! process-wide instance, so tokenizers for different languages can be
//! used side by side.

use crate::error::Result;
use crate::language::LanguageConfig;
use crate::syllables::{Syllabifier, VowelGroupSyllabifier};
use std::fmt;
use texttools_core::{Document, Sentence, Word};

/// Sentence, word and syllable splitter for one language
pub struct Tokenizer {
    config: LanguageConfig,
    syllabifier: Box<dyn Syllabifier>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("language", &self.config.metadata.code)
            .finish_non_exhaustive()
    }
}

impl Tokenizer {
    /// Create a tokenizer using the vowel-group syllabifier
    pub fn new(config: LanguageConfig) -> Self {
        let syllabifier = VowelGroupSyllabifier::new(&config.syllables);
        Self {
            config,
            syllabifier: Box::new(syllabifier),
        }
    }

    /// Create a tokenizer for an embedded language
    pub fn for_language(tag: &str) -> Result<Self> {
        Ok(Self::new(LanguageConfig::builtin(tag)?))
    }

    /// Replace the syllabifier
    pub fn with_syllabifier(mut self, syllabifier: impl Syllabifier + 'static) -> Self {
        self.syllabifier = Box::new(syllabifier);
        self
    }

    /// The language this tokenizer was built for
    pub fn language(&self) -> &LanguageConfig {
        &self.config
    }

    /// Split `text` into sentences, words and syllables
    ///
    /// Sentences that contain no word are dropped.
    pub fn tokenize(&self, text: &str) -> Document {
        let sentences: Vec<Sentence> = self
            .split_sentences(text)
            .into_iter()
            .filter_map(|sentence| {
                let words: Vec<Word> = self
                    .split_words(sentence)
                    .into_iter()
                    .map(|token| self.word(token))
                    .collect();
                if words.is_empty() {
                    log::trace!("dropping sentence without words: {sentence:?}");
                    None
                } else {
                    Some(Sentence::new(sentence, words))
                }
            })
            .collect();

        log::debug!(
            "tokenized {} sentences ({})",
            sentences.len(),
            self.config.metadata.code
        );
        Document::new(sentences)
    }

    /// Sentence spans of `text`, trimmed, never empty
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        let mut push = |from: usize, to: usize| {
            let span = text[from..to].trim();
            if !span.is_empty() {
                sentences.push(span);
            }
        };

        while i < chars.len() {
            let (pos, ch) = chars[i];

            if ch == '\n' && self.config.terminators.paragraph_breaks {
                let mut j = i + 1;
                while j < chars.len() && chars[j].1 != '\n' && chars[j].1.is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && chars[j].1 == '\n' {
                    push(start, pos);
                    start = chars[j].0 + 1;
                    i = j + 1;
                    continue;
                }
            }

            if self.is_terminator(ch) {
                let mut j = i;
                while j < chars.len() && self.is_terminator(chars[j].1) {
                    j += 1;
                }
                let run = j - i;
                while j < chars.len() && self.config.terminators.closing.contains(&chars[j].1) {
                    j += 1;
                }

                let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
                let separated = chars.get(j).map_or(true, |&(_, c)| c.is_whitespace());
                let suppressed = run == 1 && ch == '.' && self.is_non_final_dot(&text[start..pos]);
                if separated && !suppressed {
                    push(start, end);
                    start = end;
                }
                i = j;
                continue;
            }

            i += 1;
        }
        push(start, text.len());

        sentences
    }

    /// Alphabetic word tokens of a sentence, surrounding punctuation removed
    pub fn split_words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .flat_map(split_clitics)
            .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
            .collect()
    }

    /// Build a word with its syllables
    pub fn word(&self, token: &str) -> Word {
        let mut syllables = self.syllabifier.syllables(token);
        if syllables.is_empty() {
            syllables.push(token.to_string());
        }
        Word::new(token, syllables)
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.config.terminators.chars.contains(&ch)
    }

    /// Whether a dot after the last token of `before` marks an
    /// abbreviation, an initial or an ordinal number
    fn is_non_final_dot(&self, before: &str) -> bool {
        let Some(token) = before.split_whitespace().last() else {
            return false;
        };
        let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() {
            return false;
        }

        let abbreviations = &self.config.abbreviations;
        if self.config.is_abbreviation(token) {
            return true;
        }
        let mut chars = token.chars();
        if abbreviations.single_letters
            && chars.next().is_some_and(char::is_alphabetic)
            && chars.next().is_none()
        {
            return true;
        }
        abbreviations.ordinal_numbers && token.chars().all(|c| c.is_ascii_digit())
    }
}

/// Apostrophes that join a clitic to its host word
const APOSTROPHES: [char; 2] = ['\'', '’'];

/// Split contractions and possessives at apostrophes
///
/// The host word is kept; trailing clitics of up to two letters (`s`,
/// `re`, `ll`, `t`) are dropped, longer segments (`O'Brien`) are kept as
/// words. A negation `n't` is split off its stem, so `don't` yields `do`.
fn split_clitics(token: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = token.split(|c: char| APOSTROPHES.contains(&c)).collect();
    if parts.len() == 1 {
        return parts;
    }
    if parts.len() == 2 && parts[1].eq_ignore_ascii_case("t") {
        if let Some(stem) = parts[0].strip_suffix(|c: char| c == 'n' || c == 'N') {
            if !stem.is_empty() {
                parts[0] = stem;
            }
        }
    }

    let mut words = vec![parts[0]];
    words.extend(parts[1..].iter().copied().filter(|part| part.chars().count() > 2));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> Tokenizer {
        Tokenizer::for_language("de_DE").unwrap()
    }

    fn english() -> Tokenizer {
        Tokenizer::for_language("en_US").unwrap()
    }

    #[test]
    fn test_basic_sentences() {
        let sentences = german().split_sentences("Die Sonne scheint. Es ist warm! Wirklich?");
        assert_eq!(sentences, vec!["Die Sonne scheint.", "Es ist warm!", "Wirklich?"]);
    }

    #[test]
    fn test_terminator_run_and_closing_quote() {
        let sentences = english().split_sentences("He said \"Stop!\" She left?! Fine.");
        assert_eq!(sentences, vec!["He said \"Stop!\"", "She left?!", "Fine."]);
    }

    #[test]
    fn test_dot_inside_token_is_not_boundary() {
        let sentences = english().split_sentences("Version 1.5 is out. Get it now.");
        assert_eq!(sentences, vec!["Version 1.5 is out.", "Get it now."]);
    }

    #[test]
    fn test_abbreviations_suppress_boundary() {
        let sentences = german().split_sentences("Das gilt z.B. für Hunde, Katzen usw. und mehr. Gut.");
        assert_eq!(
            sentences,
            vec!["Das gilt z.B. für Hunde, Katzen usw. und mehr.", "Gut."]
        );

        let sentences = english().split_sentences("Mr. Smith met J. Doe. They talked.");
        assert_eq!(sentences, vec!["Mr. Smith met J. Doe.", "They talked."]);
    }

    #[test]
    fn test_ordinal_numbers() {
        let sentences = german().split_sentences("Am 3. Mai war es kalt. Dann nicht mehr.");
        assert_eq!(sentences, vec!["Am 3. Mai war es kalt.", "Dann nicht mehr."]);

        let sentences = english().split_sentences("We counted to 3. Then stopped.");
        assert_eq!(sentences, vec!["We counted to 3.", "Then stopped."]);
    }

    #[test]
    fn test_paragraph_break_ends_sentence() {
        let sentences = german().split_sentences("Kapitel Eins\n\nEs war einmal.\nUnd weiter.");
        assert_eq!(sentences, vec!["Kapitel Eins", "Es war einmal.", "Und weiter."]);
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = german().split_sentences("  Ein Satz. Ohne Ende  ");
        assert_eq!(sentences, vec!["Ein Satz.", "Ohne Ende"]);
    }

    #[test]
    fn test_split_words_drops_non_alphabetic() {
        let words = german().split_words("„Hallo“, sagte er 2024 zu Müller-Lüdenscheidt (wirklich)!");
        assert_eq!(words, vec!["Hallo", "sagte", "er", "zu", "wirklich"]);
    }

    #[test]
    fn test_split_words_keeps_contraction_hosts() {
        let words = english().split_words("Don't stop, it's Peter's dog and we're fine.");
        assert_eq!(words, vec!["Do", "stop", "it", "Peter", "dog", "and", "we", "fine"]);

        let words = english().split_words("Ask O’Brien, he isn't here.");
        assert_eq!(words, vec!["Ask", "O", "Brien", "he", "is", "here"]);
    }

    #[test]
    fn test_split_words_german_apostrophes() {
        let words = german().split_words("Wie geht's dir, sagt's er?");
        assert_eq!(words, vec!["Wie", "geht", "dir", "sagt", "er"]);
    }

    #[test]
    fn test_tokenize_document() {
        let document = german().tokenize("Die Sonne scheint. 1234! Es ist warm.");
        assert_eq!(document.sentences.len(), 2);
        assert_eq!(document.sentences[0].sentence, "Die Sonne scheint.");
        assert_eq!(document.sentences[0].words.len(), 3);
        assert_eq!(document.sentences[0].words[1].syllables, vec!["Son", "ne"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        let document = german().tokenize("  \n\n ... ");
        assert!(document.sentences.is_empty());
    }

    struct NoSplit;

    impl Syllabifier for NoSplit {
        fn syllables(&self, _word: &str) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_empty_syllabifier_output_keeps_word() {
        let tokenizer = german().with_syllabifier(NoSplit);
        let word = tokenizer.word("Kopfsteinpflaster");
        assert_eq!(word.syllables, vec!["Kopfsteinpflaster"]);
    }

    #[test]
    fn test_tokenizers_coexist() {
        let de = german();
        let en = english();
        assert_eq!(de.language().metadata.code, "de_DE");
        assert_eq!(en.language().metadata.code, "en_US");
        assert_eq!(en.word("make").syllables.len(), 1);
        assert_eq!(de.word("Hase").syllables.len(), 2);
    }
}
