//! Syllabification
//!
//! The analysis only needs syllable counts and lengths, so the default
//! implementation is a vowel-group heuristic driven by the language
//! config rather than a dictionary hyphenator. Other strategies plug in
//! through [`Syllabifier`].

use crate::language::Syllables;

/// Splits a word into syllables
///
/// Implementations must return parts that concatenate back to `word`.
/// An empty result is allowed; the tokenizer then keeps the word as a
/// single syllable.
pub trait Syllabifier: Send + Sync {
    /// Split `word` into its syllables
    fn syllables(&self, word: &str) -> Vec<String>;
}

/// One syllable per vowel group
///
/// Consonants between two vowel groups go to the second syllable when
/// there is one of them; a longer run is split before its last
/// consonant, or before a configured cluster ending the run.
#[derive(Debug, Clone)]
pub struct VowelGroupSyllabifier {
    vowels: Vec<char>,
    clusters: Vec<Vec<char>>,
    silent_final_e: bool,
}

impl VowelGroupSyllabifier {
    /// Build from the `[syllables]` section of a language config
    pub fn new(config: &Syllables) -> Self {
        let mut clusters: Vec<Vec<char>> = config
            .clusters
            .iter()
            .map(|c| c.chars().collect())
            .filter(|c: &Vec<char>| !c.is_empty())
            .collect();
        // Longest match wins
        clusters.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            vowels: config.vowels.chars().collect(),
            clusters,
            silent_final_e: config.silent_final_e,
        }
    }

    fn is_vowel(&self, ch: char) -> bool {
        ch.to_lowercase().all(|c| self.vowels.contains(&c))
    }

    /// `(start, end)` char ranges of the vowel groups in `lower`
    fn vowel_groups(&self, lower: &[char]) -> Vec<(usize, usize)> {
        let mut groups = Vec::new();
        let mut start = None;
        for (i, &ch) in lower.iter().enumerate() {
            match (self.is_vowel(ch), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    groups.push((s, i));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            groups.push((s, lower.len()));
        }

        if self.silent_final_e && groups.len() > 1 && self.ends_with_silent_e(lower, &groups) {
            groups.pop();
        }
        groups
    }

    /// A trailing lone `e`, except in a consonant + `le` ending ("table")
    fn ends_with_silent_e(&self, lower: &[char], groups: &[(usize, usize)]) -> bool {
        let Some(&(start, end)) = groups.last() else {
            return false;
        };
        if end != lower.len() || end - start != 1 || lower[start] != 'e' {
            return false;
        }
        !(start >= 2 && lower[start - 1] == 'l' && !self.is_vowel(lower[start - 2]))
    }

    /// Char index where the syllable after the consonant run `run` starts
    fn split_point(&self, lower: &[char], run: (usize, usize)) -> usize {
        let (start, end) = run;
        let len = end - start;
        if len <= 1 {
            return start;
        }
        let consonants = &lower[start..end];
        for cluster in &self.clusters {
            if cluster.len() <= len && consonants.ends_with(cluster) {
                return end - cluster.len();
            }
        }
        end - 1
    }
}

impl Syllabifier for VowelGroupSyllabifier {
    fn syllables(&self, word: &str) -> Vec<String> {
        let original: Vec<char> = word.chars().collect();
        if original.is_empty() {
            return Vec::new();
        }
        let lower: Vec<char> = original
            .iter()
            .map(|c| c.to_lowercase().next().unwrap_or(*c))
            .collect();

        let groups = self.vowel_groups(&lower);
        let mut cuts = Vec::with_capacity(groups.len());
        for pair in groups.windows(2) {
            cuts.push(self.split_point(&lower, (pair[0].1, pair[1].0)));
        }

        let mut syllables = Vec::with_capacity(cuts.len() + 1);
        let mut from = 0;
        for cut in cuts {
            syllables.push(original[from..cut].iter().collect());
            from = cut;
        }
        syllables.push(original[from..].iter().collect());
        syllables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageConfig;

    fn german() -> VowelGroupSyllabifier {
        VowelGroupSyllabifier::new(&LanguageConfig::builtin("de_DE").unwrap().syllables)
    }

    fn english() -> VowelGroupSyllabifier {
        VowelGroupSyllabifier::new(&LanguageConfig::builtin("en_US").unwrap().syllables)
    }

    #[test]
    fn test_single_consonant_goes_right() {
        assert_eq!(german().syllables("über"), vec!["ü", "ber"]);
        assert_eq!(german().syllables("Tisch"), vec!["Tisch"]);
    }

    #[test]
    fn test_consonant_run_split_before_last() {
        assert_eq!(german().syllables("Sonne"), vec!["Son", "ne"]);
        assert_eq!(german().syllables("Fenster"), vec!["Fens", "ter"]);
    }

    #[test]
    fn test_cluster_stays_together() {
        assert_eq!(german().syllables("machen"), vec!["ma", "chen"]);
        assert_eq!(german().syllables("Wäsche"), vec!["Wä", "sche"]);
        assert_eq!(german().syllables("Menschen"), vec!["Men", "schen"]);
    }

    #[test]
    fn test_diphthong_is_one_group() {
        assert_eq!(german().syllables("Haus"), vec!["Haus"]);
        assert_eq!(german().syllables("heute"), vec!["heu", "te"]);
    }

    #[test]
    fn test_silent_final_e() {
        assert_eq!(english().syllables("make"), vec!["make"]);
        assert_eq!(english().syllables("table"), vec!["tab", "le"]);
        assert_eq!(english().syllables("the"), vec!["the"]);
        assert_eq!(german().syllables("Hase"), vec!["Ha", "se"]);
    }

    #[test]
    fn test_no_vowel_is_one_syllable() {
        assert_eq!(german().syllables("Psst"), vec!["Psst"]);
    }

    #[test]
    fn test_parts_concatenate_to_word() {
        let syllabifier = german();
        for word in ["Kopfsteinpflaster", "Straße", "Ärger", "Aal", "Donaudampfschiff"] {
            let parts = syllabifier.syllables(word);
            assert!(!parts.is_empty());
            assert!(parts.iter().all(|p| !p.is_empty()));
            assert_eq!(parts.concat(), word);
        }
    }

    #[test]
    fn test_empty_word() {
        assert!(german().syllables("").is_empty());
    }
}
