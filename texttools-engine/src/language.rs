//! Language configuration
//!
//! Tokenization rules are data, not code: each language is a TOML file
//! describing sentence terminators, abbreviations and the letters the
//! syllabifier treats as vowels. Two languages are embedded in the
//! binary; any other can be loaded from a file with the same schema.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Identification
    pub metadata: Metadata,
    /// Sentence boundaries
    pub terminators: Terminators,
    /// Dots that do not end a sentence
    #[serde(default)]
    pub abbreviations: Abbreviations,
    /// Syllabifier input
    pub syllables: Syllables,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Tag stored in analysis headers, e.g. `de_DE`
    pub code: String,
    /// Human-readable name
    pub name: String,
    /// Alternative tags accepted on the command line
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Sentence terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    /// Characters that end a sentence
    pub chars: Vec<char>,
    /// Quotes and brackets that may follow a terminator inside the sentence
    #[serde(default)]
    pub closing: Vec<char>,
    /// Treat an empty line as a sentence boundary
    #[serde(default = "default_true")]
    pub paragraph_breaks: bool,
}

/// Abbreviation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    /// Lower-case, without the final dot
    #[serde(default)]
    pub words: Vec<String>,
    /// A single letter before a dot is an initial, not a sentence end
    #[serde(default)]
    pub single_letters: bool,
    /// Digits before a dot form an ordinal ("3. Mai")
    #[serde(default)]
    pub ordinal_numbers: bool,
}

/// Syllabification hints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Syllables {
    /// Letters that form syllable nuclei
    pub vowels: String,
    /// Consonant groups that start a syllable together
    #[serde(default)]
    pub clusters: Vec<String>,
    /// A lone final `e` does not form its own syllable
    #[serde(default)]
    pub silent_final_e: bool,
}

fn default_true() -> bool {
    true
}

const EMBEDDED: [(&str, &str); 2] = [
    ("german", include_str!("../configs/languages/german.toml")),
    ("english", include_str!("../configs/languages/english.toml")),
];

impl LanguageConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: LanguageConfig = toml::from_str(source)
            .map_err(|e| EngineError::ConfigError(format!("invalid language config: {e}")))?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        Self::from_toml_str(&source).map_err(|e| match e {
            EngineError::ConfigError(reason) => {
                EngineError::ConfigError(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }

    /// Look up an embedded language by code or alias, ignoring case
    pub fn builtin(tag: &str) -> Result<Self> {
        for (name, source) in EMBEDDED {
            let config = Self::from_toml_str(source).map_err(|e| {
                EngineError::ConfigError(format!("embedded {name} config is broken: {e}"))
            })?;
            if config.matches(tag) {
                return Ok(config);
            }
        }
        Err(EngineError::UnsupportedLanguage(tag.to_string()))
    }

    /// Whether `tag` names this language
    pub fn matches(&self, tag: &str) -> bool {
        self.metadata.code.eq_ignore_ascii_case(tag)
            || self
                .metadata
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(tag))
    }

    /// Whether `token` (without its final dot) is a known abbreviation
    pub fn is_abbreviation(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.abbreviations.words.iter().any(|w| *w == lower)
    }

    fn normalize(&mut self) {
        for word in &mut self.abbreviations.words {
            *word = word.trim_end_matches('.').to_lowercase();
        }
        self.syllables.vowels = self.syllables.vowels.to_lowercase();
        for cluster in &mut self.syllables.clusters {
            *cluster = cluster.to_lowercase();
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(EngineError::ConfigError("language code is empty".to_string()));
        }
        if self.terminators.chars.is_empty() {
            return Err(EngineError::ConfigError(
                "no terminator characters defined".to_string(),
            ));
        }
        if self.syllables.vowels.is_empty() {
            return Err(EngineError::ConfigError("no vowels defined".to_string()));
        }
        Ok(())
    }
}

/// Codes and names of the embedded languages
pub fn list_builtin_languages() -> Vec<(String, String)> {
    EMBEDDED
        .iter()
        .filter_map(|(_, source)| LanguageConfig::from_toml_str(source).ok())
        .map(|config| (config.metadata.code, config.metadata.name))
        .collect()
}

/// Resolve a language from an optional config file, falling back to the
/// embedded table
pub fn resolve(tag: &str, file: Option<&Path>) -> Result<LanguageConfig> {
    match file {
        Some(path) => LanguageConfig::from_file(path),
        None => LanguageConfig::builtin(tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_configs_parse() {
        let languages = list_builtin_languages();
        assert_eq!(languages.len(), EMBEDDED.len());
        assert!(languages.iter().any(|(code, _)| code == "de_DE"));
        assert!(languages.iter().any(|(code, _)| code == "en_US"));
    }

    #[test]
    fn test_builtin_lookup_by_alias() {
        assert_eq!(LanguageConfig::builtin("de_DE").unwrap().metadata.code, "de_DE");
        assert_eq!(LanguageConfig::builtin("DE").unwrap().metadata.code, "de_DE");
        assert_eq!(LanguageConfig::builtin("english").unwrap().metadata.code, "en_US");
    }

    #[test]
    fn test_unknown_language() {
        let result = LanguageConfig::builtin("tlh");
        assert!(matches!(result, Err(EngineError::UnsupportedLanguage(tag)) if tag == "tlh"));
    }

    #[test]
    fn test_abbreviations_are_normalized() {
        let config = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [terminators]
            chars = ["."]

            [abbreviations]
            words = ["Etc.", "VGL"]

            [syllables]
            vowels = "AEIOU"
            "#,
        )
        .unwrap();

        assert!(config.is_abbreviation("etc"));
        assert!(config.is_abbreviation("Vgl"));
        assert!(!config.is_abbreviation("haus"));
        assert_eq!(config.syllables.vowels, "aeiou");
        assert!(config.terminators.paragraph_breaks);
    }

    #[test]
    fn test_validation_rejects_missing_terminators() {
        let result = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [terminators]
            chars = []

            [syllables]
            vowels = "aeiou"
            "#,
        );
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED[1].1.as_bytes()).unwrap();

        let config = resolve("ignored", Some(file.path())).unwrap();
        assert_eq!(config.metadata.code, "en_US");
    }
}
