//! Analyzer configuration

use crate::error::{EngineError, Result};
use crate::header::ANALYZE_VERSION;
use crate::language::{self, LanguageConfig};
use std::path::PathBuf;

/// Default tokenization language
pub const DEFAULT_LANGUAGE: &str = "de_DE";

/// Default source file extension for folder analysis
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Settings for [`Analyzer`](crate::Analyzer)
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Language code or alias
    pub language: String,
    /// Language config file overriding the embedded tables
    pub language_file: Option<PathBuf>,
    /// Version tag written to headers and required of cached results
    pub version: String,
    /// Re-analyze even when cached results are fresh
    pub force: bool,
    /// Extension of source files in folder mode, including the dot
    pub extension: String,
    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            language_file: None,
            version: ANALYZE_VERSION.to_string(),
            force: false,
            extension: DEFAULT_EXTENSION.to_string(),
            pretty_json: true,
        }
    }
}

impl AnalyzerConfig {
    /// Start building a configuration
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }

    /// Load the language config these settings refer to
    pub fn load_language(&self) -> Result<LanguageConfig> {
        language::resolve(&self.language, self.language_file.as_deref())
    }
}

/// Builder for [`AnalyzerConfig`]
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language code or alias
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.config.language = language.into();
        self
    }

    /// Load the language from a TOML file instead
    pub fn language_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.language_file = path;
        self
    }

    /// Override the version tag
    pub fn version<S: Into<String>>(mut self, version: S) -> Self {
        self.config.version = version.into();
        self
    }

    /// Ignore cached results
    pub fn force(mut self, force: bool) -> Self {
        self.config.force = force;
        self
    }

    /// Source file extension for folder analysis
    pub fn extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.config.extension = extension.into();
        self
    }

    /// Pretty-print JSON output
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        let config = self.config;

        if config.language.trim().is_empty() && config.language_file.is_none() {
            return Err(EngineError::ConfigError("language must not be empty".to_string()));
        }
        if config.version.trim().is_empty() {
            return Err(EngineError::ConfigError("version must not be empty".to_string()));
        }
        if !config.extension.starts_with('.') || config.extension.len() < 2 {
            return Err(EngineError::ConfigError(format!(
                "extension must start with '.', got {:?}",
                config.extension
            )));
        }
        // Fail early on unknown languages or broken files
        config.load_language()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::builder().build().unwrap();
        assert_eq!(config.language, "de_DE");
        assert_eq!(config.version, "1.0.1");
        assert_eq!(config.extension, ".txt");
        assert!(!config.force);
    }

    #[test]
    fn test_builder_settings() {
        let config = AnalyzerConfig::builder()
            .language("en")
            .force(true)
            .extension(".md")
            .pretty_json(false)
            .build()
            .unwrap();
        assert_eq!(config.language, "en");
        assert!(config.force);
        assert_eq!(config.extension, ".md");
        assert_eq!(config.load_language().unwrap().metadata.code, "en_US");
    }

    #[test]
    fn test_invalid_extension() {
        for extension in ["txt", ".", ""] {
            let result = AnalyzerConfig::builder().extension(extension).build();
            assert!(matches!(result, Err(EngineError::ConfigError(_))), "{extension}");
        }
    }

    #[test]
    fn test_unknown_language() {
        let result = AnalyzerConfig::builder().language("xx_XX").build();
        assert!(matches!(result, Err(EngineError::UnsupportedLanguage(_))));

        let result = AnalyzerConfig::builder().language("  ").build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }
}
