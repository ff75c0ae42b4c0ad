//! Configuration module
//!
//! An optional TOML file supplies defaults that command-line flags override:
//!
//! ```toml
//! [analysis]
//! default_language = "en"
//! file_extension = ".txt"
//! force = false
//!
//! [output]
//! pretty_json = true
//! ```

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use texttools_engine::{AnalyzerConfig, DEFAULT_EXTENSION, DEFAULT_LANGUAGE};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Default language code or alias
    pub default_language: String,

    /// Extension of the files analyzed in a folder
    pub file_extension: String,

    /// Always analyze again, ignoring stored results
    pub force: bool,

    /// Language configuration file used instead of an embedded language
    pub language_config: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            file_extension: DEFAULT_EXTENSION.to_string(),
            force: false,
            language_config: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty print JSON result files
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load the configuration file, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge command-line values over this file's settings
    pub fn analyzer_config(
        &self,
        language: Option<&str>,
        language_config: Option<PathBuf>,
        force: bool,
        extension: Option<&str>,
    ) -> texttools_engine::Result<AnalyzerConfig> {
        // A language given on the command line replaces a configured language file
        let language_file = match (language, language_config) {
            (_, Some(file)) => Some(file),
            (Some(_), None) => None,
            (None, None) => self.analysis.language_config.clone(),
        };

        AnalyzerConfig::builder()
            .language(language.unwrap_or(&self.analysis.default_language))
            .language_file(language_file)
            .force(force || self.analysis.force)
            .extension(extension.unwrap_or(&self.analysis.file_extension))
            .pretty_json(self.output.pretty_json)
            .build()
    }
}
