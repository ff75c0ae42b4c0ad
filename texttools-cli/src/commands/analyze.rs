//! Analyze command implementation

use super::Context;
use crate::error::{CliError, CliResult};
use crate::progress::ProgressReporter;
use anyhow::Context as _;
use clap::Args;
use std::path::PathBuf;
use texttools_engine::{AnalyzeOutcome, Analyzer};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Text file or folder of text files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Language code or alias (default: de_DE)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Language configuration file (TOML) instead of an embedded language
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Analyze again even if stored results are up to date
    #[arg(long)]
    pub force: bool,

    /// Extension of the files to analyze in a folder (default: .txt)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        if !self.path.exists() {
            return Err(CliError::FileNotFound(self.path.display().to_string()).into());
        }

        let config = context
            .config
            .analyzer_config(
                self.language.as_deref(),
                self.language_config.clone(),
                self.force,
                self.extension.as_deref(),
            )
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let analyzer = Analyzer::new(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::info!(
            "analyze version {}, language {}, extension {}",
            analyzer.config().version,
            analyzer.language_code(),
            analyzer.config().extension
        );

        let mut progress = ProgressReporter::new(context.quiet);
        let outcome = analyzer
            .analyze(&self.path, |event| progress.file_completed(&event))
            .with_context(|| format!("failed to analyze {}", self.path.display()))?;
        progress.finish();

        match outcome {
            AnalyzeOutcome::File(analysis) => {
                let document = &analysis.document;
                println!(
                    "Analyzed {}: {} sentences, {} words, {} distinct words",
                    self.path.display(),
                    document.sentence_count,
                    document.word_count,
                    analysis.table.len()
                );
                if let Some(fre) = document.reading_ease.as_ref().and_then(|r| r.score("fre")) {
                    println!("Flesch reading ease: {fre}");
                }
            }
            AnalyzeOutcome::Folder(summary) => {
                if let Some(path) = &summary.table_path {
                    println!("Folder word table: {}", path.display());
                }
                println!("Finished processing {summary}");
                if summary.total > 0 && summary.failed == summary.total {
                    return Err(CliError::ProcessingError(format!(
                        "none of the {} files in {} could be analyzed",
                        summary.total,
                        self.path.display()
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }
}
