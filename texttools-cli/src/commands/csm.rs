//! Common sense matrix commands

use super::Context;
use crate::error::{CliError, CliResult};
use anyhow::Context as _;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use texttools_engine::{Analyzer, CorpusEvaluator, CorpusLearner};

/// Number of over-used words printed after an evaluation
const TOP_WORDS: usize = 10;

/// Matrix subcommands
#[derive(Debug, Subcommand)]
pub enum CsmCommands {
    /// Build `_corpus_matrix.json` from the word tables of an analyzed folder
    Learn(LearnArgs),

    /// Compare a document against a learned matrix
    Evaluate(EvaluateArgs),
}

/// Arguments for `csm learn`
#[derive(Debug, Args)]
pub struct LearnArgs {
    /// Folder previously processed with `analyze`
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,
}

/// Arguments for `csm evaluate`
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Matrix file, or a folder containing `_corpus_matrix.json`
    #[arg(value_name = "MATRIX")]
    pub matrix: PathBuf,

    /// Text file or `_wordfrequencies.csv` table to evaluate
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Language used if the document has to be analyzed first
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Language configuration file (TOML) instead of an embedded language
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,
}

impl CsmCommands {
    /// Execute the selected subcommand
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        match self {
            CsmCommands::Learn(args) => args.execute(context),
            CsmCommands::Evaluate(args) => args.execute(context),
        }
    }
}

impl LearnArgs {
    fn execute(&self, context: &Context) -> CliResult<()> {
        if !self.folder.is_dir() {
            return Err(CliError::InvalidPath(format!(
                "{} is not a folder",
                self.folder.display()
            ))
            .into());
        }

        let outcome = CorpusLearner::new(context.config.output.pretty_json)
            .learn(&self.folder)
            .with_context(|| format!("failed to learn from {}", self.folder.display()))?;

        for (path, error) in &outcome.skipped {
            eprintln!("Skipped {}: {error}", path.display());
        }
        println!("Corpus matrix: {}", outcome.path.display());
        println!("{outcome}");
        Ok(())
    }
}

impl EvaluateArgs {
    fn execute(&self, context: &Context) -> CliResult<()> {
        for path in [&self.matrix, &self.document] {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
        }

        let config = context
            .config
            .analyzer_config(
                self.language.as_deref(),
                self.language_config.clone(),
                false,
                None,
            )
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let analyzer = Analyzer::new(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let outcome = CorpusEvaluator::new(&analyzer)
            .evaluate(&self.matrix, &self.document)
            .with_context(|| format!("failed to evaluate {}", self.document.display()))?;

        println!("Corpus diff: {}", outcome.path.display());
        if outcome.diff.is_empty() {
            println!("No word is used more often than in the corpus");
        }
        for entry in outcome.diff.entries.iter().take(TOP_WORDS) {
            println!("{:>12.6}  {}", entry.difference, entry.word);
        }
        Ok(())
    }
}
