//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliResult;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod csm;
pub mod list;

/// Text metrics, readability indices and word frequencies
#[derive(Debug, Parser)]
#[command(name = "texttools", version, about, long_about = None)]
#[command(after_help = "\
Examples:
  texttools analyze novel.txt            Analyze a single file
  texttools analyze texts/ -l en         Analyze every .txt file of a folder
  texttools csm learn texts/             Learn a corpus matrix from analyzed files
  texttools csm evaluate texts/ new.txt  Compare a document against the corpus")]
pub struct Cli {
    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "TEXTTOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a text file or every text file of a folder
    Analyze(analyze::AnalyzeArgs),

    /// Common sense matrix: learn a corpus baseline and evaluate documents
    Csm {
        #[command(subcommand)]
        subcommand: csm::CsmCommands,
    },

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language configurations
    Languages,
}

/// Settings shared by all commands
#[derive(Debug, Default)]
pub struct Context {
    /// Merged configuration file contents
    pub config: CliConfig,
    /// Suppress progress bars
    pub quiet: bool,
}

/// Parse-independent entry point
pub fn run(cli: Cli) -> CliResult<()> {
    init_logging(cli.verbose, cli.quiet);
    log::debug!("arguments: {cli:?}");

    let context = Context {
        config: CliConfig::load(cli.config.as_deref())?,
        quiet: cli.quiet,
    };

    match &cli.command {
        Commands::Analyze(args) => args.execute(&context),
        Commands::Csm { subcommand } => subcommand.execute(&context),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Languages => list::languages(),
        },
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Ignore an already installed logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}
