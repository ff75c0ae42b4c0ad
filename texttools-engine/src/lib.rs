//! Application layer for TextTools
//!
//! This crate turns files into the pure metrics of `texttools-core`:
//! it tokenizes text for a configured language, fingerprints sources,
//! reads and writes the result files, skips sources whose results are
//! still fresh, and learns and evaluates corpus baselines.
//!
//! # Example
//!
//! ```rust
//! use texttools_engine::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::builder().language("de").build()?)?;
//! let analysis = analyzer.process_text("Die Sonne scheint. Es ist warm.")?;
//!
//! assert_eq!(analysis.document.sentence_count, 2);
//! assert_eq!(analysis.table.get("es").map(|f| f.count), Some(1));
//! # Ok::<(), texttools_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fingerprint;
pub mod header;
pub mod language;
pub mod storage;
pub mod syllables;
pub mod tokenizer;

// Re-export key types
pub use analyzer::{Analysis, AnalyzeOutcome, Analyzer, BatchSummary, FileOutcome, FileProgress};
pub use cache::{CacheStatus, CacheValidator, StaleReason};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, DEFAULT_EXTENSION, DEFAULT_LANGUAGE};
pub use corpus::{locate_matrix, CorpusEvaluator, CorpusLearner, EvaluateOutcome, LearnOutcome};
pub use error::{EngineError, Result};
pub use fingerprint::{fingerprint, Fingerprint};
pub use header::{AnalysisHeader, ANALYZE_VERSION};
pub use language::{list_builtin_languages, LanguageConfig};
pub use syllables::{Syllabifier, VowelGroupSyllabifier};
pub use tokenizer::Tokenizer;

// Re-export from core for convenience
pub use texttools_core::{CorpusDiff, CorpusMatrix, Document, FrequencyTable};
