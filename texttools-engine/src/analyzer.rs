//! Document analysis pipeline
//!
//! Single files are tokenized, measured and written out as a metadata
//! file plus a word table. Folders are processed file by file in name
//! order; sources whose stored results are still fresh contribute their
//! stored word table instead of being analyzed again, and every table
//! is merged into a folder-level aggregate.

use crate::cache::CacheValidator;
use crate::config::AnalyzerConfig;
use crate::error::{EngineError, Result};
use crate::fingerprint::fingerprint_bytes;
use crate::header::AnalysisHeader;
use crate::storage::{
    folder_word_table_path, list_files_with_suffix, metadata_path, read_word_counts,
    word_table_path, write_metadata, write_word_table, DIFF_SUFFIX, METADATA_SUFFIX,
    WORD_TABLE_SUFFIX,
};
use crate::tokenizer::Tokenizer;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use texttools_core::{analyze_document, merge_counts, Document, FrequencyTable, WordCounts};

/// Result of analyzing one text
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Document tree with metadata and readability report
    pub document: Document,
    /// Word frequencies of the document
    pub table: FrequencyTable,
}

/// What happened to one file of a folder run
#[derive(Debug)]
pub enum FileOutcome {
    /// Analyzed and written
    Analyzed,
    /// Stored results were fresh and reused
    Cached,
    /// Skipped because of an error
    Failed(EngineError),
}

/// Progress notification for one file of a folder run
#[derive(Debug)]
pub struct FileProgress<'a> {
    /// The source file
    pub path: &'a Path,
    /// 1-based position in the run
    pub position: usize,
    /// Number of files in the run
    pub total: usize,
    /// What happened to it
    pub outcome: &'a FileOutcome,
}

/// Totals of a folder run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Source files found
    pub total: usize,
    /// Files analyzed in this run
    pub analyzed: usize,
    /// Files whose stored results were reused
    pub cached: usize,
    /// Files skipped because of errors
    pub failed: usize,
    /// Folder-level word table, if any words were collected
    pub table_path: Option<PathBuf>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} files ({} cached, {} failed) in {:.3} seconds",
            self.analyzed,
            self.total,
            self.cached,
            self.failed,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Result of [`Analyzer::analyze`]
#[derive(Debug)]
pub enum AnalyzeOutcome {
    /// A single file was analyzed
    File(Box<Analysis>),
    /// A folder was processed
    Folder(BatchSummary),
}

/// Runs the analysis pipeline with one configuration and tokenizer
#[derive(Debug)]
pub struct Analyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    validator: CacheValidator,
}

impl Analyzer {
    /// Create an analyzer, loading the configured language
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(config.load_language()?);
        Ok(Self::with_tokenizer(config, tokenizer))
    }

    /// Create an analyzer around an existing tokenizer
    pub fn with_tokenizer(config: AnalyzerConfig, tokenizer: Tokenizer) -> Self {
        let validator = CacheValidator::new(config.version.clone());
        Self {
            config,
            tokenizer,
            validator,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Language code written to headers
    pub fn language_code(&self) -> &str {
        &self.tokenizer.language().metadata.code
    }

    /// Tokenize and measure a text
    pub fn process_text(&self, text: &str) -> Result<Analysis> {
        let mut document = self.tokenizer.tokenize(text);
        let table = analyze_document(&mut document)?;
        Ok(Analysis { document, table })
    }

    /// Analyze a source file and write its metadata file and word table
    pub fn process_file(&self, path: &Path) -> Result<Analysis> {
        // One read: the header must describe exactly the analyzed bytes
        let bytes = std::fs::read(path).map_err(|e| EngineError::io(path, e))?;
        let fingerprint = fingerprint_bytes(&bytes);
        let text = String::from_utf8(bytes).map_err(|e| {
            EngineError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        let analysis = self.process_text(&text)?;

        let header = AnalysisHeader::for_file(
            path,
            fingerprint,
            &self.config.version,
            self.language_code(),
        );
        let metadata = metadata_path(path);
        write_metadata(&metadata, &header, &analysis.document, self.config.pretty_json)?;
        let table = word_table_path(path);
        write_word_table(&table, &header, &analysis.table)?;

        log::info!(
            "analyzed {}: {} sentences, {} words",
            path.display(),
            analysis.document.sentence_count,
            analysis.document.word_count
        );
        log::debug!("wrote {} and {}", metadata.display(), table.display());
        Ok(analysis)
    }

    /// Analyze a file or every source file of a folder
    pub fn analyze<F>(&self, path: &Path, observer: F) -> Result<AnalyzeOutcome>
    where
        F: FnMut(FileProgress<'_>),
    {
        if path.is_file() {
            Ok(AnalyzeOutcome::File(Box::new(self.process_file(path)?)))
        } else if path.is_dir() {
            Ok(AnalyzeOutcome::Folder(self.analyze_folder(path, observer)?))
        } else {
            Err(EngineError::input(
                path,
                "not an existing file or folder",
            ))
        }
    }

    /// Source files of a folder, sorted by name
    ///
    /// Result files and folder-level outputs (names starting with `_`,
    /// such as the corpus matrix) are never treated as sources, whatever
    /// the configured extension.
    pub fn list_sources(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let files = list_files_with_suffix(folder, &self.config.extension, true)?;
        Ok(files
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| {
                        ![METADATA_SUFFIX, WORD_TABLE_SUFFIX, DIFF_SUFFIX]
                            .iter()
                            .any(|suffix| name.ends_with(suffix))
                    })
            })
            .collect())
    }

    /// Process every source file of a folder and write the folder table
    ///
    /// Per-file failures are reported through `observer` and counted;
    /// they do not stop the run.
    pub fn analyze_folder<F>(&self, folder: &Path, mut observer: F) -> Result<BatchSummary>
    where
        F: FnMut(FileProgress<'_>),
    {
        let started = Instant::now();
        let sources = self.list_sources(folder)?;
        log::info!(
            "processing {} {} files in {}",
            sources.len(),
            self.config.extension,
            folder.display()
        );

        let mut summary = BatchSummary {
            total: sources.len(),
            ..BatchSummary::default()
        };
        let mut global = WordCounts::new();

        for (index, source) in sources.iter().enumerate() {
            let (outcome, counts) = self.analyze_member(source);
            match &outcome {
                FileOutcome::Analyzed => summary.analyzed += 1,
                FileOutcome::Cached => summary.cached += 1,
                FileOutcome::Failed(error) => {
                    summary.failed += 1;
                    log::warn!("skipping {}: {error}", source.display());
                }
            }
            if let Some(counts) = counts {
                global = merge_counts(global, &counts);
            }
            observer(FileProgress {
                path: source,
                position: index + 1,
                total: summary.total,
                outcome: &outcome,
            });
        }

        if global.values().sum::<u64>() > 0 {
            let table = FrequencyTable::from_counts(global)?;
            let path = folder_word_table_path(folder)?;
            let header = AnalysisHeader::for_folder(path.parent().unwrap_or(folder));
            write_word_table(&path, &header, &table)?;
            log::info!("wrote folder word table {}", path.display());
            summary.table_path = Some(path);
        }

        summary.elapsed = started.elapsed();
        Ok(summary)
    }

    /// Word frequencies of a document given as a word table or as a
    /// source text, analyzing the source first when needed
    pub fn table_for(&self, document: &Path) -> Result<FrequencyTable> {
        if !document.is_file() {
            return Err(EngineError::input(document, "not an existing file"));
        }
        let is_word_table = document
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(WORD_TABLE_SUFFIX));
        if is_word_table {
            return Ok(FrequencyTable::from_counts(read_word_counts(document)?)?);
        }

        if let Some(counts) = self.cached_counts(document) {
            return Ok(FrequencyTable::from_counts(counts)?);
        }
        Ok(self.process_file(document)?.table)
    }

    fn analyze_member(&self, source: &Path) -> (FileOutcome, Option<WordCounts>) {
        if let Some(counts) = self.cached_counts(source) {
            log::info!("{}: metadata is up to date, skipping analysis", source.display());
            return (FileOutcome::Cached, Some(counts));
        }
        match self.process_file(source) {
            Ok(analysis) => (FileOutcome::Analyzed, Some(analysis.table.counts())),
            Err(error) => (FileOutcome::Failed(error), None),
        }
    }

    /// Stored counts of a source whose results are fresh, unless forced
    fn cached_counts(&self, source: &Path) -> Option<WordCounts> {
        if self.config.force || !self.validator.check(source, self.language_code()).is_fresh() {
            return None;
        }
        match read_word_counts(&word_table_path(source)) {
            Ok(counts) => Some(counts),
            Err(error) => {
                log::info!("stored word table unusable, analyzing again: {error}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_process_text() {
        let analysis = analyzer()
            .process_text("Die Sonne scheint. Die Sonne ist warm.")
            .unwrap();
        assert_eq!(analysis.document.sentence_count, 2);
        assert_eq!(analysis.document.word_count, 7);
        assert_eq!(analysis.table.get("die").unwrap().count, 2);
        assert!(analysis.document.reading_ease.is_some());
    }

    #[test]
    fn test_empty_text_is_computation_error() {
        let result = analyzer().process_text("1234. ...");
        assert!(matches!(result, Err(EngineError::Computation(_))));
    }

    #[test]
    fn test_process_file_writes_results() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("brief.txt");
        fs::write(&source, "Hi.").unwrap();

        let analysis = analyzer().process_file(&source).unwrap();
        assert_eq!(analysis.document.word_count, 1);
        assert!(dir.path().join("brief_metadata.json").is_file());
        assert!(dir.path().join("brief_wordfrequencies.csv").is_file());
    }

    #[test]
    fn test_stored_header_matches_analyzed_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("brief.txt");
        let content = "Die Sonne scheint. Es ist warm.";
        fs::write(&source, content).unwrap();

        analyzer().process_file(&source).unwrap();
        let header =
            crate::storage::read_header(&dir.path().join("brief_metadata.json")).unwrap();
        let expected = fingerprint_bytes(content.as_bytes());
        assert_eq!(header.crc32, Some(expected.crc32));
        assert_eq!(header.md5, Some(expected.md5));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("binary.txt");
        fs::write(&source, [0xff, 0xfe, 0x00]).unwrap();

        let result = analyzer().process_file(&source);
        assert!(matches!(result, Err(EngineError::Io { .. })));
        assert!(!dir.path().join("binary_metadata.json").exists());
    }

    #[test]
    fn test_list_sources_skips_folder_outputs() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.json", "_corpus_matrix.json", "a_metadata.json", "_texts_notes.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        let config = AnalyzerConfig::builder().extension(".json").build().unwrap();
        let analyzer = Analyzer::new(config).unwrap();
        assert_eq!(analyzer.config().extension, ".json");
        let sources = analyzer.list_sources(dir.path()).unwrap();
        assert_eq!(sources, vec![dir.path().join("a.json")]);
    }

    #[test]
    fn test_missing_path_is_input_error() {
        let result = analyzer().analyze(Path::new("/nonexistent/texttools"), |_| {});
        assert!(matches!(result, Err(EngineError::Input { .. })));
    }

    #[test]
    fn test_list_sources_ignores_result_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a_wordfrequencies.csv", "a.csv", "x_corpusdiff.csv"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let config = AnalyzerConfig::builder().extension(".csv").build().unwrap();
        let sources = Analyzer::new(config).unwrap().list_sources(dir.path()).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_summary_display() {
        let summary = BatchSummary {
            total: 3,
            analyzed: 2,
            cached: 1,
            failed: 0,
            table_path: None,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(
            summary.to_string(),
            "2 of 3 files (1 cached, 0 failed) in 1.500 seconds"
        );
    }
}
