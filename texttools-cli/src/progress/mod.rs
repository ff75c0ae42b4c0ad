//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use texttools_engine::{FileOutcome, FileProgress};

/// Progress reporter for folder analysis
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&mut self, progress: &FileProgress<'_>) {
        if self.progress_bar.is_none() {
            self.init_files(progress.total as u64);
        }

        let name = progress
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| progress.path.display().to_string());

        match progress.outcome {
            FileOutcome::Failed(error) => {
                let message = format!("Failed ({}/{}): {name}: {error}", progress.position, progress.total);
                match &self.progress_bar {
                    Some(pb) => pb.println(message),
                    None if !self.quiet => eprintln!("{message}"),
                    None => {}
                }
            }
            FileOutcome::Cached => log::info!("{name} is up to date"),
            FileOutcome::Analyzed => log::info!("{name} analyzed"),
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {name}"));
            pb.set_position(progress.position as u64);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
