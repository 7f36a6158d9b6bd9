//! Batch jobs over a directory of feedback files.
//!
//! Every job reads each matching file on its own; a file that cannot be read
//! or parsed is logged, recorded in the [`BatchReport`] and skipped.

mod perfects;
mod rank;
mod reprocess;

pub use perfects::find_perfects;
pub use rank::{RankOrder, rank};
pub use reprocess::reprocess;

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::submission::FeedbackFile;

/// A file skipped during a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub file: String,
    pub reason: String,
}

/// Outcome of one batch job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Files read and handled without error
    pub processed: usize,
    pub failures: Vec<FileFailure>,
    /// Files written by the job
    pub outputs: Vec<PathBuf>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.processed + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, file: &str, error: &Error) {
        warn!("Skipping {}: {}", file, error);
        self.failures.push(FileFailure {
            file: file.to_string(),
            reason: error.to_string(),
        });
    }
}

/// List regular files in `dir` matching `pattern`, sorted by path.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| Error::Glob(format!("Non UTF-8 directory: {}", dir.display())))?;
    let full = Path::new(&Pattern::escape(dir_str)).join(pattern);
    let full = full
        .to_str()
        .ok_or_else(|| Error::Glob(format!("Non UTF-8 pattern: {}", full.display())))?;

    let mut files = Vec::new();
    for entry in glob(full)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Cannot read {}: {}", e.path().display(), e.error()),
        }
    }
    files.sort();

    debug!("Found {} files matching {}", files.len(), pattern);
    Ok(files)
}

/// Run `handle` on every file, isolating failures per file.
pub fn process_each<F>(files: &[PathBuf], report: &mut BatchReport, mut handle: F)
where
    F: FnMut(&FeedbackFile) -> Result<()>,
{
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match FeedbackFile::read(path).and_then(|file| handle(&file)) {
            Ok(()) => {
                debug!("Processed {}", name);
                report.processed += 1;
            }
            Err(e) => report.record_failure(&name, &e),
        }
    }
}
