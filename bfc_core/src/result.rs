use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// Terminal state of one file operation.
#[derive(Debug)]
pub enum Outcome {
    Success,
    Failed(Error),
}

/// Outcome and measurements of one compress or decompress operation.
///
/// Immutable once built; owned by the [`BatchResult`] that aggregates it.
#[derive(Debug)]
pub struct FileResult {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Name of the algorithm used for this operation.
    pub algorithm: &'static str,
    pub source_bytes: u64,
    pub dest_bytes: u64,
    pub elapsed: Duration,
    pub outcome: Outcome,
}

impl FileResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }
}

/// Ordered collection of per-file results for one batch invocation.
///
/// Built incrementally as files complete; aggregates are derived on demand
/// as sums/counts over the collected entries. The batch elapsed time sums
/// only the per-file operation durations, never enumeration or reporting
/// overhead, so throughput figures stay comparable across runs.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub files: Vec<FileResult>,
}

impl BatchResult {
    pub fn new(files: Vec<FileResult>) -> Self {
        Self { files }
    }

    pub fn push(&mut self, result: FileResult) {
        self.files.push(result);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Total source bytes across successful operations.
    pub fn total_source_bytes(&self) -> u64 {
        self.files
            .iter()
            .filter(|f| f.is_success())
            .map(|f| f.source_bytes)
            .sum()
    }

    /// Total destination bytes across successful operations.
    pub fn total_dest_bytes(&self) -> u64 {
        self.files
            .iter()
            .filter(|f| f.is_success())
            .map(|f| f.dest_bytes)
            .sum()
    }

    /// Sum of per-file operation durations.
    pub fn total_elapsed(&self) -> Duration {
        self.files.iter().map(|f| f.elapsed).sum()
    }
}
