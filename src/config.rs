use std::path::PathBuf;

use crate::{Error, Result};

/// Settings for one benchmark invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Edge list file to load
    pub input: PathBuf,

    /// Requested source vertex, unvalidated until the graph is known
    pub source: i64,

    /// Repetitions per algorithm, at least 1
    pub runs: usize,

    /// Run the two engines on separate worker threads
    pub parallel: bool,

    /// Emit a JSON report instead of text lines
    pub json: bool,
}

impl BenchConfig {
    /// Creates a configuration with a single sequential run
    pub fn new(input: impl Into<PathBuf>, source: i64) -> Self {
        BenchConfig {
            input: input.into(),
            source,
            runs: 1,
            parallel: false,
            json: false,
        }
    }

    /// Set the repetition count; anything below 1 becomes 1
    pub fn with_runs(mut self, runs: i64) -> Self {
        self.runs = usize::try_from(runs.max(1)).unwrap_or(usize::MAX);
        self
    }

    /// Enable or disable running both engines concurrently
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable JSON output
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Validates the source against the loaded graph's vertex count
    pub fn resolve_source(&self, vertex_count: usize) -> Result<usize> {
        usize::try_from(self.source)
            .ok()
            .filter(|&source| source < vertex_count)
            .ok_or(Error::SourceOutOfRange {
                node: self.source,
                vertex_count,
            })
    }
}
