//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;

/// The external import analyzer.
pub trait AnalyzerPort {
    /// Run once with `args`, leaving the JSON analysis in `output`.
    ///
    /// Returns the analyzer's exit code, or `None` if it was terminated without one.
    fn run(&self, args: &[String], output: &Utf8Path) -> anyhow::Result<Option<i32>>;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
