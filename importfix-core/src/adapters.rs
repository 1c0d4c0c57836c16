//! Default process- and filesystem-backed port implementations.

use crate::ports::{AnalyzerPort, WritePort};
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Runs the analyzer as a child process with its stdout redirected into the output file.
///
/// Stderr is inherited so analyzer warnings still reach the build log.
#[derive(Debug, Clone)]
pub struct ProcessAnalyzer {
    program: String,
}

impl ProcessAnalyzer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AnalyzerPort for ProcessAnalyzer {
    fn run(&self, args: &[String], output: &Utf8Path) -> anyhow::Result<Option<i32>> {
        let file = fs::File::create(output)?;

        debug!(program = %self.program, ?args, output = %output, "running analyzer");
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(file.into_parts().0))
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("spawn analyzer {}", self.program))?;

        let code = status.code();
        match code {
            Some(code) => debug!(code, "analyzer exited"),
            None => warn!(%status, "analyzer terminated without an exit code"),
        }
        Ok(code)
    }
}

/// Pre-baked analyzer output for embedding and testing.
///
/// Writes `document` to the output path and reports `exit_code`, without spawning anything.
#[derive(Debug, Clone)]
pub struct InMemoryAnalyzer {
    document: String,
    exit_code: Option<i32>,
}

impl InMemoryAnalyzer {
    pub fn new(document: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            document: document.into(),
            exit_code,
        }
    }
}

impl AnalyzerPort for InMemoryAnalyzer {
    fn run(&self, _args: &[String], output: &Utf8Path) -> anyhow::Result<Option<i32>> {
        fs::write(output, &self.document)?;
        Ok(self.exit_code)
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }
}
