//! Clap-free settings for the check pipeline.

use camino::Utf8PathBuf;
use importfix_domain::{DEFAULT_EDIT_TOOL, TEST_WRAPPER_SUFFIX};

/// Executable invoked when nothing else is configured.
pub const DEFAULT_ANALYZER: &str = "fawltydeps";

/// Settings for one check.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Where the analyzer's JSON output is written and read back from.
    pub output_path: Utf8PathBuf,

    /// Label as invoked by the build system.
    pub label: String,

    /// Package path of the target, relative to the working directory.
    pub package_path: Utf8PathBuf,

    /// Forwarded verbatim to the analyzer.
    pub analyzer_args: Vec<String>,

    // Wording and label resolution
    pub test_wrapper_suffix: String,
    pub edit_tool: String,
    pub reproduce_config: String,

    // Artifacts
    pub report_path: Option<Utf8PathBuf>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            output_path: Utf8PathBuf::from("fawltydeps.json"),
            label: String::new(),
            package_path: Utf8PathBuf::from("."),
            analyzer_args: Vec::new(),
            test_wrapper_suffix: TEST_WRAPPER_SUFFIX.to_string(),
            edit_tool: DEFAULT_EDIT_TOOL.to_string(),
            reproduce_config: "fawltydeps".to_string(),
            report_path: None,
        }
    }
}
