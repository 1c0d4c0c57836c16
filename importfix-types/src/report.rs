use crate::target::{TargetContext, Verdict};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Machine-readable summary of one check, written on request next to the analyzer output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Always `importfix.report.v1` for this shape.
    pub schema: String,

    pub tool: ToolInfo,

    pub target: TargetContext,

    pub verdict: Verdict,

    /// `None` when the analyzer was terminated without a status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer_exit_code: Option<i32>,

    /// The reconciled code this process exits with.
    pub exit_code: i32,

    #[serde(default)]
    pub diagnostics: Vec<String>,

    #[serde(default)]
    pub commands: Vec<String>,
}
