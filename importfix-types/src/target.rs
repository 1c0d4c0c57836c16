use serde::{Deserialize, Serialize};
use std::fmt;

/// The build-file attribute remediation commands edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepsAttribute {
    #[default]
    Deps,
    TestDeps,
}

impl DepsAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            DepsAttribute::Deps => "deps",
            DepsAttribute::TestDeps => "test_deps",
        }
    }
}

impl fmt::Display for DepsAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-invocation view of the target being checked.
///
/// Resolved once from the invoked label and package path; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetContext {
    /// The label as the build system invoked us. May be a synthetic wrapper.
    pub requested_label: String,

    /// The label that declares the dependencies in the build file.
    pub label: String,

    pub attribute: DepsAttribute,

    /// Final path segment of the package path.
    pub package_folder: String,
}

/// This layer's own pass/fail determination, after suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_clean(clean: bool) -> Self {
        if clean { Verdict::Pass } else { Verdict::Fail }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}
