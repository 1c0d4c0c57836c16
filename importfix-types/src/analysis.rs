use serde::{Deserialize, Serialize};
use std::fmt;

/// The analyzer's JSON output.
///
/// importfix is tolerant when reading it:
/// - Unknown top-level keys (settings, imports, resolved deps, ...) are ignored.
/// - `references` and `candidates` may be absent on a finding.
///
/// Both finding lists are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDocument {
    /// Imports with no declared dependency providing them.
    #[serde(rename = "undeclared_deps")]
    pub undeclared: Vec<Finding>,

    /// Declared dependencies that nothing imports.
    #[serde(rename = "unused_deps")]
    pub unused: Vec<Finding>,
}

impl AnalysisDocument {
    pub fn is_clean(&self) -> bool {
        self.undeclared.is_empty() && self.unused.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Import name (undeclared) or mangled dependency identifier (unused).
    pub name: String,

    /// Sites that triggered the finding, in analyzer scan order.
    #[serde(default)]
    pub references: Vec<SourceRef>,

    /// Suggested providers, mangled. Only populated for undeclared imports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<String>,
}

impl Finding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            references: Vec::new(),
            candidates: Vec::new(),
        }
    }

    pub fn with_reference(mut self, path: impl Into<String>, line: u64) -> Self {
        self.references.push(SourceRef {
            path: path.into(),
            line: Some(line),
        });
        self
    }

    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates.extend(candidates.into_iter().map(Into::into));
        self
    }
}

/// An import site (or, for unused dependencies, the file declaring them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub path: String,

    /// 1-based. Declaration sites from requirement files carry no line.
    #[serde(default, rename = "lineno", skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => f.write_str(&self.path),
        }
    }
}
