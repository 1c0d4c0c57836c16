use camino::Utf8Path;
use fs_err as fs;
use importfix_mangle::demangle;
use importfix_types::{AnalysisDocument, Finding};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },

    #[error("invalid analysis document: {message}")]
    Schema { message: String },
}

pub fn load_analysis(path: &Utf8Path) -> Result<AnalysisDocument, AnalysisLoadError> {
    debug!(path = %path, "reading analysis document");

    let contents = fs::read_to_string(path).map_err(|e| AnalysisLoadError::Io {
        message: e.to_string(),
    })?;
    parse_analysis(&contents)
}

pub fn parse_analysis(contents: &str) -> Result<AnalysisDocument, AnalysisLoadError> {
    let doc = serde_json::from_str::<AnalysisDocument>(contents).map_err(|e| {
        AnalysisLoadError::Json {
            message: e.to_string(),
        }
    })?;

    validate("undeclared_deps", &doc.undeclared)?;
    validate("unused_deps", &doc.unused)?;
    validate_dependency_names(&doc.unused)?;

    debug!(
        undeclared = doc.undeclared.len(),
        unused = doc.unused.len(),
        "parsed analysis document"
    );
    Ok(doc)
}

fn validate(key: &str, findings: &[Finding]) -> Result<(), AnalysisLoadError> {
    for (i, finding) in findings.iter().enumerate() {
        if finding.name.trim().is_empty() {
            return Err(AnalysisLoadError::Schema {
                message: format!("{key}[{i}] has an empty name"),
            });
        }
        if let Some(r) = finding.references.iter().find(|r| r.line == Some(0)) {
            return Err(AnalysisLoadError::Schema {
                message: format!("{key}[{i}] ({}) references {} at line 0", finding.name, r.path),
            });
        }
    }
    Ok(())
}

/// Unused findings name a mangled dependency. A bare namespace token decodes to nothing and would
/// match every package folder.
fn validate_dependency_names(findings: &[Finding]) -> Result<(), AnalysisLoadError> {
    for (i, finding) in findings.iter().enumerate() {
        if demangle(&finding.name).trim().is_empty() {
            return Err(AnalysisLoadError::Schema {
                message: format!(
                    "unused_deps[{i}] ({}) does not name a dependency",
                    finding.name
                ),
            });
        }
    }
    Ok(())
}
