//! Shared DTOs (schemas-as-code) for the importfix workspace.
//!
//! # Design constraints
//! - The analysis document is produced by an external analyzer; read it as found.
//! - The report is written to disk and scraped by automation. Be conservative with breaking
//!   changes and prefer adding optional fields over changing semantics.

pub mod analysis;
pub mod report;
pub mod target;

pub use analysis::{AnalysisDocument, Finding, SourceRef};
pub use report::{CheckReport, ToolInfo};
pub use target::{DepsAttribute, TargetContext, Verdict};

/// Schema identifiers.
pub mod schema {
    pub const IMPORTFIX_REPORT_V1: &str = "importfix.report.v1";
}
