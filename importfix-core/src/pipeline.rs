//! The check pipeline, extracted from the CLI.
//!
//! I/O-agnostic: the analyzer and all writes go through the port traits.

use crate::ports::{AnalyzerPort, WritePort};
use crate::settings::CheckSettings;
use anyhow::Context;
use camino::Utf8Path;
use importfix_analysis::{AnalysisLoadError, load_analysis};
use importfix_domain::{InterpretOptions, Interpretation, Interpreter, TargetResolver, reconcile};
use importfix_render::build_report;
use importfix_types::{CheckReport, TargetContext, ToolInfo};
use tracing::{debug, info, warn};

/// Error type for pipeline results. Every variant exits 1.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("analyzer could not be run: {0:#}")]
    Analyzer(anyhow::Error),

    #[error("analysis document: {0}")]
    Document(#[from] AnalysisLoadError),

    #[error("{0:#}")]
    Io(anyhow::Error),
}

impl CheckError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Outcome of `run_check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub target: TargetContext,
    pub interpretation: Interpretation,

    /// `None` when the analyzer was terminated without a status code.
    pub analyzer_exit_code: Option<i32>,

    /// Reconciled process exit code.
    pub exit_code: i32,

    pub report: CheckReport,
}

/// Run the analyzer once, interpret its findings and reconcile the two outcomes.
///
/// The caller prints the interpretation; `settings.report_path`, when set, is written here.
pub fn run_check(
    settings: &CheckSettings,
    analyzer: &dyn AnalyzerPort,
    writer: &dyn WritePort,
    tool: ToolInfo,
) -> Result<CheckOutcome, CheckError> {
    let target = TargetResolver::new(settings.test_wrapper_suffix.as_str())
        .resolve(&settings.label, settings.package_path.as_str());
    debug!(
        requested = %target.requested_label,
        label = %target.label,
        attribute = %target.attribute,
        package_folder = %target.package_folder,
        "resolved target"
    );

    // The build system does not create package directories that hold no sources.
    if !settings.package_path.as_str().is_empty() {
        writer
            .create_dir_all(&settings.package_path)
            .map_err(CheckError::Io)?;
    }
    if let Some(parent) = settings
        .output_path
        .parent()
        .filter(|p| !p.as_str().is_empty())
    {
        writer.create_dir_all(parent).map_err(CheckError::Io)?;
    }

    let analyzer_exit_code = analyzer
        .run(&settings.analyzer_args, &settings.output_path)
        .map_err(CheckError::Analyzer)?;

    let doc = load_analysis(&settings.output_path)?;

    let interpreter = Interpreter::new(InterpretOptions {
        edit_tool: settings.edit_tool.clone(),
        reproduce_config: settings.reproduce_config.clone(),
    });
    let interpretation = interpreter.interpret(&doc, &target);

    let exit_code = reconcile(analyzer_exit_code.unwrap_or(1), interpretation.verdict);
    if analyzer_exit_code != Some(exit_code) {
        warn!(
            analyzer_exit_code = ?analyzer_exit_code,
            exit_code,
            verdict = ?interpretation.verdict,
            "analyzer exit status overridden by verdict"
        );
    }

    let report = build_report(
        tool,
        &target,
        &interpretation,
        analyzer_exit_code,
        exit_code,
    );
    if let Some(path) = &settings.report_path {
        write_report(&report, path, writer).map_err(CheckError::Io)?;
        info!("wrote report to {}", path);
    }

    Ok(CheckOutcome {
        target,
        interpretation,
        analyzer_exit_code,
        exit_code,
        report,
    })
}

pub fn write_report(
    report: &CheckReport,
    path: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    writer
        .write_file(path, json.as_bytes())
        .with_context(|| format!("write {}", path))
}
