//! Rendering helpers for check results.
//!
//! Text layout: a blank line before every block, sub-messages indented by two spaces, commands by
//! four.

use importfix_domain::{Diagnostic, Interpretation, Line};
use importfix_types::schema::IMPORTFIX_REPORT_V1;
use importfix_types::{CheckReport, TargetContext, ToolInfo};
use std::fmt::Write;

pub fn render_text(interp: &Interpretation) -> String {
    let mut out = String::new();
    for line in &interp.lines {
        match line {
            Line::Diagnostic(d) if d.opens_block() => {
                let _ = writeln!(out, "\n{d}");
                if matches!(d, Diagnostic::CheckFailed { .. }) {
                    out.push('\n');
                }
            }
            Line::Diagnostic(d) => {
                let _ = writeln!(out, "  {d}");
            }
            Line::Command(c) => {
                let _ = writeln!(out, "    {c}");
            }
        }
    }
    out
}

/// Commands only, one per line.
pub fn render_commands(interp: &Interpretation) -> String {
    let mut out = String::new();
    for cmd in interp.commands() {
        let _ = writeln!(out, "{cmd}");
    }
    out
}

pub fn build_report(
    tool: ToolInfo,
    target: &TargetContext,
    interp: &Interpretation,
    analyzer_exit_code: Option<i32>,
    exit_code: i32,
) -> CheckReport {
    CheckReport {
        schema: IMPORTFIX_REPORT_V1.to_string(),
        tool,
        target: target.clone(),
        verdict: interp.verdict,
        analyzer_exit_code,
        exit_code,
        diagnostics: interp.diagnostics(),
        commands: interp.commands(),
    }
}
