use crate::diagnostic::Diagnostic;
use crate::remediation::{DEFAULT_EDIT_TOOL, EditOp, RemediationCommand};
use importfix_mangle::{demangle, is_namespaced};
use importfix_types::{AnalysisDocument, Finding, TargetContext, Verdict};
use tracing::debug;

/// Knobs that only change wording, never classification.
#[derive(Debug, Clone)]
pub struct InterpretOptions {
    /// First word of every remediation command.
    pub edit_tool: String,

    /// Build config used in the "run this locally" hint.
    pub reproduce_config: String,
}

impl Default for InterpretOptions {
    fn default() -> Self {
        Self {
            edit_tool: DEFAULT_EDIT_TOOL.to_string(),
            reproduce_config: "fawltydeps".to_string(),
        }
    }
}

/// One unit of output, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Diagnostic(Diagnostic),
    Command(RemediationCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub verdict: Verdict,
    pub lines: Vec<Line>,
}

impl Interpretation {
    fn clean() -> Self {
        Self {
            verdict: Verdict::Pass,
            lines: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Diagnostic(d) => Some(d.to_string()),
                Line::Command(_) => None,
            })
            .collect()
    }

    pub fn commands(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Command(c) => Some(c.to_string()),
                Line::Diagnostic(_) => None,
            })
            .collect()
    }

    /// `(verdict, diagnostics, commands)`.
    pub fn into_parts(self) -> (Verdict, Vec<String>, Vec<String>) {
        let diagnostics = self.diagnostics();
        let commands = self.commands();
        (self.verdict, diagnostics, commands)
    }
}

/// Failure flag and output threaded through the per-finding steps.
#[derive(Debug, Default)]
struct Accumulator {
    failed: bool,
    lines: Vec<Line>,
}

impl Accumulator {
    fn fail(mut self) -> Self {
        self.failed = true;
        self
    }

    fn diagnostic(mut self, d: Diagnostic) -> Self {
        self.lines.push(Line::Diagnostic(d));
        self
    }

    fn commands(mut self, cmds: impl IntoIterator<Item = RemediationCommand>) -> Self {
        self.lines.extend(cmds.into_iter().map(Line::Command));
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    options: InterpretOptions,
}

impl Interpreter {
    pub fn new(options: InterpretOptions) -> Self {
        Self { options }
    }

    pub fn interpret(&self, doc: &AnalysisDocument, ctx: &TargetContext) -> Interpretation {
        if doc.is_clean() {
            return Interpretation::clean();
        }

        let acc = doc
            .undeclared
            .iter()
            .fold(Accumulator::default(), |acc, f| self.undeclared(acc, f, ctx));
        let acc = doc
            .unused
            .iter()
            .fold(acc, |acc, f| self.unused(acc, f, ctx));

        let acc = if acc.failed {
            acc.diagnostic(Diagnostic::CheckFailed {
                label: ctx.requested_label.clone(),
                reproduce: format!(
                    "bazel build --config={} {}",
                    self.options.reproduce_config, ctx.requested_label
                ),
            })
        } else {
            acc
        };

        Interpretation {
            verdict: Verdict::from_clean(!acc.failed),
            lines: acc.lines,
        }
    }

    fn undeclared(&self, acc: Accumulator, finding: &Finding, ctx: &TargetContext) -> Accumulator {
        let acc = acc.diagnostic(Diagnostic::UndeclaredImport {
            name: finding.name.clone(),
            references: finding.references.clone(),
        });

        // Bare candidates are package-name guesses with nothing behind them.
        let candidates: Vec<String> = finding
            .candidates
            .iter()
            .filter(|c| is_namespaced(c))
            .map(|c| demangle(c))
            .collect();

        debug!(
            import = %finding.name,
            offered = finding.candidates.len(),
            installable = candidates.len(),
            "undeclared import"
        );

        let acc = if candidates.is_empty() {
            acc.diagnostic(Diagnostic::NoInstallablePackage)
        } else {
            acc.diagnostic(Diagnostic::FixWith {
                alternatives: candidates.len(),
            })
            .commands(candidates.into_iter().map(|c| {
                RemediationCommand::for_target(&self.options.edit_tool, EditOp::Add, ctx, c)
            }))
        };

        acc.fail()
    }

    fn unused(&self, acc: Accumulator, finding: &Finding, ctx: &TargetContext) -> Accumulator {
        let name = demangle(&finding.name);

        // The analyzer mistakes a source directory named like the package folder for an import
        // of the dependency that shares its name.
        if ctx.package_folder.contains(name.as_str()) {
            debug!(
                dependency = %name,
                package_folder = %ctx.package_folder,
                "suppressing unused dependency matching the package folder"
            );
            return acc;
        }

        acc.diagnostic(Diagnostic::UnusedDependency { name: name.clone() })
            .diagnostic(Diagnostic::RemoveWith)
            .commands([RemediationCommand::for_target(
                &self.options.edit_tool,
                EditOp::Remove,
                ctx,
                name,
            )])
            .fail()
    }
}

/// Interpret with default wording.
pub fn interpret(doc: &AnalysisDocument, ctx: &TargetContext) -> Interpretation {
    Interpreter::default().interpret(doc, ctx)
}
