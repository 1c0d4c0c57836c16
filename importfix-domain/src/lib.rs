//! Domain logic: turn an analysis document + target context into a verdict, diagnostics and
//! remediation commands, then reconcile that verdict with the analyzer's own exit code.
//!
//! This crate owns *what* is wrong and how to fix it. It never runs the analyzer and never edits a
//! build file; commands are text for an operator or automation to run.

mod diagnostic;
mod interpreter;
mod reconcile;
mod remediation;
mod target;

pub use diagnostic::Diagnostic;
pub use interpreter::{InterpretOptions, Interpretation, Interpreter, Line, interpret};
pub use reconcile::{Signals, reconcile};
pub use remediation::{DEFAULT_EDIT_TOOL, EditOp, RemediationCommand};
pub use target::{TEST_WRAPPER_SUFFIX, TargetResolver, resolve};
