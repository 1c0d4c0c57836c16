//! Embeddable core library for importfix.
//!
//! Provides a clap-free, I/O-abstracted entry point for running one dependency check against one
//! build target.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`AnalyzerPort`](ports::AnalyzerPort): run the external analyzer
//! - [`WritePort`](ports::WritePort): write files and create directories
//!
//! The [`adapters`] module provides default process- and filesystem-backed implementations.
//!
//! # Entry points
//!
//! - [`run_check`](pipeline::run_check): run the analyzer and reconcile its outcome
//! - [`write_report`](pipeline::write_report): persist the JSON report

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use pipeline::{CheckError, CheckOutcome, run_check, write_report};

// Re-export so embedders don't need importfix-domain directly.
pub use importfix_domain::{Interpretation, Line};
