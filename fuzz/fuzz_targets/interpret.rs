#![no_main]

//! Fuzz target for the full interpretation of one target.
//!
//! Any label, package path and finding set must interpret without panicking, and the verdict
//! must agree with whether anything was printed.

use arbitrary::Arbitrary;
use importfix_domain::{TEST_WRAPPER_SUFFIX, TargetResolver, interpret, reconcile};
use importfix_types::{AnalysisDocument, Finding};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    label: String,
    package: String,
    undeclared: Vec<(String, Vec<String>)>,
    unused: Vec<String>,
    analyzer_exit_code: i32,
}

fuzz_target!(|input: Input| {
    let doc = AnalysisDocument {
        undeclared: input
            .undeclared
            .into_iter()
            .map(|(name, candidates)| Finding::new(name).with_candidates(candidates))
            .collect(),
        unused: input.unused.into_iter().map(Finding::new).collect(),
    };

    let ctx = TargetResolver::new(TEST_WRAPPER_SUFFIX).resolve(&input.label, &input.package);
    let result = interpret(&doc, &ctx);

    assert_eq!(result.verdict.is_pass(), result.lines.is_empty());

    let code = reconcile(input.analyzer_exit_code, result.verdict);
    if (input.analyzer_exit_code == 0) == result.verdict.is_pass() {
        assert_eq!(code, input.analyzer_exit_code);
    }
});
