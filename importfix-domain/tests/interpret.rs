//! Behavioural tests for the interpreter against the documented scenarios.

use importfix_domain::{Diagnostic, Line, interpret, resolve};
use importfix_types::{AnalysisDocument, DepsAttribute, Finding, TargetContext, Verdict};
use pretty_assertions::assert_eq;

fn target() -> TargetContext {
    TargetContext {
        requested_label: "//target".to_string(),
        label: "//target".to_string(),
        attribute: DepsAttribute::Deps,
        package_folder: "mypkg".to_string(),
    }
}

fn undeclared(findings: Vec<Finding>) -> AnalysisDocument {
    AnalysisDocument {
        undeclared: findings,
        unused: vec![],
    }
}

fn unused(findings: Vec<Finding>) -> AnalysisDocument {
    AnalysisDocument {
        undeclared: vec![],
        unused: findings,
    }
}

#[test]
fn empty_document_from_json() {
    let doc = importfix_analysis::parse_analysis(r#"{"undeclared_deps": [], "unused_deps": []}"#)
        .expect("parse");

    let (verdict, diagnostics, commands) = interpret(&doc, &target()).into_parts();
    assert_eq!(verdict, Verdict::Pass);
    assert!(diagnostics.is_empty());
    assert!(commands.is_empty());
}

#[test]
fn single_candidate_yields_one_add_command() {
    let doc = undeclared(vec![
        Finding::new("bs4")
            .with_reference("client/client.py", 6)
            .with_candidates(["packagebeautifulsoup4", "beautifulsoup4"]),
    ]);

    let (verdict, diagnostics, commands) = interpret(&doc, &target()).into_parts();
    assert_eq!(verdict, Verdict::Fail);
    assert_eq!(commands, vec!["buildozer 'add deps beautifulsoup4' //target"]);
    assert_eq!(
        &diagnostics[..2],
        &[
            "Could not find a package providing `bs4`\n  - imported at client/client.py:6".to_string(),
            "You can fix this by running the following command:".to_string(),
        ]
    );
}

#[test]
fn multiple_candidates_keep_filtered_order() {
    let doc = undeclared(vec![
        Finding::new("yaml")
            .with_reference("cfg.py", 1)
            .with_candidates(["packagePyYAML", "yaml", "packageruamel_dyaml", "packageoyaml"]),
    ]);

    let out = interpret(&doc, &target());
    assert_eq!(
        out.commands(),
        vec![
            "buildozer 'add deps pyyaml' //target",
            "buildozer 'add deps ruamel_yaml' //target",
            "buildozer 'add deps oyaml' //target",
        ]
    );
    assert!(out.lines.contains(&Line::Diagnostic(Diagnostic::FixWith { alternatives: 3 })));
    assert_eq!(
        out.diagnostics()[1],
        "You can fix this by running one of the following commands:"
    );
}

#[test]
fn duplicate_candidates_are_passed_through() {
    let doc = undeclared(vec![
        Finding::new("attr").with_candidates(["packageattrs", "packageattrs"]),
    ]);

    let out = interpret(&doc, &target());
    assert_eq!(out.commands().len(), 2);
}

#[test]
fn no_namespaced_candidate_fails_without_command() {
    let doc = undeclared(vec![
        Finding::new("sidequest")
            .with_reference("client/client.py", 13)
            .with_candidates(["sidequest"]),
    ]);

    let (verdict, diagnostics, commands) = interpret(&doc, &target()).into_parts();
    assert_eq!(verdict, Verdict::Fail);
    assert!(commands.is_empty());
    assert_eq!(
        diagnostics[1],
        "Could not find any installed pip package providing that import."
    );
}

#[test]
fn every_reference_is_listed_in_scan_order() {
    let doc = undeclared(vec![
        Finding::new("flask")
            .with_reference("server/server.py", 1)
            .with_reference("server/app.py", 12)
            .with_reference("server/a.py", 3),
    ]);

    let diagnostics = interpret(&doc, &target()).diagnostics();
    assert_eq!(
        diagnostics[0],
        "Could not find a package providing `flask`\n\
         \x20 - imported at server/server.py:1\n\
         \x20 - imported at server/app.py:12\n\
         \x20 - imported at server/a.py:3"
    );
}

#[test]
fn unused_matching_package_folder_is_suppressed() {
    for name in ["packagemypkg", "mypkg", "packagemy", "my"] {
        let doc = unused(vec![Finding::new(name)]);
        let (verdict, diagnostics, commands) = interpret(&doc, &target()).into_parts();
        assert_eq!(verdict, Verdict::Pass, "{name} should be suppressed");
        assert!(diagnostics.is_empty());
        assert!(commands.is_empty());
    }
}

#[test]
fn suppression_is_per_finding() {
    let doc = unused(vec![
        Finding::new("packagemypkg"),
        Finding::new("packagerequests").with_reference("requirements.txt", 1),
    ]);

    let out = interpret(&doc, &target());
    assert_eq!(out.verdict, Verdict::Fail);
    assert_eq!(out.commands(), vec!["buildozer 'remove deps requests' //target"]);
    assert_eq!(out.diagnostics()[0], "Package `requests` is not used");
}

#[test]
fn suppression_never_touches_undeclared() {
    let doc = undeclared(vec![Finding::new("mypkg").with_candidates(["packagemypkg"])]);

    let out = interpret(&doc, &target());
    assert_eq!(out.verdict, Verdict::Fail);
    assert_eq!(out.commands(), vec!["buildozer 'add deps mypkg' //target"]);
}

#[test]
fn unused_gets_one_command_regardless_of_references() {
    let doc = unused(vec![
        Finding::new("packageclick")
            .with_reference("BUILD.bazel", 4)
            .with_reference("requirements.txt", 2),
    ]);

    let out = interpret(&doc, &target());
    assert_eq!(out.commands(), vec!["buildozer 'remove deps click' //target"]);
}

#[test]
fn unused_name_is_demangled() {
    let doc = unused(vec![Finding::new("packagetyping_dextensions")]);

    let out = interpret(&doc, &target());
    assert_eq!(
        out.commands(),
        vec!["buildozer 'remove deps typing_extensions' //target"]
    );
}

#[test]
fn undeclared_then_unused_then_trailer() {
    let doc = AnalysisDocument {
        undeclared: vec![Finding::new("bs4").with_candidates(["packagebeautifulsoup4"])],
        unused: vec![Finding::new("packagerequests")],
    };

    let out = interpret(&doc, &target());
    let kinds: Vec<&str> = out
        .lines
        .iter()
        .map(|l| match l {
            Line::Diagnostic(Diagnostic::UndeclaredImport { .. }) => "undeclared",
            Line::Diagnostic(Diagnostic::FixWith { .. }) => "fix",
            Line::Diagnostic(Diagnostic::UnusedDependency { .. }) => "unused",
            Line::Diagnostic(Diagnostic::RemoveWith) => "remove",
            Line::Diagnostic(Diagnostic::CheckFailed { .. }) => "trailer",
            Line::Diagnostic(Diagnostic::NoInstallablePackage) => "none",
            Line::Command(_) => "cmd",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["undeclared", "fix", "cmd", "unused", "remove", "cmd", "trailer"]
    );
}

#[test]
fn trailer_names_invoked_label_and_reproduce_command() {
    let ctx = resolve("//app/tests:unit_swift_test_pylib", "app/tests");
    let doc = unused(vec![Finding::new("packagerequests")]);

    let out = interpret(&doc, &ctx);
    assert_eq!(
        out.diagnostics().last().unwrap(),
        "There were errors while checking the dependencies of //app/tests:unit_swift_test_pylib.\n\
         To run this test locally you can run 'bazel build --config=fawltydeps //app/tests:unit_swift_test_pylib'"
    );
}

#[test]
fn wrapper_label_commands_target_real_label_with_test_deps() {
    let ctx = resolve("//app/tests:unit_swift_test_pylib", "app/tests");
    let doc = AnalysisDocument {
        undeclared: vec![Finding::new("pytest").with_candidates(["packagepytest"])],
        unused: vec![Finding::new("packagerequests")],
    };

    let out = interpret(&doc, &ctx);
    assert_eq!(
        out.commands(),
        vec![
            "buildozer 'add test_deps pytest' //app/tests:unit",
            "buildozer 'remove test_deps requests' //app/tests:unit",
        ]
    );
}

#[test]
fn plain_label_commands_use_deps_and_label_unchanged() {
    let ctx = resolve("//app:client", "app");
    let doc = unused(vec![Finding::new("packagerequests")]);

    let out = interpret(&doc, &ctx);
    assert_eq!(
        out.commands(),
        vec!["buildozer 'remove deps requests' //app:client"]
    );
}
