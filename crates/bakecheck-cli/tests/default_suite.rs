//! Integration test: the default suite over the shipped fixture tree
//! passes every check.

use std::path::PathBuf;

use bakecheck_cli::suite::{default_suite, run_suite};

fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates
    dir.pop(); // repo root
    dir
}

#[test]
fn default_suite_passes_end_to_end() {
    let checks = default_suite(&repo_root());
    let summary = run_suite(&checks);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.passed, 4, "results: {:#?}", summary.results);
    assert!(summary.all_passed());
}

#[test]
fn suite_against_missing_fixture_tree_reports_every_check_without_aborting() {
    let empty = tempfile::tempdir().unwrap();
    let checks = default_suite(empty.path());
    let summary = run_suite(&checks);

    // No templates are discovered, so only the two fixed checks remain,
    // and both fail to load rather than abort the run.
    assert_eq!(summary.total, 2);
    assert_eq!(summary.passed, 0);
    assert!(!summary.all_passed());
}
