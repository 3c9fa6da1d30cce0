//! Suite construction, execution, and report printing.
//!
//! The default suite mirrors the repository's fixture layout: the project
//! manifest and the cookbook are fixed entries, and one check is added per
//! recipe template found under `.bake/templates/` (sorted by filename so
//! the suite order is deterministic). The runner evaluates each check in
//! order, prints one banner and one result line per check, and never
//! aborts: load failures are reported as warnings and the suite always
//! completes with a summary.

use std::path::{Path, PathBuf};

use bakecheck_schema::{run_check, CheckOutcome, CheckSpec, SuiteSummary};

/// Build the default check list for a repository root.
///
/// The returned list is an explicit configuration value: callers may run
/// it as-is, filter it, or substitute a synthetic list in tests.
pub fn default_suite(root: &Path) -> Vec<CheckSpec> {
    let schemas = root.join("schemas");
    let fixtures = root.join("resources").join("tests").join("valid");

    let mut checks = vec![
        CheckSpec::new(
            "Project Configuration (bake.yml)",
            schemas.join("bake-project.schema.json"),
            fixtures.join("bake.yml"),
        ),
        CheckSpec::new(
            "Cookbook Configuration (foo/cookbook.yml)",
            schemas.join("cookbook.schema.json"),
            fixtures.join("foo").join("cookbook.yml"),
        ),
    ];

    for template in find_templates(&fixtures.join(".bake").join("templates")) {
        let name = template
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("template")
            .to_string();
        checks.push(CheckSpec::new(
            format!("Recipe Template ({name})"),
            schemas.join("recipe-template.schema.json"),
            template,
        ));
    }

    checks
}

/// Collect `*.yml`/`*.yaml` files in a templates directory, sorted by
/// filename. A missing directory yields an empty list, not an error.
fn find_templates(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "no templates directory");
        return Vec::new();
    };

    let mut templates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("yml") | Some("yaml")
                )
        })
        .collect();
    templates.sort();
    templates
}

/// Print the suite header.
pub fn print_header() {
    println!("Bake Configuration Schema Validation");
    println!("{}", "=".repeat(50));
}

/// Evaluate every check in order, printing one result line per check.
///
/// Never returns early: load failures are recorded and reported as
/// warnings, validation failures print the first violation, and the
/// summary covers every check in the input list.
pub fn run_suite(checks: &[CheckSpec]) -> SuiteSummary {
    let mut results = Vec::with_capacity(checks.len());

    for spec in checks {
        println!("\n=== {} ===", spec.description);
        let result = run_check(spec);

        match &result.outcome {
            CheckOutcome::Pass => {
                println!(
                    "OK: {} is valid against {}",
                    result.spec.document_path.display(),
                    result.spec.schema_path.display()
                );
            }
            CheckOutcome::Fail(violations) => {
                println!(
                    "FAIL: {} failed validation:",
                    result.spec.document_path.display()
                );
                // Fail-fast reporting: the summary only needs pass/fail
                // plus one example failure.
                if let Some(first) = violations.first() {
                    println!("   Error: {}", first.message);
                    println!("   Path: {}", first.display_path());
                }
            }
            CheckOutcome::SchemaMissing { reason }
            | CheckOutcome::DocumentMissing { reason } => {
                println!("WARN: {reason}");
            }
            CheckOutcome::LoadError { reason } => {
                println!("FAIL: {reason}");
            }
        }

        results.push(result);
    }

    SuiteSummary::from_results(results)
}

/// Print the summary block and overall verdict.
pub fn print_summary(summary: &SuiteSummary) {
    println!("\n{}", "=".repeat(50));
    println!("SUMMARY");
    println!("{}", "=".repeat(50));
    println!("Passed: {}/{}", summary.passed, summary.total);

    if summary.all_passed() {
        println!("All schema validations passed.");
    } else {
        println!(
            "{} validation(s) failed. See diagnostics above.",
            summary.total - summary.passed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_SCHEMA: &str = r#"{
        "type": "object",
        "required": ["name"],
        "additionalProperties": false,
        "properties": {"name": {"type": "string"}}
    }"#;

    fn repo_root() -> PathBuf {
        let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        dir.pop(); // crates
        dir.pop(); // repo root
        dir
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_suite_covers_manifest_cookbook_and_templates() {
        let checks = default_suite(&repo_root());
        assert_eq!(checks.len(), 4, "got: {checks:#?}");
        assert_eq!(checks[0].description, "Project Configuration (bake.yml)");
        assert_eq!(
            checks[1].description,
            "Cookbook Configuration (foo/cookbook.yml)"
        );
        // Template checks are sorted by filename.
        assert_eq!(
            checks[2].description,
            "Recipe Template (build-template.yml)"
        );
        assert_eq!(checks[3].description, "Recipe Template (test-template.yml)");
    }

    #[test]
    fn default_suite_without_templates_dir_is_shorter_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let checks = default_suite(dir.path());
        assert_eq!(checks.len(), 2);
    }

    #[test]
    fn find_templates_is_sorted_and_yaml_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("z-last.yml"), "name: z\n").unwrap();
        std::fs::write(dir.path().join("a-first.yaml"), "name: a\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "not a template\n").unwrap();

        let templates = find_templates(dir.path());
        assert_eq!(templates.len(), 2);
        assert!(templates[0].ends_with("a-first.yaml"));
        assert!(templates[1].ends_with("z-last.yml"));
    }

    #[test]
    fn run_suite_on_empty_list_is_vacuously_all_pass() {
        let summary = run_suite(&[]);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.total, 0);
        assert!(summary.all_passed());
    }

    #[test]
    fn run_suite_completes_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_file(&dir, "name.schema.json", NAME_SCHEMA);
        let good = write_file(&dir, "good.yml", "name: foo\n");
        let bad = write_file(&dir, "bad.yml", "name: foo\nextra: 1\n");

        let checks = vec![
            CheckSpec::new("good", &schema, &good),
            CheckSpec::new("bad", &schema, &bad),
            CheckSpec::new("missing doc", &schema, dir.path().join("absent.yml")),
            CheckSpec::new("good again", &schema, &good),
        ];

        let summary = run_suite(&checks);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert!(!summary.all_passed());
        assert!(matches!(summary.results[1].outcome, CheckOutcome::Fail(_)));
        assert!(matches!(
            summary.results[2].outcome,
            CheckOutcome::DocumentMissing { .. }
        ));
    }

    #[test]
    fn run_suite_preserves_check_order() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_file(&dir, "name.schema.json", NAME_SCHEMA);
        let good = write_file(&dir, "good.yml", "name: foo\n");

        let checks: Vec<CheckSpec> = (0..3)
            .map(|i| CheckSpec::new(format!("check {i}"), &schema, &good))
            .collect();

        let summary = run_suite(&checks);
        let descriptions: Vec<&str> = summary
            .results
            .iter()
            .map(|r| r.spec.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["check 0", "check 1", "check 2"]);
    }
}
