//! # bakecheck CLI entry point
//!
//! Parses command-line arguments, builds the check list, and dispatches
//! to the suite runner. Exit status is 0 only when every check passes.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bakecheck_cli::suite::{default_suite, print_header, print_summary, run_suite};
use bakecheck_cli::{resolve_path, resolve_root};
use bakecheck_schema::CheckSpec;

/// Schema conformance checker for bake configuration files.
///
/// Validates the project manifest, cookbook, and recipe-template fixtures
/// against the JSON schemas in `schemas/`. With a PATH argument, validates
/// that single file instead.
#[derive(Parser, Debug)]
#[command(name = "bakecheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Repository root. Discovered by walking up from the current
    /// directory when omitted.
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Validate a single configuration file instead of the default suite.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Schema filename to validate PATH against (e.g.
    /// cookbook.schema.json). Inferred from the filename when omitted.
    #[arg(long, value_name = "SCHEMA", requires = "path")]
    schema: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let root = cli.root.clone().unwrap_or_else(|| {
        resolve_root().unwrap_or_else(|| {
            tracing::warn!("could not locate repository root; using current directory");
            PathBuf::from(".")
        })
    });
    tracing::debug!(root = %root.display(), "resolved repository root");

    let checks = match build_checks(&cli, &root) {
        Ok(checks) => checks,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    print_header();
    let summary = run_suite(&checks);
    print_summary(&summary);

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Build the check list: the default fixture suite, or a one-element
/// suite for an explicit PATH.
fn build_checks(cli: &Cli, root: &std::path::Path) -> Result<Vec<CheckSpec>> {
    let Some(ref path) = cli.path else {
        return Ok(default_suite(root));
    };

    let document = resolve_path(path, root);
    let schema_name = match cli.schema {
        Some(ref schema) => schema.clone(),
        None => PathBuf::from(
            infer_schema_filename(&document)
                .with_context(|| format!("cannot infer a schema for {}", document.display()))?,
        ),
    };
    let schema = resolve_path(&schema_name, &root.join("schemas"));

    let description = document
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("document")
        .to_string();

    Ok(vec![CheckSpec::new(description, schema, document)])
}

/// Map well-known configuration filenames to their schema.
fn infer_schema_filename(path: &std::path::Path) -> Result<&'static str> {
    let filename = path.file_name().and_then(|f| f.to_str()).unwrap_or("");
    match filename {
        "bake.yml" | "bake.yaml" => Ok("bake-project.schema.json"),
        "cookbook.yml" | "cookbook.yaml" => Ok("cookbook.schema.json"),
        _ => {
            // Templates have free-form names; recognize them by directory.
            let in_templates = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|f| f.to_str())
                == Some("templates");
            if in_templates {
                Ok("recipe-template.schema.json")
            } else {
                bail!("unrecognized configuration filename: {filename}; pass --schema")
            }
        }
    }
}
