//! doctable: build an HTML test-tracking table from documented C sources.
//!
//! Walks a source tree, picks out top-level function definitions with a
//! line heuristic, pairs each with the nearest block comment above it and
//! writes one table per file, with blank rows for recording test cases.
//!
//! - `doctable`: scan `src/`, write `testScriptTable.txt`
//! - `doctable path/to/src -o report.html`
//! - `doctable -o -`: print to stdout

mod model;
mod parser;
mod render;
mod walk;

use anyhow::{Context, Result};
use clap::Parser;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doctable",
    about = "Generate an HTML test-tracking table from documented C functions"
)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = "src")]
    root: PathBuf,

    /// Report file, or `-` for stdout
    #[arg(short = 'o', long, default_value = "testScriptTable.txt")]
    output: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doctable=info")),
        )
        .init();

    let cli = Cli::parse();
    let report = build_report(&cli.root)?;

    if cli.output == "-" {
        io::stdout()
            .write_all(report.as_bytes())
            .context("failed to write to stdout")?;
    } else {
        fs::write(&cli.output, &report)
            .with_context(|| format!("failed to write {}", cli.output))?;
        tracing::info!("wrote {}", cli.output);
    }

    Ok(())
}

/// Scan every file under `root` and render the concatenated tables.
fn build_report(root: &std::path::Path) -> Result<String> {
    let files = walk::source_files(root)?;

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let name = walk::display_name(root, path);
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            tracing::warn!("{}: not valid UTF-8, invalid bytes replaced", name);
        }
        let report = parser::parse_file(&name, &content);
        tracing::debug!("{}: {} declarations", name, report.entries.len());
        reports.push(report);
    }

    let total: usize = reports.iter().map(|r| r.entries.len()).sum();
    tracing::info!("{} files, {} declarations", reports.len(), total);

    Ok(render::html::render_all(&reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn report_has_one_table_per_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.h"), "/* A. */\nvoid a() {\n}\n").unwrap();
        fs::write(dir.path().join("b.h"), "#define B 1\n").unwrap();

        let html = build_report(dir.path()).unwrap();
        assert_eq!(html.matches("<table>").count(), 2);
        assert!(html.find("<code>a.h</code>").unwrap() < html.find("<code>b.h</code>").unwrap());
    }

    #[test]
    fn non_utf8_file_does_not_stop_the_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.h"), "/* A. */\nvoid a() {\n}\n").unwrap();
        fs::write(dir.path().join("b.h"), b"/* Caf\xe9 helper. */\nvoid b() {\n}\n").unwrap();

        let html = build_report(dir.path()).unwrap();
        assert_eq!(html.matches("<table>").count(), 2);
        assert!(html.contains("<code>b.h</code>"));
        assert!(html.contains("Caf\u{FFFD} helper. "));
    }

    #[test]
    fn unreadable_root_fails() {
        let dir = TempDir::new().unwrap();
        assert!(build_report(&dir.path().join("missing")).is_err());
    }
}
