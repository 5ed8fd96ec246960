//! logcondense: rewrite a compiler build log as one aligned line per diagnostic.
//!
//! Warnings (`[-Wflag]`) and errors are kept, everything else is dropped.
//! The rewritten log starts with a `<formatted>` marker line so that running
//! the tool again leaves it untouched.
//!
//! - `logcondense`: condense `build/logs/.log.txt` in place
//! - `logcondense path/to/build.log --dry-run`: print the result instead

mod condense;
mod persist;
mod record;

use anyhow::{Context, Result};
use clap::Parser;
use condense::Outcome;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "logcondense",
    about = "Condense a gcc build log into fixed-width warning and error records"
)]
struct Cli {
    /// Log file to rewrite in place
    #[arg(default_value = "build/logs/.log.txt")]
    log: PathBuf,

    /// Print the condensed log to stdout and leave the file unchanged
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("logcondense=info")),
        )
        .init();

    let cli = Cli::parse();

    let input = fs::read_to_string(&cli.log)
        .with_context(|| format!("failed to read {}", cli.log.display()))?;

    if cli.dry_run {
        return print(&condense::condense_text(&input));
    }

    match condense::condense(&input) {
        Outcome::AlreadyFormatted => {
            tracing::info!("{} is already formatted", cli.log.display());
        }
        Outcome::Condensed {
            text,
            records,
            skipped,
        } => {
            persist::replace_atomically(&cli.log, &text)?;
            tracing::info!(
                "{}: {} records, {} malformed lines skipped",
                cli.log.display(),
                records,
                skipped
            );
        }
    }

    Ok(())
}

fn print(text: &str) -> Result<()> {
    io::stdout()
        .write_all(text.as_bytes())
        .context("failed to write to stdout")
}
