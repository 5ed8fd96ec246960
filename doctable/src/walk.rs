//! Directory walker: every regular file under the scan root.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Collect all files below `root`, recursively, in sorted path order.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("source directory not found: {}", root.display());
    }

    let pattern = format!(
        "{}/**/*",
        glob::Pattern::escape(&root.to_string_lossy())
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to walk {}", root.display()))?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();

    files.sort();
    Ok(files)
}

/// Name shown in the table header: the path relative to `root`, `/`-separated.
pub fn display_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
