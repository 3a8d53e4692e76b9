//! Expand positional files and `--directory` targets into one input list

use crate::error::CustomizerError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build the ordered input list: explicit files first, then the files found
/// directly inside each directory, sorted by name. Subdirectories are ignored.
pub fn collect_inputs(files: &[PathBuf], directories: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = files.to_vec();

    for dir in directories {
        inputs.extend(list_directory(dir)?);
    }

    Ok(inputs)
}

fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CustomizerError::MissingDirectory(dir.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in
        WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed listing {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else {
            tracing::debug!("Ignoring non-file entry {}", entry.path().display());
        }
    }
    Ok(files)
}
