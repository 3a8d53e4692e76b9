//! Read YAML and JSON documents into flavours

use crate::domain::{DocumentFormat, Flavour};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Load one input file.
///
/// Returns `Ok(None)` for unsupported extensions and for empty or null
/// documents; both are skipped rather than treated as errors.
pub fn load_flavour(path: &Path) -> Result<Option<Flavour>> {
    let Some(format) = DocumentFormat::from_path(path) else {
        tracing::warn!("Skipped file {}", path.display());
        return Ok(None);
    };

    tracing::debug!("Loading {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading input file: {}", path.display()))?;

    let value = match format {
        DocumentFormat::Yaml => parse_yaml(&content)
            .with_context(|| format!("Invalid YAML syntax: {}", path.display()))?,
        DocumentFormat::Json => serde_json::from_str::<Value>(&content)
            .with_context(|| format!("Invalid JSON syntax: {}", path.display()))?,
    };

    if value.is_null() {
        tracing::debug!("Skipping empty document {}", path.display());
        return Ok(None);
    }

    let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    Ok(Some(Flavour::new(name, value)))
}

/// Load every supported file, preserving input order.
pub fn load_flavours(paths: &[impl AsRef<Path>]) -> Result<Vec<Flavour>> {
    let mut flavours = Vec::with_capacity(paths.len());
    for path in paths {
        if let Some(flavour) = load_flavour(path.as_ref())? {
            flavours.push(flavour);
        }
    }
    Ok(flavours)
}

/// Only the first document of a multi-document stream is used.
fn parse_yaml(content: &str) -> Result<Value> {
    match serde_yaml::Deserializer::from_str(content).next() {
        Some(document) => Ok(Value::deserialize(document)?),
        None => Ok(Value::Null),
    }
}
