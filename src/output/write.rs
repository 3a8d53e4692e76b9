//! Serialize the whole customizer document

use crate::domain::{DocumentFormat, OutputDocument};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Render as JSON (4-space indent, document key order) or YAML.
pub fn render_document(document: &OutputDocument, format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Json => {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            document.root().serialize(&mut serializer).context("Failed to serialize JSON")?;
            Ok(String::from_utf8(buf)?)
        }
        DocumentFormat::Yaml => {
            serde_yaml::to_string(document.root()).context("Failed to serialize YAML")
        }
    }
}

pub fn write_document(document: &OutputDocument, path: &Path, format: DocumentFormat) -> Result<()> {
    tracing::debug!("Creating {}", path.display());
    let rendered = render_document(document, format)?;
    fs::write(path, rendered).with_context(|| format!("Failed writing {}", path.display()))?;
    Ok(())
}
