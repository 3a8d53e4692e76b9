//! One file per parameter set

use crate::domain::{scalar_key, OutputDocument};
use crate::error::CustomizerError;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Write each parameter set as a YAML `{name: set}` document to `dir/name`.
pub fn split_sets(document: &OutputDocument, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create split directory: {}", dir.display()))?;

    let Some(sets) = document.parameter_sets()? else {
        return Ok(());
    };

    for (key, value) in sets {
        let name =
            scalar_key(key).ok_or_else(|| CustomizerError::InvalidSetName(format!("{:?}", key)))?;
        check_file_name(&name)?;

        let mut single = Mapping::new();
        single.insert(key.clone(), value.clone());

        let path = dir.join(&name);
        tracing::debug!("Creating {}", path.display());
        let rendered = serde_yaml::to_string(&Value::Mapping(single))
            .with_context(|| format!("Failed to serialize parameter set {}", name))?;
        fs::write(&path, rendered).with_context(|| format!("Failed writing {}", path.display()))?;
    }
    Ok(())
}

fn check_file_name(name: &str) -> Result<(), CustomizerError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(CustomizerError::InvalidSetName(name.to_string()));
    }
    Ok(())
}
