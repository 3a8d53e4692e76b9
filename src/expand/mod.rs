//! Parameter-set expansion
//!
//! Each flavour is folded into the output document according to its shape:
//! default/parts documents produce one merged set per part, design default
//! values are copied through, and raw customizer files replace everything
//! accumulated so far.

use crate::domain::{DocumentShape, Flavour, OutputDocument, DESIGN_DEFAULT_VALUES};
use anyhow::Result;
use serde_yaml::{Mapping, Value};

/// Fold every flavour, in order, into a fresh output document.
pub fn expand_all(flavours: &[Flavour]) -> Result<OutputDocument> {
    flavours.iter().try_fold(OutputDocument::new(), expand)
}

/// Apply one flavour to the document and return the result.
pub fn expand(mut output: OutputDocument, flavour: &Flavour) -> Result<OutputDocument> {
    match DocumentShape::classify(flavour)? {
        DocumentShape::DefaultParts { default, parts } => {
            for (part, overrides) in parts {
                let name = set_name(&flavour.name, &part);
                tracing::debug!("Expanding {}", name);
                output.insert_set(&name, Value::Mapping(merge(&default, overrides)))?;
            }
        }
        DocumentShape::DesignDefaults(values) => {
            tracing::debug!("Handling {}", DESIGN_DEFAULT_VALUES);
            output.insert_set(DESIGN_DEFAULT_VALUES, values)?;
        }
        DocumentShape::Raw(root) => {
            tracing::debug!("Handling openscad json file {}", flavour.name);
            output = OutputDocument::from_raw(root);
        }
    }
    Ok(output)
}

/// Shallow overlay: keys from `overrides` replace or extend `default`.
pub fn merge(default: &Mapping, overrides: Mapping) -> Mapping {
    let mut merged = default.clone();
    for (key, value) in overrides {
        merged.insert(key, value);
    }
    merged
}

pub fn set_name(flavour: &str, part: &str) -> String {
    format!("{}_{}", flavour, part)
}
