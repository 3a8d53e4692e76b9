//! Error types reported by the customizer pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors with a meaning of their own. I/O and parse failures travel as
/// `anyhow` errors with the offending path attached as context.
#[derive(Debug, Error)]
pub enum CustomizerError {
    #[error("Either an output file or a split destination directory or list must be specified")]
    MissingOutputMode,

    #[error("The target directory {} doesn't exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error(
        "Unsupported output format '{extension}' for {}: expected .json, .yaml or .yml",
        .path.display()
    )]
    UnsupportedOutputFormat { path: PathBuf, extension: String },

    #[error("Invalid document '{flavour}': {reason}")]
    Shape { flavour: String, reason: String },

    #[error("Parameter set name '{0}' cannot be used as a file name")]
    InvalidSetName(String),
}

impl CustomizerError {
    pub(crate) fn shape(flavour: &str, reason: impl Into<String>) -> Self {
        Self::Shape { flavour: flavour.to_string(), reason: reason.into() }
    }
}
