//! Run configuration

use crate::domain::DocumentFormat;
use crate::error::CustomizerError;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for one run, merged from an optional config file and the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input documents, processed in order.
    pub inputs: Vec<PathBuf>,
    /// Directories whose files are appended to `inputs`.
    pub directories: Vec<PathBuf>,
    /// Merged customizer file to write.
    pub output: Option<PathBuf>,
    /// Directory receiving one file per parameter set.
    pub split: Option<PathBuf>,
    /// Print parameter set names instead of writing anything.
    pub list: bool,
}

/// What to do with the expanded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Split(PathBuf),
    List,
    Write { path: PathBuf, format: DocumentFormat },
}

impl Config {
    /// Pick the output mode. Split wins over list, list wins over write.
    ///
    /// The output format is checked here so an unusable `--output` fails
    /// before any input is read.
    pub fn output_mode(&self) -> Result<OutputMode, CustomizerError> {
        if let Some(dir) = &self.split {
            return Ok(OutputMode::Split(dir.clone()));
        }
        if self.list {
            return Ok(OutputMode::List);
        }
        let Some(path) = &self.output else {
            return Err(CustomizerError::MissingOutputMode);
        };
        match DocumentFormat::from_path(path) {
            Some(format) => Ok(OutputMode::Write { path: path.clone(), format }),
            None => Err(CustomizerError::UnsupportedOutputFormat {
                path: path.clone(),
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }),
        }
    }
}
