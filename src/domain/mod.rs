//! Core data types shared across the pipeline

mod config;
mod document;
mod format;

pub use config::{Config, OutputMode};
pub use document::{
    scalar_key, DocumentShape, Flavour, OutputDocument, DESIGN_DEFAULT_VALUES, FILE_FORMAT_VERSION,
    PARAMETER_SETS,
};
pub use format::DocumentFormat;
