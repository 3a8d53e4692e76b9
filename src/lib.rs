//! scad-customizer: merge default/override fragments into OpenSCAD customizer files
//!
//! Input documents (YAML or JSON) declare a `default` mapping and a set of
//! `parts` overriding it. Each part is expanded into a fully merged parameter
//! set, and the sets are collected into a single customizer document that
//! `openscad -p <file> -P <set>` understands.

pub mod config;
pub mod domain;
pub mod error;
pub mod expand;
pub mod load;
pub mod output;

pub use domain::{Config, DocumentFormat, DocumentShape, Flavour, OutputDocument, OutputMode};
pub use error::CustomizerError;
pub use expand::{expand, expand_all};
pub use load::{collect_inputs, load_flavour, load_flavours};
pub use output::emit;
