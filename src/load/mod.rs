//! Input discovery and document loading

pub mod document;
pub mod inputs;

pub use document::{load_flavour, load_flavours};
pub use inputs::collect_inputs;
