//! Emit the expanded document: list, split, or write

pub mod list;
pub mod split;
pub mod write;

pub use list::render_list;
pub use split::split_sets;
pub use write::{render_document, write_document};

use crate::domain::{OutputDocument, OutputMode};
use anyhow::Result;
use std::io::Write;

/// Run the selected output mode. List output goes to `stdout`.
pub fn emit(document: &OutputDocument, mode: &OutputMode, stdout: &mut impl Write) -> Result<()> {
    match mode {
        OutputMode::Split(dir) => split_sets(document, dir),
        OutputMode::List => {
            writeln!(stdout, "{}", render_list(document)?)?;
            Ok(())
        }
        OutputMode::Write { path, format } => write_document(document, path, *format),
    }
}
