//! Parameter set name listing for Makefiles

use crate::domain::{OutputDocument, DESIGN_DEFAULT_VALUES};
use anyhow::Result;

/// Space-separated set names, each followed by a space, skipping
/// `design default values`.
pub fn render_list(document: &OutputDocument) -> Result<String> {
    let mut line = String::new();
    for name in document.set_names()? {
        if name != DESIGN_DEFAULT_VALUES {
            line.push_str(&name);
            line.push(' ');
        }
    }
    Ok(line)
}
