//! scad-customizer: merge default/override fragments into OpenSCAD customizer files
//!
//! Expands `default` + `parts` documents into one parameter set per part and
//! writes them as a single customizer file, one file per set, or a name list.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
