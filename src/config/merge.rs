//! Overlay command-line arguments onto a loaded config

use crate::domain::Config;
use std::path::PathBuf;

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub inputs: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub split: Option<PathBuf>,
    pub list: bool,
}

/// CLI paths replace config paths; CLI inputs and directories are appended
/// after the configured ones; `list` is set if either side sets it.
pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    config.inputs.extend(cli.inputs);
    config.directories.extend(cli.directories);
    if cli.output.is_some() {
        config.output = cli.output;
    }
    if cli.split.is_some() {
        config.split = cli.split;
    }
    config.list |= cli.list;
    config
}
