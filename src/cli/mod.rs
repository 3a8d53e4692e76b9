//! Command-line interface for scad-customizer
//!
//! Reads flavour files, expands them, and lists, splits, or writes the result.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scad_customizer::config::{load_config, merge_cli_with_config, CliOverrides};
use scad_customizer::{collect_inputs, emit, expand_all, load_flavours};

/// Merge default/override fragments into OpenSCAD customizer parameter sets
#[derive(Parser)]
#[command(name = "scad-customizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input files (.yaml, .yml or .json)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Read every file inside this directory (repeatable)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directories: Vec<PathBuf>,

    /// Write the merged customizer file here (.json, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write one file per parameter set into this directory
    #[arg(short, long, value_name = "DIR")]
    split: Option<PathBuf>,

    /// Print the parameter set names on one line
    #[arg(short, long)]
    list: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (scad-customizer.toml or .scad-customizer.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            inputs: cli.files,
            directories: cli.directories,
            output: cli.output,
            split: cli.split,
            list: cli.list,
        },
    );

    let mode = config.output_mode()?;
    let inputs = collect_inputs(&config.inputs, &config.directories)?;
    let flavours = load_flavours(&inputs)?;
    tracing::debug!("Loaded {} of {} input files", flavours.len(), inputs.len());

    let document = expand_all(&flavours)?;
    emit(&document, &mode, &mut io::stdout().lock())
}
