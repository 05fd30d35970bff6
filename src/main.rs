//! The `jsoncheck` command-line tool.
//!
//! Reads each file named on the command line and reports whether it is a
//! well-formed JSON document. Set `RUST_LOG=debug` to see pipeline logs.

use anyhow::{Context, Result};
use clap::Parser;
use jsoncheck::limits::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_BYTES};
use jsoncheck::{validate_with_limits, Limits, ValidationError};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jsoncheck")]
#[command(about = "Check JSON files for syntax errors", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum nesting depth of objects and arrays
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum file size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_bytes: usize,

    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// The outer error is I/O, the inner one is the verdict on the contents.
fn check_file(path: &Path, limits: Limits) -> Result<Result<(), ValidationError>> {
    let source =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    info!("checking {} ({} bytes)", path.display(), source.len());
    Ok(validate_with_limits(&source, limits))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let limits = Limits::default()
        .with_max_depth(cli.max_depth)
        .with_max_input_bytes(cli.max_bytes);

    let mut all_valid = true;
    for path in &cli.files {
        match check_file(path, limits) {
            Ok(Ok(())) => println!("{}: ok", path.display()),
            Ok(Err(e)) => {
                all_valid = false;
                println!("{}: {}", path.display(), e);
            }
            Err(e) => {
                all_valid = false;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
