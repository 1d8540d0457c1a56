//! # Digest Subcommand
//!
//! Hashes each named file, or standard input when no file (or `-`) is
//! given, and prints one line per input.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mdhash_core::DigestAlgorithm;

use crate::config::{CliConfig, Mode, OutputFormat, Overrides, Settings};
use crate::input::{display_name, hash_path, Hashed, STDIN_MARKER};

/// Arguments for the `mdhash digest` subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Files to hash. Reads standard input when empty or `-`.
    pub files: Vec<PathBuf>,

    /// Digest algorithm (sha1 or sha256).
    #[arg(short, long)]
    pub algorithm: Option<DigestAlgorithm>,

    /// Bytes per update call in incremental mode.
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Feed input incrementally or all at once.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl DigestArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            algorithm: self.algorithm,
            chunk_size: self.chunk_size,
            mode: self.mode,
            format: self.format,
        }
    }
}

/// One line of JSON output.
#[derive(Debug, Serialize)]
struct DigestLine<'a> {
    name: &'a str,
    algorithm: DigestAlgorithm,
    hex: String,
    bytes: u64,
}

/// Write one result in the selected format.
pub fn write_result(
    out: &mut impl Write,
    format: OutputFormat,
    name: &str,
    hashed: &Hashed,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}  {}", hashed.digest.to_hex(), name)?,
        OutputFormat::Json => {
            let line = DigestLine {
                name,
                algorithm: hashed.digest.algorithm(),
                hex: hashed.digest.to_hex(),
                bytes: hashed.bytes,
            };
            writeln!(out, "{}", serde_json::to_string(&line)?)?;
        }
    }
    Ok(())
}

/// Execute `mdhash digest`. Returns the process exit code.
///
/// Every input is attempted; a failure on one input is logged and turns the
/// exit code to 1 without stopping the others.
pub fn run_digest(args: &DigestArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let settings = Settings::resolve(args.overrides(), config)?;
    tracing::info!(
        algorithm = %settings.algorithm,
        mode = ?settings.mode,
        chunk_size = settings.chunk_size,
        "hashing {} input(s)",
        args.files.len().max(1)
    );

    let stdin = [PathBuf::from(STDIN_MARKER)];
    let inputs: &[PathBuf] = if args.files.is_empty() {
        &stdin
    } else {
        &args.files
    };

    let mut code = 0;
    for path in inputs {
        match hash_path(path, &settings) {
            Ok(hashed) => write_result(out, settings.format, &display_name(path), &hashed)?,
            Err(e) => {
                tracing::error!("{e:#}");
                code = 1;
            }
        }
    }
    Ok(code)
}
