//! # Check Subcommand
//!
//! Hashes one input and compares it against an expected digest. When no
//! algorithm is given, it is inferred from the expected digest's length.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mdhash_core::{Digest, DigestAlgorithm};

use crate::config::{CliConfig, Mode, Overrides, Settings};
use crate::input::{display_name, hash_path, STDIN_MARKER};

/// Arguments for the `mdhash check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Expected digest as hex.
    pub expected: String,

    /// File to hash. Reads standard input when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Digest algorithm. Inferred from the expected digest when omitted.
    #[arg(short, long)]
    pub algorithm: Option<DigestAlgorithm>,

    /// Feed input incrementally or all at once.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
}

/// Pick the algorithm whose digest length matches `hex`.
pub fn infer_algorithm(hex: &str) -> Option<DigestAlgorithm> {
    let len = hex.trim().len();
    DigestAlgorithm::ALL
        .into_iter()
        .find(|alg| alg.digest_len() * 2 == len)
}

/// Execute `mdhash check`. Returns 0 on match, 1 on mismatch.
pub fn run_check(args: &CheckArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let algorithm = args
        .algorithm
        .or_else(|| infer_algorithm(&args.expected))
        .or(config.algorithm)
        .unwrap_or(DigestAlgorithm::Sha256);

    let expected = Digest::from_hex(algorithm, &args.expected)
        .with_context(|| format!("expected value is not a valid {algorithm} digest"))?;

    let overrides = Overrides {
        algorithm: Some(algorithm),
        mode: args.mode,
        ..Overrides::default()
    };
    let settings = Settings::resolve(overrides, config)?;

    let path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(STDIN_MARKER));
    let hashed = hash_path(&path, &settings)?;
    let name = display_name(&path);

    if hashed.digest.matches(&expected) {
        writeln!(out, "{name}: OK")?;
        Ok(0)
    } else {
        writeln!(out, "{name}: FAILED")?;
        tracing::warn!(
            input = %name,
            expected = %expected,
            actual = %hashed.digest,
            "digest mismatch"
        );
        Ok(1)
    }
}
