//! # Selftest Subcommand
//!
//! Runs the engine's known-answer vectors through both hashing paths.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use mdhash_core::{run_self_test, SelfTestOutcome};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `mdhash selftest` subcommand.
#[derive(Args, Debug)]
pub struct SelftestArgs {
    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

fn write_outcome(
    out: &mut impl Write,
    format: OutputFormat,
    outcome: &SelfTestOutcome,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let verdict = if outcome.passed() { "PASS" } else { "FAIL" };
            writeln!(out, "{verdict}  {}", outcome.name)?;
            if !outcome.passed() {
                writeln!(out, "  expected:    {}", outcome.expected)?;
                writeln!(out, "  oneshot:     {}", outcome.oneshot)?;
                writeln!(out, "  incremental: {}", outcome.incremental)?;
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(outcome)?;
            value["passed"] = serde_json::Value::Bool(outcome.passed());
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}

/// Execute `mdhash selftest`. Returns 0 only if every vector passes.
pub fn run_selftest(args: &SelftestArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let format = args.format.or(config.format).unwrap_or_default();
    let outcomes = run_self_test()?;

    let mut failed = 0usize;
    for outcome in &outcomes {
        write_outcome(out, format, outcome)?;
        if !outcome.passed() {
            failed += 1;
        }
    }

    tracing::info!(total = outcomes.len(), failed, "self test complete");
    Ok(if failed == 0 { 0 } else { 1 })
}
