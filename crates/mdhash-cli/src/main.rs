//! # mdhash CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdhash_cli::check::{run_check, CheckArgs};
use mdhash_cli::config::CliConfig;
use mdhash_cli::digest::{run_digest, DigestArgs};
use mdhash_cli::selftest::{run_selftest, SelftestArgs};

/// mdhash — incremental SHA-1 / SHA-256 message digests.
#[derive(Parser, Debug)]
#[command(name = "mdhash", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print digests of files or standard input.
    Digest(DigestArgs),

    /// Compare an input against an expected digest.
    Check(CheckArgs),

    /// Run the known-answer self test.
    Selftest(SelftestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("mdhash CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Digest(args) => run_digest(args, &config, &mut stdout),
        Commands::Check(args) => run_check(args, &config, &mut stdout),
        Commands::Selftest(args) => run_selftest(args, &config, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdhash_cli::config::{Mode, OutputFormat};
    use mdhash_core::DigestAlgorithm;

    #[test]
    fn cli_parse_digest_defaults() {
        let cli = Cli::try_parse_from(["mdhash", "digest"]).unwrap();
        if let Commands::Digest(args) = cli.command {
            assert!(args.files.is_empty());
            assert!(args.algorithm.is_none());
            assert!(args.chunk_size.is_none());
            assert!(args.mode.is_none());
            assert!(args.format.is_none());
        } else {
            panic!("expected digest command");
        }
    }

    #[test]
    fn cli_parse_digest_full() {
        let cli = Cli::try_parse_from([
            "mdhash",
            "digest",
            "-a",
            "sha1",
            "--chunk-size",
            "17",
            "--mode",
            "oneshot",
            "--format",
            "json",
            "a.bin",
            "b.bin",
        ])
        .unwrap();
        if let Commands::Digest(args) = cli.command {
            assert_eq!(args.algorithm, Some(DigestAlgorithm::Sha1));
            assert_eq!(args.chunk_size, Some(17));
            assert_eq!(args.mode, Some(Mode::Oneshot));
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert_eq!(args.files, vec![PathBuf::from("a.bin"), PathBuf::from("b.bin")]);
        } else {
            panic!("expected digest command");
        }
    }

    #[test]
    fn cli_parse_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["mdhash", "digest", "--algorithm", "md5"]).is_err());
    }

    #[test]
    fn cli_parse_check() {
        let cli = Cli::try_parse_from(["mdhash", "check", "abcd", "file.txt"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.expected, "abcd");
            assert_eq!(args.file, Some(PathBuf::from("file.txt")));
        } else {
            panic!("expected check command");
        }
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["mdhash", "selftest", "-vv", "--config", "mdhash.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("mdhash.yaml")));
        assert!(matches!(cli.command, Commands::Selftest(_)));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["mdhash"]).is_err());
    }
}
