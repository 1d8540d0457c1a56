//! # mdhash-cli — Command-Line Front End
//!
//! Provides the `mdhash` binary on top of `mdhash-core`.
//!
//! ## Subcommands
//!
//! - `mdhash digest` — SHA-1/SHA-256 digests of files or stdin.
//! - `mdhash check` — compare one input against an expected digest.
//! - `mdhash selftest` — run the known-answer vectors on both hashing paths.
//!
//! ```bash
//! mdhash digest --algorithm sha1 README.md
//! printf Hello | mdhash check f7ff9e8b7bb2e09b70935a5d785e0cc5d9d0abf0
//! mdhash selftest --format json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers take parsed arguments and
//!   a writer, and return an exit code.
//! - Digests go to stdout; logs go to stderr.

pub mod check;
pub mod config;
pub mod digest;
pub mod input;
pub mod selftest;
