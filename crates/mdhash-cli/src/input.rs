//! # Input Sources
//!
//! Opens files or stdin and drives them through the engine in the selected
//! mode.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use mdhash_core::{hash, Digest, DigestContext};

use crate::config::{Mode, Settings};

/// Path that selects standard input.
pub const STDIN_MARKER: &str = "-";

/// Largest input accepted in oneshot mode, which holds the whole message in
/// memory.
pub const MAX_ONESHOT_LEN: usize = 1024 * 1024 * 1024;

/// Read size used while buffering oneshot input.
const ONESHOT_READ: usize = 64 * 1024;

/// Display name for an input path.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_MARKER {
        STDIN_MARKER.to_string()
    } else {
        path.display().to_string()
    }
}

/// Open `path` for reading; `-` reads standard input.
pub fn open(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == STDIN_MARKER {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// A digest together with the number of input bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hashed {
    /// The computed digest.
    pub digest: Digest,
    /// Number of input bytes hashed.
    pub bytes: u64,
}

/// Allocate a zeroed buffer of `len` bytes, failing instead of aborting when
/// the allocation cannot be satisfied.
fn alloc_buffer(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .with_context(|| format!("failed to allocate a {len}-byte read buffer"))?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Read all of `reader` into memory, refusing inputs longer than `limit`.
fn read_all<R: Read>(mut reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut chunk = alloc_buffer(ONESHOT_READ.min(limit.saturating_add(1)))?;
    let mut data = Vec::new();
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("failed to read input"),
        };
        if data.len().saturating_add(n) > limit {
            bail!("input exceeds the oneshot limit of {limit} bytes; use --mode incremental");
        }
        data.try_reserve(n)
            .context("out of memory while buffering input")?;
        data.extend_from_slice(&chunk[..n]);
    }
    Ok(data)
}

/// Hash everything `reader` yields according to `settings`.
pub fn hash_reader<R: Read>(reader: R, settings: &Settings) -> Result<Hashed> {
    match settings.mode {
        Mode::Oneshot => {
            let data = read_all(reader, MAX_ONESHOT_LEN)?;
            Ok(Hashed {
                digest: hash(settings.algorithm, &data),
                bytes: data.len() as u64,
            })
        }
        Mode::Incremental => {
            let mut ctx = DigestContext::new(settings.algorithm);
            let mut buf = alloc_buffer(settings.chunk_size.max(1))?;
            let bytes = ctx
                .update_reader(reader, &mut buf)
                .context("failed to read input")?;
            let digest = ctx.finalize()?;
            Ok(Hashed { digest, bytes })
        }
    }
}

/// Open and hash one input.
pub fn hash_path(path: &Path, settings: &Settings) -> Result<Hashed> {
    let reader = open(path)?;
    let hashed = hash_reader(reader, settings)
        .with_context(|| format!("failed to hash {}", display_name(path)))?;
    tracing::debug!(
        input = %display_name(path),
        algorithm = %settings.algorithm,
        bytes = hashed.bytes,
        "hashed input"
    );
    Ok(hashed)
}
