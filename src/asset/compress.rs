//! Gzip payload compression.
//!
//! The firmware must gunzip payloads before serving them, so the algorithm
//! is part of the artifact contract and named in the generated header.
//! `GzEncoder` writes a zero mtime and a fixed OS byte, so equal input and
//! level always give identical bytes.

use std::io::{self, Write};

use flate2::{Compression, write::GzEncoder};

/// Name written into generated sources.
pub const ALGORITHM: &str = "gzip";

/// Maximum (and default) gzip level.
pub const MAX_LEVEL: u32 = 9;

/// Gzip `data` at `level` (clamped to `1..=9`).
pub fn gzip(data: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let level = level.clamp(1, MAX_LEVEL);
    let mut encoder = GzEncoder::new(
        Vec::with_capacity((data.len() / 2).max(64)),
        Compression::new(level),
    );
    encoder.write_all(data)?;
    encoder.finish()
}
