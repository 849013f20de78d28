//! Content digests using blake3.
//!
//! Used to decide whether a generated artifact on disk already matches what
//! a build would write, so unchanged files keep their mtime and downstream
//! firmware builds are not invalidated.

use std::fs;
use std::io;
use std::path::Path;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hash a byte slice.
    #[inline]
    pub fn of(data: impl AsRef<[u8]>) -> Self {
        Self(*blake3::hash(data.as_ref()).as_bytes())
    }

    /// Hash a file's contents, `None` if the file does not exist.
    pub fn of_file(path: &Path) -> io::Result<Option<Self>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(Self::of(bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Convert to hex string (for debugging/display).
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex chars, for log lines.
    pub fn short(self) -> String {
        self.to_hex()[..8].to_string()
    }
}
