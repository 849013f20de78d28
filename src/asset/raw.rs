//! Raw asset input: one bundler output file.

use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

/// Where an asset's uncompressed bytes come from.
#[derive(Debug, Clone)]
pub enum AssetSource {
    /// Content already in memory.
    Bytes(Vec<u8>),
    /// Content read from disk when the asset is compiled.
    File(PathBuf),
}

/// A single compiled web-application output file.
#[derive(Debug, Clone)]
pub struct RawAsset {
    /// Bundler-relative public name (e.g. `index.html`, `js/app.js`).
    pub output_path: String,
    pub source: AssetSource,
}

impl RawAsset {
    pub fn from_bytes(output_path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            output_path: output_path.into(),
            source: AssetSource::Bytes(bytes.into()),
        }
    }

    pub fn from_file(output_path: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            source: AssetSource::File(file.into()),
        }
    }

    /// URL path clients request: `"/" + output_path`.
    pub fn served_path(&self) -> String {
        format!("/{}", self.output_path)
    }

    /// Load the uncompressed content.
    pub fn read(&self) -> io::Result<Cow<'_, [u8]>> {
        match &self.source {
            AssetSource::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            AssetSource::File(path) => std::fs::read(path).map(Cow::Owned),
        }
    }
}
