//! Compiled record: one row of the emitted table.

use super::{EmbedError, RawAsset, compress, ident};
use crate::utils::mime::MimeRegistry;

/// An asset after compression, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledAssetRecord {
    /// `"/" + output_path`; the binary-search key.
    pub served_path: String,
    /// Empty when the extension is unknown.
    pub mime_type: String,
    /// Name of the payload array in generated source.
    pub identifier: String,
    /// Gzip-compressed content.
    pub payload: Vec<u8>,
    /// Uncompressed size, for reporting only.
    pub original_len: usize,
}

impl CompiledAssetRecord {
    /// Read, classify and compress `asset`, the `ordinal`-th input.
    pub fn compile(
        ordinal: usize,
        asset: &RawAsset,
        registry: &dyn MimeRegistry,
        level: u32,
    ) -> Result<Self, EmbedError> {
        let content = asset.read().map_err(|source| EmbedError::InputRead {
            path: asset.output_path.clone(),
            source,
        })?;

        let payload = compress::gzip(&content, level).map_err(|source| EmbedError::Compress {
            path: asset.output_path.clone(),
            source,
        })?;

        Ok(Self {
            served_path: asset.served_path(),
            mime_type: registry
                .lookup(&asset.output_path)
                .unwrap_or_default()
                .to_string(),
            identifier: ident::identifier(ordinal, &asset.output_path),
            payload,
            original_len: content.len(),
        })
    }

    /// Length recorded in the table (compressed bytes).
    #[inline]
    pub fn compressed_len(&self) -> usize {
        self.payload.len()
    }
}
