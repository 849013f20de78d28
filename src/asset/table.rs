//! The sorted, binary-searchable asset table.
//!
//! Firmware looks assets up with `std::lower_bound` over `servedPath`, so the
//! record order is load-bearing: ascending, strict, ordinal byte order (the
//! same order `strcmp` and Arduino `String::operator<` use). Rust `str`
//! ordering is exactly that.

use rustc_hash::FxHashMap;

use super::{CompiledAssetRecord, EmbedError};

/// Records sorted by served path with unique identifiers and paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTable {
    records: Vec<CompiledAssetRecord>,
}

impl AssetTable {
    /// Build a table from records given in input (ordinal) order.
    ///
    /// Rejects repeated identifiers or served paths instead of letting one
    /// entry shadow another.
    pub fn from_records(mut records: Vec<CompiledAssetRecord>) -> Result<Self, EmbedError> {
        let mut seen: FxHashMap<&str, &str> = FxHashMap::default();
        for record in &records {
            if let Some(first) = seen.insert(&record.identifier, &record.served_path) {
                return Err(EmbedError::IdentifierCollision {
                    identifier: record.identifier.clone(),
                    first: strip_root(first).to_string(),
                    second: strip_root(&record.served_path).to_string(),
                });
            }
        }

        // Stable, so a duplicate is reported at its first occurrence.
        records.sort_by(|a, b| a.served_path.cmp(&b.served_path));

        if let Some(pair) = records
            .windows(2)
            .find(|pair| pair[0].served_path == pair[1].served_path)
        {
            return Err(EmbedError::DuplicatePath {
                path: strip_root(&pair[1].served_path).to_string(),
            });
        }

        Ok(Self { records })
    }

    /// Binary search by served path, as the firmware does.
    pub fn find(&self, served_path: &str) -> Option<&CompiledAssetRecord> {
        self.records
            .binary_search_by(|r| r.served_path.as_str().cmp(served_path))
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn records(&self) -> &[CompiledAssetRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledAssetRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of uncompressed sizes.
    pub fn original_bytes(&self) -> usize {
        self.records.iter().map(|r| r.original_len).sum()
    }

    /// Sum of payload sizes (what ends up in flash).
    pub fn compressed_bytes(&self) -> usize {
        self.records.iter().map(|r| r.compressed_len()).sum()
    }
}

/// Served path back to the bundler output path, for error messages.
fn strip_root(served_path: &str) -> &str {
    served_path.strip_prefix('/').unwrap_or(served_path)
}
