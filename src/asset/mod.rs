//! Asset model: raw bundler output in, sorted compressed table out.

pub mod compress;
mod error;
pub mod ident;
mod raw;
mod record;
mod scan;
mod table;

// Types
pub use error::{EmbedError, ScanError};
pub use raw::RawAsset;
pub use record::CompiledAssetRecord;
pub use table::AssetTable;

// Scanning (reads directory structure, not content)
pub use scan::{ScanOptions, scan_dist};
