//! Enumerate a bundler output directory into raw assets.
//!
//! Ordinals (and therefore identifiers) come from input order, so the scan
//! sorts by output path instead of trusting directory iteration order,
//! which differs between filesystems.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::{RawAsset, ScanError};
use crate::debug;

/// Options for [`scan_dist`].
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Include dotfiles and anything under dot-directories.
    pub include_hidden: bool,
    /// Files never embedded (typically the artifacts being generated).
    pub exclude: Vec<PathBuf>,
}

/// Scan `root` recursively, one [`RawAsset`] per regular file.
///
/// Content is not read here; each asset points at its file and is loaded
/// when compiled.
pub fn scan_dist(root: &Path, options: &ScanOptions) -> Result<Vec<RawAsset>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let mut assets = Vec::new();
    let walker = WalkDir::new(&root)
        .skip_hidden(!options.include_hidden)
        .follow_links(true);

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            // Name the directory that failed, not just the root
            path: source.path().map_or_else(|| root.clone(), Path::to_path_buf),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if options.exclude.iter().any(|excluded| *excluded == path) {
            debug!("scan"; "excluding generated file {}", path.display());
            continue;
        }

        let output_path = output_path_of(&path, &root)?;
        assets.push(RawAsset::from_file(output_path, path));
    }

    assets.sort_by(|a, b| a.output_path.cmp(&b.output_path));
    Ok(assets)
}

/// `/`-joined path of `path` relative to `root`.
fn output_path_of(path: &Path, root: &Path) -> Result<String, ScanError> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ScanError::NonUtf8(path.to_path_buf()))?;
    Ok(parts.join("/"))
}
