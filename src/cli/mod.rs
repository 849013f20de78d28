//! Command-line interface module.

mod args;
pub mod build;
pub mod list;

pub use args::{BuildArgs, Cli, Commands, ListArgs};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::asset::{AssetTable, scan_dist};
use crate::config::EmbedConfig;
use crate::logger::ProgressLine;
use crate::pipeline::Embedder;
use crate::utils::mime::MimeTable;

/// Scan `dist` and compile it into a table, showing gzip progress.
///
/// Shared by `build` and `list`; nothing is written.
pub(crate) fn compile_dist(
    dist: &Path,
    config: &EmbedConfig,
    mime: &MimeTable,
) -> Result<AssetTable> {
    let assets = scan_dist(dist, &config.scan_options(dist))
        .with_context(|| format!("Failed to scan {}", dist.display()))?;

    let progress = ProgressLine::new(&[("gzip", assets.len())]);
    let embedder = Embedder::new(mime, config.embed_options()).with_progress(&progress);
    let table = embedder.compile(&assets)?;
    progress.finish();

    Ok(table)
}

/// `dist` as given on the command line, made absolute against cwd.
pub(crate) fn absolute_dist(dist: &Path) -> Result<PathBuf> {
    std::path::absolute(dist).with_context(|| format!("Invalid path {}", dist.display()))
}
