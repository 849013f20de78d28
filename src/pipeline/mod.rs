//! The embed pipeline: raw assets → compiled table → generated sources.
//!
//! ```text
//! [RawAsset; n] ──compile (parallel)──▶ records in input order
//!               ──AssetTable::from_records──▶ sorted, validated table
//!               ──codegen::render──▶ header + body
//! ```
//!
//! Ordinals are fixed by input position before any parallel work starts and
//! the table is sorted afterwards, so output does not depend on which worker
//! finishes first. Nothing is rendered unless every asset compiled.


use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::asset::{AssetTable, CompiledAssetRecord, EmbedError, RawAsset, compress};
use crate::codegen::{self, CodegenOptions, EmbeddedSources};
use crate::logger::ProgressLine;
use crate::utils::mime::MimeRegistry;

/// Tuning for one embed run.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    /// Gzip level, `1..=9`.
    pub level: u32,
    /// Compress assets on the rayon pool.
    pub parallel: bool,
    pub codegen: CodegenOptions,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            level: compress::MAX_LEVEL,
            parallel: true,
            codegen: CodegenOptions::default(),
        }
    }
}

/// Compiles raw assets against an injected MIME registry.
pub struct Embedder<'a> {
    registry: &'a dyn MimeRegistry,
    options: EmbedOptions,
    progress: Option<&'a ProgressLine>,
}

impl<'a> Embedder<'a> {
    pub fn new(registry: &'a dyn MimeRegistry, options: EmbedOptions) -> Self {
        Self {
            registry,
            options,
            progress: None,
        }
    }

    /// Bump the `gzip` counter of `progress` after each asset.
    pub fn with_progress(mut self, progress: &'a ProgressLine) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn options(&self) -> &EmbedOptions {
        &self.options
    }

    /// Compile every asset and build the sorted table.
    pub fn compile(&self, assets: &[RawAsset]) -> Result<AssetTable, EmbedError> {
        reject_duplicate_paths(assets)?;

        let level = self.options.level;
        let registry = self.registry;
        let progress = self.progress;
        let compile_one = |(ordinal, asset): (usize, &RawAsset)| {
            let record = CompiledAssetRecord::compile(ordinal, asset, registry, level);
            if let Some(progress) = progress {
                progress.inc("gzip");
            }
            record
        };

        // Collect every outcome first so the reported error is the one with
        // the lowest ordinal, independent of scheduling.
        let outcomes: Vec<_> = if self.options.parallel {
            assets.par_iter().enumerate().map(compile_one).collect()
        } else {
            assets.iter().enumerate().map(compile_one).collect()
        };
        let records = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;

        AssetTable::from_records(records)
    }

    /// Compile and render both artifacts.
    pub fn embed(&self, assets: &[RawAsset]) -> Result<EmbeddedSources, EmbedError> {
        let table = self.compile(assets)?;
        Ok(self.render(&table))
    }

    /// Render an already compiled table.
    pub fn render(&self, table: &AssetTable) -> EmbeddedSources {
        let codegen = CodegenOptions {
            level: self.options.level,
            ..self.options.codegen.clone()
        };
        codegen::render(table, &codegen)
    }
}

/// Embed `assets` with default options: gzip level 9, default C++ names.
pub fn embed(
    assets: &[RawAsset],
    registry: &dyn MimeRegistry,
) -> Result<EmbeddedSources, EmbedError> {
    Embedder::new(registry, EmbedOptions::default()).embed(assets)
}

/// Fail before compressing anything if two inputs share an output path.
fn reject_duplicate_paths(assets: &[RawAsset]) -> Result<(), EmbedError> {
    let mut seen = FxHashSet::default();
    for asset in assets {
        if !seen.insert(asset.output_path.as_str()) {
            return Err(EmbedError::DuplicatePath {
                path: asset.output_path.clone(),
            });
        }
    }
    Ok(())
}
