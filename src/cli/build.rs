//! `embedweb build`: compress a bundle and write the generated sources.
//!
//! Phases:
//! - **Scan** - enumerate DIST, skipping the artifacts themselves
//! - **Compile** - gzip every asset (parallel), sort into the table
//! - **Render** - header and body, fully in memory
//! - **Write** - stage changed files beside their targets, then rename

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    cli::{BuildArgs, absolute_dist, compile_dist},
    config::EmbedConfig,
    debug, log,
    pipeline::Embedder,
    utils::{
        fmt::{format_size, plural_count, ratio_percent},
        hash::ContentHash,
    },
};

/// Run the build command.
pub fn build_assets(args: &BuildArgs, config: &EmbedConfig) -> Result<()> {
    let dist = absolute_dist(&args.dist)?;
    let mime = config.mime_table();

    log!("build"; "embedding {}", dist.display());
    let table = compile_dist(&dist, config, &mime)?;

    // Render both before touching disk: a failure leaves old artifacts intact
    let sources = Embedder::new(&mime, config.embed_options()).render(&table);

    let out_dir = config.output_dir(&dist);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    // Stage both, then swap both in, so header and body never disagree
    let staged = [
        StagedWrite::stage(&config.header_path(&dist), &sources.header, args.force)?,
        StagedWrite::stage(&config.source_path(&dist), &sources.body, args.force)?,
    ];
    for staged in staged.into_iter().flatten() {
        log!("build"; "wrote {}", staged.commit()?.display());
    }

    log!(
        "done";
        "{} embedded, {} -> {} ({:.1}%)",
        plural_count(table.len(), "asset"),
        format_size(table.original_bytes()),
        format_size(table.compressed_bytes()),
        ratio_percent(table.compressed_bytes(), table.original_bytes())
    );
    Ok(())
}

/// New artifact content written next to its target, not yet in place.
///
/// Dropping it without [`commit`](Self::commit) removes the temp file.
#[derive(Debug)]
pub struct StagedWrite {
    tmp: PathBuf,
    target: PathBuf,
}

impl StagedWrite {
    /// Write `content` beside `target`, or `None` if `target` already holds
    /// exactly that.
    ///
    /// Keeping the mtime of unchanged artifacts stops firmware builds from
    /// recompiling the (large) asset source on every web build.
    pub fn stage(target: &Path, content: &str, force: bool) -> Result<Option<Self>> {
        if !force {
            let existing = ContentHash::of_file(target)
                .with_context(|| format!("Failed to read {}", target.display()))?;
            if let Some(existing) = existing
                && existing == ContentHash::of(content)
            {
                debug!("build"; "unchanged {} ({})", target.display(), existing.short());
                return Ok(None);
            }
        }

        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp = target.with_file_name(format!(".{name}.tmp.{}", std::process::id()));
        let staged = Self {
            tmp,
            target: target.to_path_buf(),
        };
        fs::write(&staged.tmp, content)
            .with_context(|| format!("Failed to write {}", staged.tmp.display()))?;
        Ok(Some(staged))
    }

    /// Move the staged file over its target.
    pub fn commit(self) -> Result<PathBuf> {
        fs::rename(&self.tmp, &self.target)
            .with_context(|| format!("Failed to replace {}", self.target.display()))?;
        Ok(self.target.clone())
    }
}

impl Drop for StagedWrite {
    fn drop(&mut self) {
        // Already renamed after a successful commit
        let _ = fs::remove_file(&self.tmp);
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use tempfile::TempDir;

    fn project() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("dist");
        fs::create_dir_all(dist.join("static")).unwrap();
        fs::write(dist.join("index.html"), "<html></html>").unwrap();
        fs::write(dist.join("static/app.js"), "console.log(1)").unwrap();
        (dir, dist)
    }

    fn args(dist: &Path) -> BuildArgs {
        BuildArgs {
            dist: dist.to_path_buf(),
            output: None,
            level: None,
            parallel: None,
            line_ending: None,
            force: false,
            verbose: false,
        }
    }

    fn config(root: &Path) -> EmbedConfig {
        EmbedConfig {
            root: root.to_path_buf(),
            ..EmbedConfig::default()
        }
    }

    /// Names in `dir`, sorted.
    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn stage_and_commit(path: &Path, content: &str, force: bool) -> bool {
        match StagedWrite::stage(path, content, force).unwrap() {
            Some(staged) => {
                staged.commit().unwrap();
                true
            }
            None => false,
        }
    }

    #[test]
    fn test_stage_skips_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("web_assets.h");

        assert!(stage_and_commit(&path, "a", false));
        assert!(!stage_and_commit(&path, "a", false));
        assert!(stage_and_commit(&path, "a", true));
        assert!(stage_and_commit(&path, "b", false));
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
        assert_eq!(entries(dir.path()), ["web_assets.h"]);
    }

    #[test]
    fn test_dropped_stage_leaves_target_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("web_assets.cpp");
        fs::write(&path, "old").unwrap();

        let staged = StagedWrite::stage(&path, "new", false).unwrap().unwrap();
        assert_eq!(entries(dir.path()).len(), 2);
        drop(staged);

        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(entries(dir.path()), ["web_assets.cpp"]);
    }

    #[test]
    fn test_body_failure_keeps_old_header() {
        let (dir, dist) = project();
        fs::write(dist.join("web_assets.h"), "// previous header").unwrap();
        // The body cannot be staged when its target is a directory
        fs::create_dir(dist.join("web_assets.cpp")).unwrap();

        assert!(build_assets(&args(&dist), &config(dir.path())).is_err());
        assert_eq!(
            fs::read_to_string(dist.join("web_assets.h")).unwrap(),
            "// previous header"
        );
        assert_eq!(
            entries(&dist),
            ["index.html", "static", "web_assets.cpp", "web_assets.h"]
        );
    }

    #[test]
    fn test_build_writes_into_dist() {
        let (dir, dist) = project();
        build_assets(&args(&dist), &config(dir.path())).unwrap();

        let header = fs::read_to_string(dist.join("web_assets.h")).unwrap();
        let body = fs::read_to_string(dist.join("web_assets.cpp")).unwrap();
        assert!(header.contains("extern const size_t webAssetsCount;"));
        assert!(body.contains("#include \"web_assets.h\""));
        assert!(body.contains("{\"/index.html\", \"text/html\", "));
        assert!(body.contains("{\"/static/app.js\", \"application/javascript\", "));
        assert!(body.contains("const size_t webAssetsCount = 2;"));
    }

    #[test]
    fn test_rebuild_does_not_embed_own_output() {
        let (dir, dist) = project();
        let config = config(dir.path());
        build_assets(&args(&dist), &config).unwrap();
        let first = fs::read_to_string(dist.join("web_assets.cpp")).unwrap();

        build_assets(&args(&dist), &config).unwrap();
        let second = fs::read_to_string(dist.join("web_assets.cpp")).unwrap();
        assert_eq!(first, second);
        assert!(!second.contains("/web_assets.h"));
    }

    #[test]
    fn test_build_custom_output_dir_and_names() {
        let (dir, dist) = project();
        let out = dir.path().join("fw/src");
        let config = EmbedConfig {
            output: OutputConfig {
                dir: Some(out.clone()),
                header: "assets.h".into(),
                source: "assets.cpp".into(),
                ..OutputConfig::default()
            },
            ..config(dir.path())
        };
        build_assets(&args(&dist), &config).unwrap();

        let body = fs::read_to_string(out.join("assets.cpp")).unwrap();
        assert!(body.contains("#include \"assets.h\""));
        assert!(out.join("assets.h").is_file());
        assert!(!dist.join("web_assets.cpp").exists());
    }

    #[test]
    fn test_failed_build_keeps_previous_artifacts() {
        let (dir, dist) = project();
        let config = config(dir.path());
        build_assets(&args(&dist), &config).unwrap();
        let before = fs::read_to_string(dist.join("web_assets.cpp")).unwrap();

        let result = build_assets(&args(&dir.path().join("missing")), &config);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(dist.join("web_assets.cpp")).unwrap(), before);
    }
}
