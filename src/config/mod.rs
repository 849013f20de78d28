//! Project configuration from `embedweb.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── output     # [output]
//! │   ├── compress   # [compress]
//! │   ├── codegen    # [codegen]
//! │   ├── scan       # [scan]
//! │   └── mime       # [mime]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # EmbedConfig (this file)
//! ```
//!
//! The file is optional. Without one every section takes its defaults and
//! relative paths resolve against the current directory.

pub mod section;
pub mod types;
mod util;

use util::{absolutize, find_config_file};

pub use section::{CodegenConfig, CompressConfig, MimeConfig, OutputConfig, ScanConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::asset::ScanOptions;
use crate::cli::{BuildArgs, Cli, Commands};
use crate::codegen::CodegenOptions;
use crate::pipeline::EmbedOptions;
use crate::utils::mime::MimeTable;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the current directory.
pub const CONFIG_FILE: &str = "embedweb.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing embedweb.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Absolute path to the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub compress: CompressConfig,

    #[serde(default)]
    pub codegen: CodegenConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub mime: MimeConfig,
}

impl EmbedConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist; otherwise `embedweb.toml` is
    /// searched upward from cwd and defaults apply when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match &cli.config {
            Some(path) => Some(
                find_config_file(&absolutize(path, &cwd), &cwd).ok_or_else(|| {
                    ConfigError::Read {
                        path: path.clone(),
                        source: not_found(),
                    }
                })?,
            ),
            None => find_config_file(Path::new(CONFIG_FILE), &cwd),
        };

        let mut config = match &config_path {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(path)?
            }
            None => {
                debug!("config"; "no {CONFIG_FILE} found, using defaults");
                Self::default()
            }
        };

        config.root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.clone(), Path::to_path_buf);
        config.config_path = config_path;
        config.finalize(cli, &cwd);
        config.check()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (config, ignored) =
            Self::parse_with_ignored(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields. Builds run unattended, so this never prompts.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-line overrides and resolve paths.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(dir) = self.output.dir.take() {
            self.output.dir = Some(absolutize(&dir, &self.root));
        }
        if let Commands::Build { args } = &cli.command {
            self.apply_build_args(args, cwd);
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs, cwd: &Path) {
        if let Some(dir) = &args.output {
            self.output.dir = Some(absolutize(dir, cwd));
        }
        Self::update_option(&mut self.compress.level, args.level.as_ref());
        Self::update_option(&mut self.compress.parallel, args.parallel.as_ref());
        Self::update_option(&mut self.output.line_ending, args.line_ending.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        self.output.validate(&mut diag);
        self.compress.validate(&mut diag);
        self.codegen.validate(&mut diag);
        self.mime.validate(&mut diag);

        diag.into_result()
    }

    /// [`validate`](Self::validate), attributing problems to the config file.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|diagnostics| ConfigError::Invalid {
            path: self.config_path.clone(),
            diagnostics,
        })
    }

    // ========================================================================
    // derived settings
    // ========================================================================

    /// Artifact directory for assets scanned from `dist`.
    pub fn output_dir(&self, dist: &Path) -> PathBuf {
        self.output
            .dir
            .clone()
            .unwrap_or_else(|| absolutize(dist, &self.root))
    }

    pub fn header_path(&self, dist: &Path) -> PathBuf {
        self.output_dir(dist).join(&self.output.header)
    }

    pub fn source_path(&self, dist: &Path) -> PathBuf {
        self.output_dir(dist).join(&self.output.source)
    }

    /// Scan options that keep the generated artifacts out of the table.
    pub fn scan_options(&self, dist: &Path) -> ScanOptions {
        // The scanner reports canonical paths
        let out_dir = self.output_dir(dist);
        let out_dir = out_dir.canonicalize().unwrap_or(out_dir);
        ScanOptions {
            include_hidden: self.scan.include_hidden,
            exclude: vec![
                out_dir.join(&self.output.header),
                out_dir.join(&self.output.source),
            ],
        }
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        let mut options = CodegenOptions {
            header_file: self.output.header.clone(),
            line_ending: self.output.line_ending,
            level: self.compress.level,
            ..CodegenOptions::default()
        };
        self.codegen.apply_to(&mut options);
        options
    }

    pub fn embed_options(&self) -> EmbedOptions {
        EmbedOptions {
            level: self.compress.level,
            parallel: self.compress.parallel,
            codegen: self.codegen_options(),
        }
    }

    pub fn mime_table(&self) -> MimeTable {
        self.mime.table()
    }
}

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found")
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> EmbedConfig {
    let (parsed, ignored) = EmbedConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::LineEnding;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = EmbedConfig::from_str("[output\nheader = \"a.h\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[compress
level = 3").unwrap();

        let err = EmbedConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_invalid_config_names_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[compress]
level = 12
[codegen]
count_name = \"n-1\"").unwrap();

        let mut config = EmbedConfig::from_path(&path).unwrap();
        config.config_path = Some(path.clone());
        let err = config.check().unwrap_err();

        assert_eq!(err.path(), Some(path.as_path()));
        let ConfigError::Invalid { diagnostics, .. } = &err else {
            panic!("expected validation failure, got {err}");
        };
        assert_eq!(diagnostics.len(), 2);
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = EmbedConfig::default();
        assert!(config.config_path.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.codegen_options(), CodegenOptions::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[compress]\nlevel = 6\nlevle = 7\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = EmbedConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.compress.level, 6);
        assert!(ignored.iter().any(|f| f == "compress.levle"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = EmbedConfig::parse_with_ignored("[scan]\ninclude_hidden = true").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validation_collects_all_sections() {
        let config = test_parse_config(
            "[compress]\nlevel = 0\n[codegen]\ntable_name = \"a b\"\n[mime]\noverrides = { \".x\" = \"y\" }",
        );
        let diag = config.validate().unwrap_err();
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_build_args_override_config() {
        let mut config = test_parse_config(
            "[output]\ndir = \"fw/src\"\n[compress]\nlevel = 9\nparallel = true",
        );
        config.root = PathBuf::from("/project");

        let cli = Cli::parse_from([
            "embedweb", "build", "dist", "--level", "3", "--parallel", "false",
            "--line-ending", "crlf",
        ]);
        config.finalize(&cli, Path::new("/cwd"));

        assert_eq!(config.output.dir, Some(PathBuf::from("/project/fw/src")));
        assert_eq!(config.compress.level, 3);
        assert!(!config.compress.parallel);
        assert_eq!(config.output.line_ending, LineEnding::Crlf);

        let cli = Cli::parse_from(["embedweb", "build", "dist", "-o", "out"]);
        config.finalize(&cli, Path::new("/cwd"));
        assert_eq!(config.output.dir, Some(PathBuf::from("/cwd/out")));
    }

    #[test]
    fn test_list_ignores_build_overrides() {
        let mut config = EmbedConfig {
            root: PathBuf::from("/project"),
            ..EmbedConfig::default()
        };
        let cli = Cli::parse_from(["embedweb", "list", "dist", "--json"]);
        config.finalize(&cli, Path::new("/cwd"));
        assert_eq!(config.compress.level, 9);
        assert!(config.output.dir.is_none());
    }

    #[test]
    fn test_output_dir_defaults_to_dist() {
        let config = EmbedConfig {
            root: PathBuf::from("/project"),
            ..EmbedConfig::default()
        };
        assert_eq!(config.output_dir(Path::new("dist")), PathBuf::from("/project/dist"));
        assert_eq!(
            config.source_path(Path::new("/abs/dist")),
            PathBuf::from("/abs/dist/web_assets.cpp")
        );

        let options = config.scan_options(Path::new("/abs/dist"));
        assert_eq!(
            options.exclude,
            [
                PathBuf::from("/abs/dist/web_assets.h"),
                PathBuf::from("/abs/dist/web_assets.cpp")
            ]
        );
    }

    #[test]
    fn test_embed_options_from_config() {
        let config = test_parse_config(
            "[output]\nheader = \"assets.h\"\nline_ending = \"crlf\"\n[compress]\nlevel = 4\nparallel = false\n[codegen]\ntable_name = \"assets\"",
        );
        let options = config.embed_options();
        assert_eq!(options.level, 4);
        assert!(!options.parallel);
        assert_eq!(options.codegen.level, 4);
        assert_eq!(options.codegen.header_file, "assets.h");
        assert_eq!(options.codegen.table_name, "assets");
        assert_eq!(options.codegen.line_ending, LineEnding::Crlf);
    }
}
