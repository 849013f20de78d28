//! `[output]` section configuration.
//!
//! Where the generated artifacts go and how they are laid out on disk.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "firmware/src"       # default: the scanned asset directory
//! header = "web_assets.h"
//! source = "web_assets.cpp"
//! line_ending = "crlf"       # "lf" (default) or "crlf"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codegen::LineEnding;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Generated artifact locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Artifact directory, relative to the config file.
    /// `None` writes next to the assets, like a bundler plugin would.
    pub dir: Option<PathBuf>,

    /// Header file name (also the body's `#include`).
    pub header: String,

    /// Body file name.
    pub source: String,

    pub line_ending: LineEnding,
}

impl OutputConfig {
    const HEADER: FieldPath = FieldPath::new("output.header");
    const SOURCE: FieldPath = FieldPath::new("output.source");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, name) in [(Self::HEADER, &self.header), (Self::SOURCE, &self.source)] {
            if let Err(reason) = check_file_name(name) {
                diag.invalid_file_name(field, name, reason);
            }
        }
        if self.header == self.source {
            diag.error_with_hint(
                Self::SOURCE,
                format!("header and source are both named `{}`", self.source),
                "use e.g. `web_assets.h` and `web_assets.cpp`",
            );
        }
    }
}

/// A bare file name that can also appear inside `#include "..."`.
fn check_file_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("is empty");
    }
    if name.contains(['/', '\\']) {
        return Err("is a path, not a file name");
    }
    if name.contains(|c: char| c == '"' || c.is_control()) {
        return Err("contains characters not allowed in #include");
    }
    Ok(())
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            header: "web_assets.h".into(),
            source: "web_assets.cpp".into(),
            line_ending: LineEnding::Lf,
        }
    }
}
