//! Errors from loading and validating `embedweb.toml`.
//!
//! Every error names the config file it came from. Validation problems are
//! collected into [`ConfigDiagnostics`] so one run reports all of them.

use super::FieldPath;
use crate::utils::fmt::plural_count;
use owo_colors::OwoColorize;
use std::fmt;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is not valid TOML", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Diagnostics go in the message; as a source they would print twice
    #[error("invalid configuration ({}): {diagnostics}", origin(.path))]
    Invalid {
        path: Option<PathBuf>,
        diagnostics: ConfigDiagnostics,
    },
}

impl ConfigError {
    /// The config file involved, `None` when running on defaults.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::Invalid { path, .. } => path.as_deref(),
        }
    }
}

fn origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "defaults and command-line flags".into(),
    }
}

/// One problem with one config key.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field.as_str().cyan(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({} {hint})", "hint:".yellow())?;
        }
        Ok(())
    }
}

/// Problems found while validating the config sections.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    /// A generated C++ symbol that the compiler would reject.
    pub fn invalid_identifier(&mut self, field: FieldPath, name: &str) {
        self.error_with_hint(
            field,
            format!("`{name}` is not a valid C identifier"),
            "use ASCII letters, digits and `_`, not starting with a digit",
        );
    }

    /// A numeric setting outside its accepted range.
    pub fn out_of_range(&mut self, field: FieldPath, value: u32, range: RangeInclusive<u32>) {
        self.error(
            field,
            format!(
                "must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        );
    }

    /// An artifact name that cannot be written next to its sibling or
    /// placed inside `#include "..."`.
    pub fn invalid_file_name(&mut self, field: FieldPath, name: &str, reason: &str) {
        self.error_with_hint(
            field,
            format!("`{}` {reason}", name.escape_debug()),
            "use a bare name such as `web_assets.h`",
        );
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message,
            hint,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", plural_count(self.errors.len(), "problem"))?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: FieldPath = FieldPath::new("compress.level");
    const TABLE: FieldPath = FieldPath::new("codegen.table_name");

    #[test]
    fn test_read_error_names_file() {
        let err = ConfigError::Read {
            path: PathBuf::from("fw/embedweb.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("fw/embedweb.toml"));
        assert_eq!(err.path(), Some(Path::new("fw/embedweb.toml")));
    }

    #[test]
    fn test_invalid_names_file_and_every_problem() {
        let mut diagnostics = ConfigDiagnostics::new();
        diagnostics.out_of_range(LEVEL, 12, 1..=9);
        diagnostics.invalid_identifier(TABLE, "web-assets");

        let err = ConfigError::Invalid {
            path: Some(PathBuf::from("/fw/embedweb.toml")),
            diagnostics,
        };
        let text = err.to_string();
        assert!(text.contains("/fw/embedweb.toml"));
        assert!(text.contains("2 problems"));
        assert!(text.contains("must be between 1 and 9, got 12"));
        assert!(text.contains("`web-assets` is not a valid C identifier"));
    }

    #[test]
    fn test_invalid_without_file() {
        let err = ConfigError::Invalid {
            path: None,
            diagnostics: ConfigDiagnostics::new(),
        };
        assert_eq!(err.path(), None);
        assert!(err.to_string().contains("defaults"));
    }

    #[test]
    fn test_diagnostic_constructors() {
        let mut diag = ConfigDiagnostics::new();
        assert!(!diag.has_errors());

        diag.invalid_identifier(TABLE, "1table");
        diag.invalid_file_name(FieldPath::new("output.header"), "a\".h", "contains a quote");
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, TABLE);
        assert!(diag.errors()[0].hint.as_deref().unwrap().contains("ASCII letters"));
        assert_eq!(diag.errors()[1].message, "`a\\\".h` contains a quote");
        assert!(diag.into_result().is_err());
    }
}
