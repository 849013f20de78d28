//! `[mime]` section configuration.
//!
//! Extension overrides layered over the built-in MIME table.
//!
//! # Example
//!
//! ```toml
//! [mime]
//! overrides = { bin = "application/octet-stream", js = "text/javascript" }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::mime::MimeTable;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MimeConfig {
    /// Extension (without dot) → MIME type.
    pub overrides: BTreeMap<String, String>,
}

impl MimeConfig {
    const OVERRIDES: FieldPath = FieldPath::new("mime.overrides");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (ext, mime) in &self.overrides {
            if ext.is_empty() || ext.starts_with('.') || ext.contains('/') {
                diag.error_with_hint(
                    Self::OVERRIDES,
                    format!("`{ext}` is not a file extension"),
                    "write extensions without the dot, e.g. `bin`",
                );
            }
            if mime.contains(|c: char| c.is_control()) {
                diag.error(
                    Self::OVERRIDES,
                    format!("MIME type for `{ext}` contains control characters"),
                );
            }
        }
    }

    /// Built-in table plus these overrides.
    pub fn table(&self) -> MimeTable {
        MimeTable::new().with_overrides(&self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::utils::mime::MimeRegistry;

    #[test]
    fn test_mime_overrides() {
        let config = test_parse_config("[mime]\noverrides = { bin = \"application/octet-stream\" }");
        assert!(config.validate().is_ok());
        let table = config.mime.table();
        assert_eq!(table.lookup("fw.bin"), Some("application/octet-stream"));
        assert_eq!(table.lookup("index.html"), Some("text/html"));
    }

    #[test]
    fn test_mime_bad_extension() {
        let config = test_parse_config("[mime]\noverrides = { \".bin\" = \"x/y\", \"\" = \"x/z\" }");
        assert_eq!(config.validate().unwrap_err().len(), 2);
    }
}
