//! `[scan]` section configuration.
//!
//! ```toml
//! [scan]
//! include_hidden = false   # embed dotfiles (.well-known/, .htaccess)
//! ```

use serde::{Deserialize, Serialize};

/// Asset directory enumeration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub include_hidden: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_scan_config() {
        assert!(!test_parse_config("").scan.include_hidden);
        assert!(test_parse_config("[scan]\ninclude_hidden = true").scan.include_hidden);
    }
}
