//! `[compress]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [compress]
//! level = 9          # gzip level, 1..=9
//! parallel = true    # compress assets on all cores
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::compress::MAX_LEVEL;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Payload compression settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressConfig {
    /// Gzip level. Firmware images want the smallest payloads, so the
    /// default is the maximum.
    pub level: u32,

    pub parallel: bool,
}

impl CompressConfig {
    const LEVEL: FieldPath = FieldPath::new("compress.level");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(1..=MAX_LEVEL).contains(&self.level) {
            diag.out_of_range(Self::LEVEL, self.level, 1..=MAX_LEVEL);
        }
    }
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            level: MAX_LEVEL,
            parallel: true,
        }
    }
}
