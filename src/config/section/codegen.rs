//! `[codegen]` section configuration.
//!
//! Names used in the generated C++. Defaults match an ESP8266 Arduino
//! project: Arduino `String` paths and payloads placed in flash.
//!
//! # Example
//!
//! ```toml
//! [codegen]
//! record_type = "WebAsset"
//! compare_type = "WebAssetPathCompare"
//! table_name = "webAssets"
//! count_name = "webAssetsCount"
//! string_type = "String"
//! string_include = "WString.h"
//! data_attribute = "ICACHE_RODATA_ATTR"   # "" for none
//! bytes_per_line = 32
//! ```

use serde::{Deserialize, Serialize};

use crate::codegen::{CodegenOptions, is_c_identifier};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub record_type: String,
    pub compare_type: String,
    pub table_name: String,
    pub count_name: String,

    /// Path field type. Its `operator<` must compare bytes (`strcmp`
    /// order), or binary search disagrees with the table order.
    pub string_type: String,
    pub string_include: String,

    /// Attribute placed before `const uint8_t` on payload arrays.
    pub data_attribute: String,

    pub bytes_per_line: usize,
}

impl CodegenConfig {
    const RECORD_TYPE: FieldPath = FieldPath::new("codegen.record_type");
    const COMPARE_TYPE: FieldPath = FieldPath::new("codegen.compare_type");
    const TABLE_NAME: FieldPath = FieldPath::new("codegen.table_name");
    const COUNT_NAME: FieldPath = FieldPath::new("codegen.count_name");
    const STRING_TYPE: FieldPath = FieldPath::new("codegen.string_type");
    const STRING_INCLUDE: FieldPath = FieldPath::new("codegen.string_include");
    const DATA_ATTRIBUTE: FieldPath = FieldPath::new("codegen.data_attribute");
    const BYTES_PER_LINE: FieldPath = FieldPath::new("codegen.bytes_per_line");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let identifiers = [
            (Self::RECORD_TYPE, &self.record_type),
            (Self::COMPARE_TYPE, &self.compare_type),
            (Self::TABLE_NAME, &self.table_name),
            (Self::COUNT_NAME, &self.count_name),
        ];
        for (field, name) in identifiers {
            if !is_c_identifier(name) {
                diag.invalid_identifier(field, name);
            }
        }

        // Qualified names (`std::string`) are fine here
        if self.string_type.is_empty()
            || !self
                .string_type
                .split("::")
                .all(|part| part.is_empty() || is_c_identifier(part))
        {
            diag.error(
                Self::STRING_TYPE,
                format!("`{}` is not a C++ type name", self.string_type),
            );
        }

        if self.string_include.contains(|c: char| c == '"' || c.is_control()) {
            diag.error(
                Self::STRING_INCLUDE,
                "include name must not contain quotes or control characters",
            );
        }

        if self.data_attribute.contains(['\n', '\r', ';', '{', '}']) {
            diag.error(
                Self::DATA_ATTRIBUTE,
                format!("`{}` cannot be used as an attribute", self.data_attribute.escape_debug()),
            );
        }

        if self.bytes_per_line == 0 {
            diag.error(Self::BYTES_PER_LINE, "must be at least 1");
        }
    }

    /// Fill the naming part of [`CodegenOptions`].
    pub fn apply_to(&self, options: &mut CodegenOptions) {
        options.record_type = self.record_type.clone();
        options.compare_type = self.compare_type.clone();
        options.table_name = self.table_name.clone();
        options.count_name = self.count_name.clone();
        options.string_type = self.string_type.clone();
        options.string_include = self.string_include.clone();
        options.data_attribute = self.data_attribute.clone();
        options.bytes_per_line = self.bytes_per_line;
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        let defaults = CodegenOptions::default();
        Self {
            record_type: defaults.record_type,
            compare_type: defaults.compare_type,
            table_name: defaults.table_name,
            count_name: defaults.count_name,
            string_type: defaults.string_type,
            string_include: defaults.string_include,
            data_attribute: defaults.data_attribute,
            bytes_per_line: defaults.bytes_per_line,
        }
    }
}
