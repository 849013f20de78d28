//! C++ source generation for the asset table.
//!
//! Two artifacts are produced from one [`AssetTable`]:
//!
//! | Generator         | Artifact         | Contents                                    |
//! |-------------------|------------------|---------------------------------------------|
//! | [`HeaderGenerator`] | `web_assets.h`   | record type, path comparator, extern decls |
//! | [`BodyGenerator`]   | `web_assets.cpp` | payload arrays, sorted table, count        |
//!
//! Generators build text with `\n`; [`LineEnding::Crlf`] is applied once at
//! the end. Payloads and strings never contain raw newlines, so the
//! conversion cannot alter data.

mod body;
mod escape;
mod header;

pub use body::BodyGenerator;
pub use escape::{c_string_literal, escape_c_string, is_c_identifier};
pub use header::HeaderGenerator;

#[cfg(test)]
pub(crate) use escape::tests::unescape_c_string;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::asset::AssetTable;

/// First line of every generated file.
pub const BANNER: &str = "// This file was autogenerated by embedweb. Do not edit.";

/// Line terminator for generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    /// Convert `\n`-terminated text to this line ending.
    pub fn apply(self, text: String) -> String {
        match self {
            Self::Lf => text,
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Names and layout of the generated C++.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// File name the body uses to include the header.
    pub header_file: String,
    pub record_type: String,
    pub compare_type: String,
    pub table_name: String,
    pub count_name: String,
    /// Type of the path field; must support `operator<` with ordinal semantics.
    pub string_type: String,
    /// Header declaring `string_type`; empty for none.
    pub string_include: String,
    /// Placement attribute on payload arrays; empty for none.
    pub data_attribute: String,
    pub bytes_per_line: usize,
    pub line_ending: LineEnding,
    /// Gzip level, recorded in the banner.
    pub level: u32,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            header_file: "web_assets.h".into(),
            record_type: "WebAsset".into(),
            compare_type: "WebAssetPathCompare".into(),
            table_name: "webAssets".into(),
            count_name: "webAssetsCount".into(),
            string_type: "String".into(),
            string_include: "WString.h".into(),
            data_attribute: "ICACHE_RODATA_ATTR".into(),
            bytes_per_line: 32,
            line_ending: LineEnding::Lf,
            level: crate::asset::compress::MAX_LEVEL,
        }
    }
}

impl CodegenOptions {
    /// Second banner line: the decompression contract.
    pub fn compression_note(&self) -> String {
        format!(
            "// Asset data is {}-compressed (level {}); decompress before serving.",
            crate::asset::compress::ALGORITHM,
            self.level
        )
    }
}

/// The two generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedSources {
    pub header: String,
    pub body: String,
}

/// Render both artifacts for `table`.
pub fn render(table: &AssetTable, options: &CodegenOptions) -> EmbeddedSources {
    let header = HeaderGenerator::new(options).generate();
    let body = BodyGenerator::new(table, options).generate();
    EmbeddedSources {
        header: options.line_ending.apply(header),
        body: options.line_ending.apply(body),
    }
}
