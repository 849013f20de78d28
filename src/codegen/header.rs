//! Header generator: declarations shared by firmware and the body file.

use super::{BANNER, CodegenOptions, escape_c_string};

/// Generator for the table header.
pub struct HeaderGenerator<'a> {
    options: &'a CodegenOptions,
}

impl<'a> HeaderGenerator<'a> {
    pub fn new(options: &'a CodegenOptions) -> Self {
        Self { options }
    }

    /// Generate the complete header source
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(BANNER);
        output.push('\n');
        output.push_str(&self.options.compression_note());
        output.push_str("\n\n#pragma once\n\n");

        output.push_str(&self.generate_includes());
        output.push('\n');
        output.push_str(&self.generate_record());
        output.push('\n');
        output.push_str(&self.generate_compare());
        output.push('\n');
        output.push_str(&self.generate_externs());

        output
    }

    fn generate_includes(&self) -> String {
        let mut output = String::from("// includes\n#include <cstddef>\n#include <cstdint>\n");
        if !self.options.string_include.is_empty() {
            output.push_str(&format!(
                "#include \"{}\"\n",
                escape_c_string(&self.options.string_include)
            ));
        }
        output
    }

    fn generate_record(&self) -> String {
        let o = self.options;
        format!(
            "/// compiled web asset
struct {record} {{
    {string} path;          ///< URL path (/index.html)
    const char* mimeType;   ///< associated mime type (\"\" if unknown)
    size_t length;          ///< compressed data length (in bytes)
    const uint8_t* data;    ///< compressed asset data
}};
",
            record = o.record_type,
            string = o.string_type,
        )
    }

    /// Comparator for `std::lower_bound` / `std::equal_range` over the table.
    fn generate_compare(&self) -> String {
        let o = self.options;
        format!(
            "/// path comparison (ordinal, matches table order)
struct {compare} {{
    bool operator()(const {string}& lhs, const {record}& rhs) const {{
        return lhs < rhs.path;
    }}
    bool operator()(const {record}& lhs, const {string}& rhs) const {{
        return lhs.path < rhs;
    }}
}};
",
            compare = o.compare_type,
            record = o.record_type,
            string = o.string_type,
        )
    }

    fn generate_externs(&self) -> String {
        let o = self.options;
        format!(
            "extern const {record} {table}[];  ///< compiled assets, sorted by path
extern const size_t {count};  ///< entries in {table}
",
            record = o.record_type,
            table = o.table_name,
            count = o.count_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        let header = HeaderGenerator::new(&CodegenOptions::default()).generate();

        assert!(header.starts_with(BANNER));
        assert!(header.contains("gzip"));
        assert!(header.contains("#pragma once"));
        assert!(header.contains("#include <cstddef>"));
        assert!(header.contains("#include <cstdint>"));
        assert!(header.contains("#include \"WString.h\""));
        assert!(header.contains("struct WebAsset {"));
        assert!(header.contains("    String path;"));
        assert!(header.contains("struct WebAssetPathCompare {"));
        assert!(header.contains("bool operator()(const String& lhs, const WebAsset& rhs) const"));
        assert!(header.contains("bool operator()(const WebAsset& lhs, const String& rhs) const"));
        assert!(header.contains("extern const WebAsset webAssets[];"));
        assert!(header.contains("extern const size_t webAssetsCount;"));
    }

    #[test]
    fn test_custom_names() {
        let options = CodegenOptions {
            record_type: "Blob".into(),
            compare_type: "BlobLess".into(),
            table_name: "blobs".into(),
            count_name: "blobCount".into(),
            string_type: "std::string".into(),
            string_include: "string".into(),
            ..CodegenOptions::default()
        };
        let header = HeaderGenerator::new(&options).generate();

        assert!(header.contains("#include \"string\""));
        assert!(header.contains("struct Blob {"));
        assert!(header.contains("    std::string path;"));
        assert!(header.contains("struct BlobLess {"));
        assert!(header.contains("extern const Blob blobs[];"));
        assert!(header.contains("extern const size_t blobCount;"));
        assert!(!header.contains("WebAsset"));
    }

    #[test]
    fn test_no_string_include() {
        let options = CodegenOptions {
            string_include: String::new(),
            ..CodegenOptions::default()
        };
        let header = HeaderGenerator::new(&options).generate();
        assert!(!header.contains("WString.h"));
        assert_eq!(header.matches("#include").count(), 2);
    }

    #[test]
    fn test_header_independent_of_table() {
        let a = HeaderGenerator::new(&CodegenOptions::default()).generate();
        let b = HeaderGenerator::new(&CodegenOptions::default()).generate();
        assert_eq!(a, b);
    }
}
