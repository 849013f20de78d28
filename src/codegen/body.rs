//! Body generator: payload arrays, the sorted table and its count.

use std::fmt::Write;

use super::{BANNER, CodegenOptions, c_string_literal, escape_c_string};
use crate::asset::{AssetTable, CompiledAssetRecord};

/// Generator for the table definition file.
pub struct BodyGenerator<'a> {
    table: &'a AssetTable,
    options: &'a CodegenOptions,
}

impl<'a> BodyGenerator<'a> {
    pub fn new(table: &'a AssetTable, options: &'a CodegenOptions) -> Self {
        Self { table, options }
    }

    /// Generate the complete body source
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(BANNER);
        output.push('\n');
        output.push_str(&self.options.compression_note());
        output.push_str("\n\n");

        let _ = writeln!(
            output,
            "// includes\n#include \"{}\"\n",
            escape_c_string(&self.options.header_file)
        );

        output.push_str("// embedded asset data\n");
        for record in self.table.iter() {
            output.push_str(&self.generate_payload(record));
        }
        output.push('\n');

        output.push_str(&self.generate_table());
        output
    }

    /// `static <attr> const uint8_t <identifier>[] = { ... };`
    fn generate_payload(&self, record: &CompiledAssetRecord) -> String {
        let mut output = String::from("static ");
        if !self.options.data_attribute.is_empty() {
            output.push_str(&self.options.data_attribute);
            output.push(' ');
        }
        let _ = writeln!(output, "const uint8_t {}[] = {{", record.identifier);

        let per_line = self.options.bytes_per_line.max(1);
        for chunk in record.payload.chunks(per_line) {
            output.push_str("    ");
            for byte in chunk {
                let _ = write!(output, "{byte},");
            }
            output.push('\n');
        }
        output.push_str("};\n");
        output
    }

    fn generate_table(&self) -> String {
        let o = self.options;
        let mut output = String::from("// list of compiled assets (sorted by path)\n");

        if self.table.is_empty() {
            // C++ has no zero-length arrays; the count keeps lookups off it.
            let _ = writeln!(output, "const {} {}[1] = {{}};", o.record_type, o.table_name);
        } else {
            let _ = writeln!(output, "const {} {}[] = {{", o.record_type, o.table_name);
            for record in self.table.iter() {
                let _ = writeln!(
                    output,
                    "    {{{}, {}, {}, {}}},",
                    c_string_literal(&record.served_path),
                    c_string_literal(&record.mime_type),
                    record.compressed_len(),
                    record.identifier,
                );
            }
            output.push_str("};\n");
        }

        let _ = writeln!(
            output,
            "const size_t {} = {};",
            o.count_name,
            self.table.len()
        );
        output
    }
}
