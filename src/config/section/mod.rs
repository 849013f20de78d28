//! Configuration section definitions.
//!
//! Each module corresponds to a section in `embedweb.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `output`   | `[output]`     | Artifact directory, names, newlines   |
//! | `compress` | `[compress]`   | Gzip level, parallelism               |
//! | `codegen`  | `[codegen]`    | C++ type and symbol names             |
//! | `scan`     | `[scan]`       | Asset directory enumeration           |
//! | `mime`     | `[mime]`       | MIME type overrides                   |

mod codegen;
mod compress;
mod mime;
mod output;
mod scan;

pub use codegen::CodegenConfig;
pub use compress::CompressConfig;
pub use mime::MimeConfig;
pub use output::OutputConfig;
pub use scan::ScanConfig;
