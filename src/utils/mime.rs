//! MIME type lookup for embedded assets.
//!
//! The registry is passed into the embedder rather than read from a global,
//! so tests can substitute a controlled table. Unknown extensions resolve to
//! `None`; the table records that as an empty MIME string.

use rustc_hash::FxHashMap;

/// Common MIME type constants.
///
/// Bare types without `charset` parameters: the firmware serves the string
/// verbatim as `Content-Type`.
pub mod types {
    // Text
    pub const HTML: &str = "text/html";
    pub const PLAIN: &str = "text/plain";
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "application/javascript";
    pub const JSON: &str = "application/json";
    pub const MANIFEST: &str = "application/manifest+json";
    pub const XML: &str = "application/xml";
    pub const CSV: &str = "text/csv";
    pub const MARKDOWN: &str = "text/markdown";

    // Binary
    pub const WASM: &str = "application/wasm";
    pub const GZIP: &str = "application/gzip";
    pub const ZIP: &str = "application/zip";
    pub const PDF: &str = "application/pdf";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
    pub const BMP: &str = "image/bmp";

    // Audio / video
    pub const MP3: &str = "audio/mpeg";
    pub const WAV: &str = "audio/wav";
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";

    // Fonts
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
    pub const EOT: &str = "application/vnd.ms-fontobject";
}

/// Extension → MIME type capability.
pub trait MimeRegistry: Sync {
    /// Look up the MIME type for an asset path, `None` if unknown.
    fn lookup(&self, path: &str) -> Option<&str>;
}

/// Built-in table for an extension (lowercase, without the dot).
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        "html" | "htm" => types::HTML,
        "css" => types::CSS,
        "js" | "mjs" | "cjs" => types::JAVASCRIPT,
        "json" | "map" => types::JSON,
        "webmanifest" => types::MANIFEST,
        "xml" => types::XML,
        "csv" => types::CSV,
        "txt" | "text" => types::PLAIN,
        "md" | "markdown" => types::MARKDOWN,

        "svg" => types::SVG,
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "avif" => types::AVIF,
        "ico" => types::ICO,
        "bmp" => types::BMP,

        "mp3" => types::MP3,
        "wav" => types::WAV,
        "mp4" | "m4v" => types::MP4,
        "webm" => types::WEBM,

        "woff" => types::WOFF,
        "woff2" => types::WOFF2,
        "ttf" => types::TTF,
        "otf" => types::OTF,
        "eot" => types::EOT,

        "wasm" => types::WASM,
        "gz" | "gzip" => types::GZIP,
        "zip" => types::ZIP,
        "pdf" => types::PDF,

        _ => return None,
    };
    Some(mime)
}

/// Extension of the last path segment, lowercased.
///
/// A leading dot does not start an extension: `.htaccess` has none, while
/// `.eslintrc.json` has `json`.
pub fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let stem = name.strip_prefix('.').unwrap_or(name);
    let (_, ext) = stem.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Built-in extension table layered under user overrides.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    overrides: FxHashMap<String, String>,
}

impl MimeTable {
    /// Table with only the built-in entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add overrides keyed by extension; keys are matched case-insensitively.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (ext, mime) in overrides {
            self.overrides
                .insert(ext.as_ref().to_ascii_lowercase(), mime.into());
        }
        self
    }
}

impl MimeRegistry for MimeTable {
    fn lookup(&self, path: &str) -> Option<&str> {
        let ext = extension_of(path)?;
        if let Some(mime) = self.overrides.get(&ext) {
            return Some(mime.as_str());
        }
        from_extension(&ext)
    }
}
