//! Errors raised while turning raw assets into a table.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure that aborts the whole embed; no partial table is ever emitted.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("failed to read asset `{path}`")]
    InputRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to gzip asset `{path}`")]
    Compress {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("asset path `{path}` appears more than once")]
    DuplicatePath { path: String },

    #[error("identifier `{identifier}` generated for both `{first}` and `{second}`")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

impl EmbedError {
    /// The output path of the asset that caused the failure.
    pub fn path(&self) -> &str {
        match self {
            Self::InputRead { path, .. }
            | Self::Compress { path, .. }
            | Self::DuplicatePath { path } => path,
            Self::IdentifierCollision { second, .. } => second,
        }
    }
}

/// Errors from enumerating a bundler output directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("asset directory `{0}` does not exist")]
    MissingRoot(PathBuf),

    #[error("failed to walk `{path}`")]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("asset path `{0}` is not valid UTF-8")]
    NonUtf8(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_offending_path() {
        let err = EmbedError::InputRead {
            path: "js/app.js".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("js/app.js"));
        assert_eq!(err.path(), "js/app.js");

        let err = EmbedError::IdentifierCollision {
            identifier: "asset0__a".into(),
            first: "a".into(),
            second: "x/a".into(),
        };
        assert_eq!(err.path(), "x/a");
        assert!(err.to_string().contains("asset0__a"));
    }
}
