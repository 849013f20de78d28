//! Shared helpers: MIME lookup, content hashing, display formatting.

pub mod fmt;
pub mod hash;
pub mod mime;
