//! C identifiers for compressed payload arrays.
//!
//! `asset<N>__<basename>` where every character of the basename outside
//! `[A-Za-z0-9]` becomes `_`. The ordinal keeps names unique even when two
//! basenames sanitize to the same text (`app.css` vs `app-css`).

/// Last `/`-separated segment of an output path.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Identifier for the asset at `ordinal` in input order.
pub fn identifier(ordinal: usize, output_path: &str) -> String {
    format!("asset{ordinal}__{}", sanitize(basename(output_path)))
}
