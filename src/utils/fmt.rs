//! Human-readable formatting for build summaries.

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "asset")` -> `"0 assets"`
/// - `plural_count(1, "asset")` -> `"1 asset"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

/// Format a byte count with a binary unit (`512 B`, `1.5 KiB`, `2.0 MiB`).
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Compressed size as a percentage of the original (`0` for empty input).
pub fn ratio_percent(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    compressed as f64 * 100.0 / original as f64
}
