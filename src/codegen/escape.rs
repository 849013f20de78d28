//! C/C++ string literal escaping.
//!
//! Output is plain printable ASCII. Anything else is written as a 3-digit
//! octal escape, which is never extended by a following digit (unlike `\x`).

use std::fmt::Write;

/// Escape `s` for use between double quotes in C or C++ source.
pub fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut prev = 0u8;
    for &byte in s.as_bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            // `??x` is a trigraph for pre-C++17 compilers
            b'?' if prev == b'?' => out.push_str("\\?"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
        prev = byte;
    }
    out
}

/// Quoted literal: `"` + escaped + `"`.
pub fn c_string_literal(s: &str) -> String {
    format!("\"{}\"", escape_c_string(s))
}

/// Whether `name` is usable as a C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Decode a C string literal body, as a compiler would.
    pub(crate) fn unescape_c_string(s: &str) -> Vec<u8> {
        let bytes = s.as_bytes();
        let mut out = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'\\' {
                assert_ne!(bytes[i], b'"', "unescaped quote in {s:?}");
                out.push(bytes[i]);
                i += 1;
                continue;
            }
            let next = bytes[i + 1];
            match next {
                b'\\' | b'"' | b'?' | b'\'' => {
                    out.push(next);
                    i += 2;
                }
                b'n' => {
                    out.push(b'\n');
                    i += 2;
                }
                b'r' => {
                    out.push(b'\r');
                    i += 2;
                }
                b't' => {
                    out.push(b'\t');
                    i += 2;
                }
                b'0'..=b'7' => {
                    let digits = &s[i + 1..i + 4];
                    out.push(u8::from_str_radix(digits, 8).unwrap());
                    i += 4;
                }
                other => panic!("unknown escape \\{}", other as char),
            }
        }
        out
    }

    #[test]
    fn test_plain_ascii_untouched() {
        assert_eq!(escape_c_string("/index.html"), "/index.html");
        assert_eq!(escape_c_string("text/css"), "text/css");
    }

    #[test]
    fn test_backslash_and_quote() {
        assert_eq!(escape_c_string(r#"/a\"b.txt"#), r#"/a\\\"b.txt"#);
        assert_eq!(escape_c_string(r"\"), r"\\");
        assert_eq!(escape_c_string("\""), "\\\"");
    }

    #[test]
    fn test_control_and_non_ascii() {
        assert_eq!(escape_c_string("a\nb\tc\r"), "a\\nb\\tc\\r");
        assert_eq!(escape_c_string("\u{1}1"), "\\0011");
        assert_eq!(escape_c_string("é"), "\\303\\251");
    }

    #[test]
    fn test_trigraph_broken_up() {
        assert_eq!(escape_c_string("??="), "?\\?=");
        assert_eq!(escape_c_string("a?b"), "a?b");
    }

    #[test]
    fn test_round_trip() {
        for s in [
            r#"/a\"b.txt"#,
            "/plain.js",
            "/new\nline",
            "/ünïcødé/файл.svg",
            "/what??!.txt",
            "/\u{7f}\u{0}0",
        ] {
            assert_eq!(unescape_c_string(&escape_c_string(s)), s.as_bytes(), "{s:?}");
        }
    }

    #[test]
    fn test_literal_quotes() {
        assert_eq!(c_string_literal("/x"), "\"/x\"");
    }

    #[test]
    fn test_is_c_identifier() {
        assert!(is_c_identifier("WebAsset"));
        assert!(is_c_identifier("_web_assets2"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("2fast"));
        assert!(!is_c_identifier("web-assets"));
        assert!(!is_c_identifier("wéb"));
    }
}
