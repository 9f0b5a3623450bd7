//! Character encoding detection and transcoding.
//!
//! Page sources hand over raw bytes. Most patent pages are UTF-8, but
//! mirrored or archived copies of older pages declare legacy charsets in
//! their meta tags; those are decoded before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset="...">` and the `http-equiv` form
/// `content="text/html; charset=..."`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Detect the declared character encoding, defaulting to UTF-8.
///
/// A declared label is mapped to the encoding a document actually decodes
/// with, so a meta tag claiming UTF-16 yields UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes into a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors. A byte-order mark
/// takes precedence over any declared charset.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (decoded, _used, _had_errors) = detect_encoding(html).decode(html);
    decoded.into_owned()
}
