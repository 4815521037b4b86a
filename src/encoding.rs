//! Character encoding detection and decoding of fetched bodies.
//!
//! The charset is taken from, in order: a byte-order mark, the HTTP
//! `Content-Type` header, `<meta charset>`, and
//! `<meta http-equiv="Content-Type">`. UTF-8 is the fallback.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Only the document head is scanned for meta declarations.
const META_SCAN_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*"?([^";\s]+)"?"#).expect("valid regex")
});

/// Detect the character encoding of an HTML body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(body) {
        return encoding;
    }

    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SCAN_LIMIT)]);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_META_RE]
        .iter()
        .filter_map(|re| capture_first(re, &head))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Extract the `charset` parameter from a `Content-Type` header value.
#[must_use]
pub fn header_charset(content_type: &str) -> Option<String> {
    capture_first(&HEADER_CHARSET_RE, content_type)
}

fn capture_first(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode an HTML body to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing, and a
/// leading byte-order mark is stripped.
///
/// # Examples
///
/// ```
/// use rs_readable::encoding::decode_html;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_html(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
