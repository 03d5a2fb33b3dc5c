//! Query-string construction.
//!
//! Names and values are percent-encoded with the `encodeURIComponent`
//! unreserved set: `A-Z a-z 0-9 - _ . ! ~ * ' ( )` pass through, every other
//! byte of the UTF-8 encoding becomes `%XX`. Spaces become `%20`, never `+`.

use std::fmt::Write;

/// One `name=value` pair. Order is preserved and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for QueryParam {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Percent-encode a single URL component.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Reverse [`encode_component`]. Malformed escapes are kept literally and
/// invalid UTF-8 is replaced.
pub fn decode_component(s: &str) -> String {
    fn hex(b: u8) -> Option<u8> {
        (b as char).to_digit(16).map(|d| d as u8)
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Append `params` to `url`, the first with `?` and the rest with `&`.
///
/// If `url` already has a query string every pair is joined with `&`.
pub fn append_query(url: &mut String, params: &[QueryParam]) {
    let mut has_query = url.contains('?');
    for param in params {
        url.push(if has_query { '&' } else { '?' });
        has_query = true;
        url.push_str(&encode_component(&param.name));
        url.push('=');
        url.push_str(&encode_component(&param.value));
    }
}
