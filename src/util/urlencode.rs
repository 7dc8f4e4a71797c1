//! Percent-encoding for opaque URL parameter values.
//!
//! Matches the `encodeURIComponent` alphabet: ASCII letters, digits, and
//! `- _ . ! ~ * ' ( )` pass through; everything else is emitted as UTF-8
//! `%XX` escapes.

#[cfg(test)]
#[path = "urlencode_test.rs"]
mod urlencode_test;

use std::fmt::Write as _;

/// Encode `value` for use as a single URL parameter value.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
