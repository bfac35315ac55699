//! URI component encoding for activity names and emails.
//!
//! Matches the browser's `encodeURIComponent`: everything except ASCII
//! alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded as UTF-8.

#[cfg(test)]
#[path = "uri_test.rs"]
mod uri_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}
