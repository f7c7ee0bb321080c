//! Object key decoding and document id encoding.
//!
//! S3 notifications deliver keys form-encoded (`+` for space, `%XX` for everything else that
//! is not URL-safe). The search document id is the form-encoding of the decoded key, so a key
//! round-trips to exactly one path segment.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes left untouched in a document id. Space is handled separately and becomes `+`.
const DOCUMENT_ID: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

/// Decode an object key as delivered in a storage notification.
///
/// Invalid UTF-8 produced by the escapes is replaced with U+FFFD.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Encode a decoded object key into a single URL path segment.
pub fn encode_document_id(key: &str) -> String {
    utf8_percent_encode(key, DOCUMENT_ID)
        .to_string()
        .replace(' ', "+")
}
