//! Cross-origin isolation header set
//!
//! Browsers only grant `SharedArrayBuffer` and the other cross-origin-
//! isolated APIs when COOP/COEP carry these exact values, so the set is
//! stamped onto every response the server produces, whatever the status
//! code. The cache-busting trio keeps stale builds from pinning an old
//! worker script during development.

use hyper::header::{HeaderMap, HeaderValue};

/// Headers attached to every response, with the exact values browsers
/// string-match on.
pub const ISOLATION_HEADERS: [(&str, &str); 6] = [
    ("Cross-Origin-Opener-Policy", "same-origin"),
    ("Cross-Origin-Embedder-Policy", "require-corp"),
    ("Cross-Origin-Resource-Policy", "same-origin"),
    (
        "Cache-Control",
        "no-store, no-cache, must-revalidate, max-age=0",
    ),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// Stamp the isolation header set onto a response.
///
/// Existing values for these names are overwritten; whatever a handler set
/// earlier must not leak through.
pub fn apply(headers: &mut HeaderMap) {
    for (name, value) in ISOLATION_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}
