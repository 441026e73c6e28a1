//! Encoding of stored URLs for the `Location` header.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped in a redirect target, on top of controls and non-ASCII.
///
/// Reserved characters and `%` pass through, so URLs that are already
/// escaped are left as they are.
const LOCATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes `url` so it is a valid header value.
///
/// ```
/// use shorturl::utils::location::encode_location;
///
/// assert_eq!(encode_location("https://example.com/a b"), "https://example.com/a%20b");
/// ```
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION).to_string()
}
