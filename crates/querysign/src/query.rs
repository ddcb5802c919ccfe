//! Raw query-string parsing.
//!
//! The core API operates on a decoded parameter map; this helper turns a
//! raw query string into one for callers that hold the wire form.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Parse a raw query string into a decoded parameter map.
///
/// Pairs are split on `&`, keys from values on the first `=` (a pair
/// without `=` maps to an empty value), and both halves are
/// percent-decoded (lossy UTF-8). When a key repeats, the last
/// occurrence wins.
///
/// # Examples
///
/// ```
/// use querysign::query::parse_query;
///
/// let params = parse_query("key=abc&q=hello%20world");
/// assert_eq!(params["key"], "abc");
/// assert_eq!(params["q"], "hello world");
/// ```
#[must_use]
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (url_decode(key), url_decode(value))
        })
        .collect()
}

/// Perform basic percent-decoding of a URL-encoded string.
fn url_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
