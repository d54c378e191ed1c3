//! Percent-encoding for identifiers interpolated into request paths.
//!
//! Identifiers come straight from the search field, so anything outside
//! the unreserved set is escaped. A `/` or `?` typed by the user must never
//! change which resource is requested.
//!
//! # Example
//!
//! ```
//! use pokedex_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("mr. mime"), "mr.%20mime");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for safe use as a single URL path segment.
///
/// # Examples
///
/// ```
/// use pokedex_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("pikachu"), "pikachu");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers_unchanged() {
        assert_eq!(encode_path_segment("pikachu"), "pikachu");
        assert_eq!(encode_path_segment("25"), "25");
        assert_eq!(encode_path_segment("ho-oh"), "ho-oh");
        assert_eq!(encode_path_segment("Farfetch'd"), "Farfetch'd");
    }

    #[test]
    fn test_space_and_slash_escaped() {
        assert_eq!(encode_path_segment("mr mime"), "mr%20mime");
        assert_eq!(encode_path_segment("../health"), "..%2Fhealth");
    }

    #[test]
    fn test_query_and_fragment_escaped() {
        assert_eq!(encode_path_segment("search?keyword=a"), "search%3Fkeyword%3Da");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
    }

    #[test]
    fn test_percent_is_double_encoded() {
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_unicode_encoded_as_utf8() {
        assert_eq!(encode_path_segment("flab\u{e9}b\u{e9}"), "flab%C3%A9b%C3%A9");
        assert_eq!(encode_path_segment("\u{2642}"), "%E2%99%82");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
