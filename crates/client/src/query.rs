//! Search query parsing.
//!
//! Turns the raw text of the search field into the ordered list of
//! identifiers to look up. Identifiers are passed through exactly as typed
//! (after trimming); no case normalization is applied.

use crate::error::ValidationError;

/// Separator between identifiers in a search query.
pub const IDENTIFIER_SEPARATOR: char = ',';

/// Split `raw` on commas, trim each token and drop the empty ones.
///
/// Order is preserved and duplicates are kept, so `"a, a"` yields two lookups.
///
/// # Errors
///
/// Returns [`ValidationError`] when no non-empty token remains.
pub fn parse_identifiers(raw: &str) -> Result<Vec<String>, ValidationError> {
    let identifiers: Vec<String> = raw
        .split(IDENTIFIER_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if identifiers.is_empty() {
        return Err(ValidationError);
    }

    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_single_identifier() {
        assert_eq!(parse_identifiers("pikachu").unwrap(), vec!["pikachu"]);
    }

    #[test]
    fn test_parse_trims_and_drops_empty_tokens() {
        assert_eq!(
            parse_identifiers(" pikachu , ,25,, bulbasaur ").unwrap(),
            vec!["pikachu", "25", "bulbasaur"]
        );
    }

    #[test]
    fn test_parse_keeps_case_and_duplicates() {
        assert_eq!(
            parse_identifiers("Pikachu,pikachu").unwrap(),
            vec!["Pikachu", "pikachu"]
        );
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        for raw in ["", "   ", ",", " , ,\t, "] {
            assert_eq!(parse_identifiers(raw), Err(ValidationError), "input {raw:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_matches_split_trim_filter(raw in "[a-z0-9 ,\t-]{0,40}") {
            let expected: Vec<String> = raw
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();

            match parse_identifiers(&raw) {
                Ok(ids) => prop_assert_eq!(ids, expected),
                Err(_) => prop_assert!(expected.is_empty()),
            }
        }

        #[test]
        fn prop_identifiers_never_blank_or_padded(raw in ".{0,60}") {
            if let Ok(ids) = parse_identifiers(&raw) {
                for id in ids {
                    prop_assert!(!id.is_empty());
                    prop_assert_eq!(id.trim(), id.as_str());
                    prop_assert!(!id.contains(','));
                }
            }
        }
    }
}
