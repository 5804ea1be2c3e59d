//! Boundary conversion of free-text counts into strict integers.

use crate::error::{EngineError, Result};

/// Parses a count typed by a user into a `usize`.
///
/// Surrounding whitespace is ignored. Negative, fractional, and non-numeric
/// input is rejected so it never reaches graph-mutating code.
///
/// # Errors
/// Returns [`EngineError::InvalidCount`] naming `field` when `raw` is not a
/// non-negative integer.
///
/// # Examples
/// ```
/// use fiedler_core::{EngineError, parse_count};
///
/// assert_eq!(parse_count("nodes", " 12 ").expect("valid count"), 12);
/// assert!(matches!(
///     parse_count("edges", "-1"),
///     Err(EngineError::InvalidCount { field: "edges", .. })
/// ));
/// ```
pub fn parse_count(field: &'static str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| EngineError::InvalidCount {
            field,
            raw: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", 0)]
    #[case("17", 17)]
    #[case("  250\n", 250)]
    fn accepts_non_negative_integers(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(parse_count("nodes", raw).expect("count must parse"), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-3")]
    #[case("2.5")]
    #[case("ten")]
    #[case("99999999999999999999999999")]
    fn rejects_malformed_counts(#[case] raw: &str) {
        let err = parse_count("edges", raw).expect_err("count must be rejected");
        assert_eq!(
            err,
            EngineError::InvalidCount {
                field: "edges",
                raw: raw.to_owned(),
            }
        );
    }
}
