use std::str::FromStr;
use thiserror::Error;

/// Raised for malformed numeric tokens. Distinct from the graph error
/// taxonomy; the SCC detectors never catch or translate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parsing error for word '{token}'")]
    InvalidToken { token: String },
    #[error("separator must be non-empty")]
    EmptySeparator,
}

/// Parses a single numeric token, surrounding whitespace ignored.
pub fn parse_value<T: FromStr>(token: &str) -> Result<T, ParseError> {
    let trimmed = token.trim();
    trimmed.parse().map_err(|_| ParseError::InvalidToken {
        token: trimmed.to_string(),
    })
}

/// Splits one text line on `separator` and parses every token numerically.
///
/// Tokens are trimmed before conversion. A line that is blank after trimming
/// yields an empty sequence; any non-numeric token fails the whole line.
pub fn parse_sequence<T: FromStr>(line: &str, separator: &str) -> Result<Vec<T>, ParseError> {
    if separator.is_empty() {
        return Err(ParseError::EmptySeparator);
    }
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    line.split(separator).map(parse_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_with_a_multi_char_separator() {
        let out: Vec<i32> = parse_sequence("3 -- 6", "--").expect("parse");
        assert_eq!(out, vec![3, 6]);
    }

    #[test]
    fn parses_floats_with_a_space_separator() {
        let out: Vec<f64> = parse_sequence("1.2 2.34 3", " ").expect("parse");
        assert_eq!(out, vec![1.2, 2.34, 3.0]);
    }

    #[test]
    fn parses_a_single_value() {
        let w: f64 = parse_value("2.3").expect("parse");
        assert_eq!(w, 2.3);
    }

    #[test]
    fn blank_line_is_an_empty_sequence() {
        let out: Vec<usize> = parse_sequence("   ", " ").expect("parse");
        assert!(out.is_empty());
    }

    #[test]
    fn rejects_non_numeric_token_naming_the_word() {
        let err = parse_sequence::<usize>("1 x 3", " ").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_separator() {
        let err = parse_sequence::<usize>("1 2", "").unwrap_err();
        assert_eq!(err, ParseError::EmptySeparator);
    }

    #[test]
    fn rejects_negative_index_for_unsigned_target() {
        assert!(parse_value::<usize>("-1").is_err());
    }
}
