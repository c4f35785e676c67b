//! Tolerant line tokenizer.
//!
//! A line is split on runs of separator characters. Space, comma and newline
//! are interchangeable and consecutive separators collapse, so `"a, b , c"`
//! and `"a b c"` both yield three tokens. Empty fields cannot be expressed.
//!
//! Tokens are converted to a target type through the [`Field`] trait: the
//! header keeps them as text, data rows convert them to `f64`.

use crate::error::{ParseError, ParseErrorKind};

/// Characters that separate tokens.
pub const SEPARATORS: [char; 3] = [' ', ',', '\n'];

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Split a line into its non-empty tokens, in order.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|token| !token.is_empty())
}

/// A value that can be read from a single token.
pub trait Field: Sized {
    /// Convert one token.
    fn from_token(token: &str) -> Result<Self, ParseErrorKind>;
}

impl Field for String {
    fn from_token(token: &str) -> Result<Self, ParseErrorKind> {
        Ok(token.to_string())
    }
}

impl Field for f64 {
    fn from_token(token: &str) -> Result<Self, ParseErrorKind> {
        token
            .parse()
            .map_err(|reason| ParseErrorKind::InvalidNumber {
                token: token.to_string(),
                reason,
            })
    }
}

/// Tokenize a header line into column names.
pub fn parse_header(line: &str) -> Vec<String> {
    tokens(line).map(str::to_string).collect()
}

/// Tokenize a line and convert every token to `T`.
///
/// Stops at the first token that fails to convert and reports its 1-based
/// column.
pub fn parse_fields<T: Field>(line: &str) -> Result<Vec<T>, ParseError> {
    tokens(line)
        .enumerate()
        .map(|(idx, token)| {
            T::from_token(token).map_err(|kind| ParseError {
                column: idx + 1,
                kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_mixed_separators() {
        let a: Vec<&str> = tokens("a, b , c").collect();
        let b: Vec<&str> = tokens("a b c").collect();

        assert_eq!(a, vec!["a", "b", "c"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tokens_collapse_runs() {
        let toks: Vec<&str> = tokens(",,  x,,,y \n z,").collect();
        assert_eq!(toks, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_tokens_empty_and_blank() {
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens(" , ,\n").count(), 0);
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        let toks: Vec<&str> = tokens("a\tb c").collect();
        assert_eq!(toks, vec!["a\tb", "c"]);
    }

    #[test]
    fn test_parse_header_fields() {
        let header: Vec<String> = parse_fields("name,value  weight").unwrap();
        assert_eq!(header, vec!["name", "value", "weight"]);
    }

    #[test]
    fn test_parse_header_matches_generic_parse() {
        let line = " id, mass ,,speed ";
        let generic: Vec<String> = parse_fields(line).unwrap();

        assert_eq!(parse_header(line), generic);
        assert!(parse_header(" ,\n").is_empty());
    }

    #[test]
    fn test_parse_numeric_fields() {
        let row: Vec<f64> = parse_fields("1, -2.5,3e2 .5").unwrap();
        assert_eq!(row, vec![1.0, -2.5, 300.0, 0.5]);
    }

    #[test]
    fn test_parse_numeric_reports_column() {
        let err = parse_fields::<f64>("1 abc 3").unwrap_err();

        assert_eq!(err.column, 2);
        match &err.kind {
            ParseErrorKind::InvalidNumber { token, .. } => assert_eq!(token, "abc"),
        }
        assert!(err.to_string().starts_with("column 2: invalid number 'abc'"));
    }

    #[test]
    fn test_parse_numeric_rejects_trailing_garbage() {
        let err = parse_fields::<f64>("1.5abc").unwrap_err();
        assert_eq!(err.column, 1);
    }

    #[test]
    fn test_parse_first_failure_wins() {
        let err = parse_fields::<f64>("x y").unwrap_err();
        assert_eq!(err.column, 1);
    }
}
