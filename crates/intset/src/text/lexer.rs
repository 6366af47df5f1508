//! Grammar checks for the textual intset form.
//!
//! Accepted grammar once whitespace is removed:
//!
//! ```text
//! set  = "{" [ elem { "," elem } ] "}"
//! elem = digit { digit }
//! ```
//!
//! Negative numbers and decimals are not part of the grammar.

use crate::error::{ParseError, ParseErrorKind};
use crate::text::ParseOptions;

/// Checks `input` against the grammar with default limits.
pub fn validate(input: &str) -> Result<(), ParseError> {
    validate_with_options(input, &ParseOptions::default())
}

/// Checks `input` against the grammar.
pub fn validate_with_options(input: &str, options: &ParseOptions) -> Result<(), ParseError> {
    scan(input, options)
        .map(|_| ())
        .map_err(|kind| ParseError::new(kind, input))
}

/// Validates `input` and returns it with all whitespace removed.
///
/// Checks run in a fixed order: length, then a character scan (first
/// invalid character or doubled comma wins), then braces, then the
/// element boundaries, then whitespace-split numerals.
pub(crate) fn scan(input: &str, options: &ParseOptions) -> Result<String, ParseErrorKind> {
    if input.len() > options.max_input_len {
        return Err(ParseErrorKind::TooLong {
            len: input.len(),
            max: options.max_input_len,
        });
    }

    let mut stripped = String::with_capacity(input.len());
    let mut open = 0usize;
    let mut close = 0usize;
    let mut split_numeral = false;
    // Last significant char, and whether whitespace followed it.
    let mut prev: Option<char> = None;
    let mut gap = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            gap = true;
            continue;
        }
        match ch {
            '{' => open += 1,
            '}' => close += 1,
            ',' => {
                if prev == Some(',') {
                    return Err(ParseErrorKind::EmptyElement);
                }
            }
            '0'..='9' => {
                if gap && prev.is_some_and(|p| p.is_ascii_digit()) {
                    split_numeral = true;
                }
            }
            _ => return Err(ParseErrorKind::InvalidCharacter { ch }),
        }
        stripped.push(ch);
        prev = Some(ch);
        gap = false;
    }

    if open != 1 || close != 1 {
        return Err(ParseErrorKind::Structural {
            reason: "expected exactly one '{' and one '}'",
        });
    }
    if !stripped.starts_with('{') || !stripped.ends_with('}') {
        return Err(ParseErrorKind::Structural {
            reason: "set must start with '{' and end with '}'",
        });
    }

    let body = body(&stripped);
    if !body.is_empty() {
        let bytes = body.as_bytes();
        if !bytes[0].is_ascii_digit() || !bytes[bytes.len() - 1].is_ascii_digit() {
            return Err(ParseErrorKind::EmptyElement);
        }
    }

    if split_numeral {
        return Err(ParseErrorKind::AmbiguousCompactForm);
    }

    Ok(stripped)
}

/// Returns the text between the braces of a validated, stripped input.
pub(crate) fn body(stripped: &str) -> &str {
    &stripped[1..stripped.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(input: &str) -> ParseErrorKind {
        validate(input).unwrap_err().kind
    }

    #[test]
    fn test_valid_inputs() {
        for input in ["{}", "{ }", "{1}", "{12}", "{ 12 }", "{1,2,3}", " { 3 , 1,2 } ", "{0,007}"] {
            assert!(validate(input).is_ok(), "expected {:?} to be valid", input);
        }
    }

    #[test]
    fn test_structural() {
        for input in ["", "{", "}", "1,2", "{{1}", "{1}}", "}1{", "{1}2", "1{2}"] {
            assert!(
                matches!(kind(input), ParseErrorKind::Structural { .. }),
                "expected structural error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(kind("{1,a,2}"), ParseErrorKind::InvalidCharacter { ch: 'a' });
        assert_eq!(kind("{-1}"), ParseErrorKind::InvalidCharacter { ch: '-' });
        assert_eq!(kind("{1.5}"), ParseErrorKind::InvalidCharacter { ch: '.' });
        assert_eq!(kind("[1,2]"), ParseErrorKind::InvalidCharacter { ch: '[' });
        assert_eq!(kind("{(1)}"), ParseErrorKind::InvalidCharacter { ch: '(' });
        assert_eq!(kind("{+1}"), ParseErrorKind::InvalidCharacter { ch: '+' });
        assert_eq!(kind("{1;2}"), ParseErrorKind::InvalidCharacter { ch: ';' });
    }

    #[test]
    fn test_invalid_character_reported_before_structure() {
        assert_eq!(kind("x"), ParseErrorKind::InvalidCharacter { ch: 'x' });
    }

    #[test]
    fn test_empty_elements() {
        for input in ["{1,,2}", "{1, ,2}", "{,1}", "{1,}", "{,}", "{,,}"] {
            assert_eq!(kind(input), ParseErrorKind::EmptyElement, "input {:?}", input);
        }
    }

    #[test]
    fn test_split_numeral_is_ambiguous() {
        assert_eq!(kind("{1 2}"), ParseErrorKind::AmbiguousCompactForm);
        assert_eq!(kind("{1,2 3}"), ParseErrorKind::AmbiguousCompactForm);
        assert_eq!(kind("{12\t34}"), ParseErrorKind::AmbiguousCompactForm);
    }

    #[test]
    fn test_too_long() {
        let options = ParseOptions::default().with_max_input_len(4);
        let err = validate_with_options("{1,2}", &options).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TooLong { len: 5, max: 4 });
        assert_eq!(err.input, "{1,2}");
    }

    #[test]
    fn test_scan_strips_whitespace() {
        let stripped = scan(" {1 ,\n2} ", &ParseOptions::default()).unwrap();
        assert_eq!(stripped, "{1,2}");
        assert_eq!(body(&stripped), "1,2");
    }
}
