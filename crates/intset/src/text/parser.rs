//! Converts validated text into a raw element sequence.

use crate::error::ParseErrorKind;
use crate::text::ParseOptions;
use crate::text::lexer::body;

/// Elements in textual order, unsorted and possibly repeated.
pub(crate) type RawSequence = Vec<i32>;

/// Splits a validated, whitespace-free input into its elements.
///
/// The only failures left after validation are elements that do not fit
/// in an `i32` and inputs with more elements than `options` allows.
pub(crate) fn parse(stripped: &str, options: &ParseOptions) -> Result<RawSequence, ParseErrorKind> {
    let body = body(stripped);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let count = body.bytes().filter(|b| *b == b',').count() + 1;
    if count > options.max_elements {
        return Err(ParseErrorKind::TooManyElements {
            count,
            max: options.max_elements,
        });
    }

    let mut elements = Vec::with_capacity(count);
    for token in body.split(',') {
        let value = token.parse::<i32>().map_err(|_| ParseErrorKind::OutOfRange {
            token: token.to_string(),
        })?;
        elements.push(value);
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(stripped: &str) -> Result<RawSequence, ParseErrorKind> {
        parse(stripped, &ParseOptions::default())
    }

    #[test]
    fn test_parse_keeps_textual_order() {
        assert_eq!(parse_default("{3,1,2,1}").unwrap(), vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_default("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_default("{007,10}").unwrap(), vec![7, 10]);
    }

    #[test]
    fn test_parse_i32_bounds() {
        assert_eq!(parse_default("{2147483647}").unwrap(), vec![i32::MAX]);
        assert_eq!(
            parse_default("{1,2147483648}"),
            Err(ParseErrorKind::OutOfRange {
                token: "2147483648".to_string()
            })
        );
    }

    #[test]
    fn test_parse_element_limit() {
        let options = ParseOptions::default().with_max_elements(2);
        assert_eq!(
            parse("{1,2,3}", &options),
            Err(ParseErrorKind::TooManyElements { count: 3, max: 2 })
        );
        assert_eq!(parse("{1,2}", &options).unwrap(), vec![1, 2]);
    }
}
