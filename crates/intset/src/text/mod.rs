//! Textual form of intsets: `{1,2,3}`.
//!
//! Parsing runs validate → parse → canonicalize and either yields a
//! complete [`CanonicalSet`] or a [`ParseError`] naming the input and the
//! cause. There is no partial result and no empty-set fallback.

pub mod format;
pub mod lexer;
pub(crate) mod parser;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::limits::{MAX_ELEMENTS, MAX_INPUT_LEN};
use crate::model::{CanonicalSet, canonicalize};

pub use format::to_text;
pub use lexer::{validate, validate_with_options};

/// Limits applied while parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum input length in bytes, whitespace included.
    pub max_input_len: usize,
    /// Maximum number of elements before deduplication.
    pub max_elements: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_input_len: MAX_INPUT_LEN,
            max_elements: MAX_ELEMENTS,
        }
    }
}

impl ParseOptions {
    /// Creates options with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum input length.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Sets the maximum element count.
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }
}

/// Parses a textual intset with default limits.
pub fn parse_text(input: &str) -> Result<CanonicalSet, ParseError> {
    parse_text_with_options(input, &ParseOptions::default())
}

/// Parses a textual intset.
pub fn parse_text_with_options(
    input: &str,
    options: &ParseOptions,
) -> Result<CanonicalSet, ParseError> {
    let raw = lexer::scan(input, options)
        .and_then(|stripped| parser::parse(&stripped, options))
        .map_err(|kind| {
            debug!(code = kind.code().code(), %kind, input, "rejected intset text");
            ParseError::new(kind, input)
        })?;

    let parsed = raw.len();
    let set = canonicalize(raw);
    trace!(parsed, distinct = set.len(), "parsed intset text");
    Ok(set)
}
