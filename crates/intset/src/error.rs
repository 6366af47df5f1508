//! Error types for intset parsing, binary encoding/decoding and construction.

use thiserror::Error;

/// Error codes reported to a host binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// S001: Misplaced or miscounted braces
    Structural,
    /// S002: Character outside the grammar
    InvalidCharacter,
    /// S003: Missing element between separators
    EmptyElement,
    /// S004: Whitespace-split numeral
    AmbiguousCompactForm,
    /// S005: Input exceeds a configured limit or element range
    LimitExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "S001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Structural => "S001",
            ErrorCode::InvalidCharacter => "S002",
            ErrorCode::EmptyElement => "S003",
            ErrorCode::AmbiguousCompactForm => "S004",
            ErrorCode::LimitExceeded => "S005",
        }
    }
}

/// Why a textual intset was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("[S001] {reason}")]
    Structural { reason: &'static str },

    #[error("[S002] invalid character {ch:?}")]
    InvalidCharacter { ch: char },

    #[error("[S003] empty element")]
    EmptyElement,

    #[error("[S004] numeral is split by whitespace")]
    AmbiguousCompactForm,

    #[error("[S005] element {token} is out of range for a 32-bit integer")]
    OutOfRange { token: String },

    #[error("[S005] input length {len} exceeds maximum {max}")]
    TooLong { len: usize, max: usize },

    #[error("[S005] element count {count} exceeds maximum {max}")]
    TooManyElements { count: usize, max: usize },
}

impl ParseErrorKind {
    /// Returns the error code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::Structural { .. } => ErrorCode::Structural,
            ParseErrorKind::InvalidCharacter { .. } => ErrorCode::InvalidCharacter,
            ParseErrorKind::EmptyElement => ErrorCode::EmptyElement,
            ParseErrorKind::AmbiguousCompactForm => ErrorCode::AmbiguousCompactForm,
            ParseErrorKind::OutOfRange { .. }
            | ParseErrorKind::TooLong { .. }
            | ParseErrorKind::TooManyElements { .. } => ErrorCode::LimitExceeded,
        }
    }
}

/// Error returned when text fails validation or parsing.
///
/// Carries the offending input verbatim so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input syntax for intset: {input:?}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub input: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

/// Elements handed to a checked constructor were not strictly ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("element at index {index} is not greater than its predecessor")]
pub struct NotCanonical {
    pub index: usize,
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid magic bytes: expected ISET or ISETZ, found {found:?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("unsupported version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("varint exceeds maximum length (10 bytes)")]
    VarintTooLong,

    #[error("varint overflow (value exceeds u64)")]
    VarintOverflow,

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{count} trailing bytes after set payload")]
    TrailingBytes { count: usize },

    #[error("stored set is not canonical: {0}")]
    NotCanonical(#[from] NotCanonical),

    #[error("zstd decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("decompressed size {actual} doesn't match declared {declared}")]
    UncompressedSizeMismatch { declared: usize, actual: usize },
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("zstd compression failed: {0}")]
    CompressionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_input() {
        let err = ParseError::new(ParseErrorKind::EmptyElement, "{1,,2}");
        let msg = err.to_string();
        assert!(msg.contains("\"{1,,2}\""), "{}", msg);
        assert!(msg.contains("[S003]"), "{}", msg);
    }

    #[test]
    fn test_error_codes() {
        let err = ParseError::new(ParseErrorKind::InvalidCharacter { ch: 'a' }, "{a}");
        assert_eq!(err.code(), ErrorCode::InvalidCharacter);
        assert_eq!(err.code().code(), "S002");

        let kind = ParseErrorKind::TooLong { len: 10, max: 5 };
        assert_eq!(kind.code(), ErrorCode::LimitExceeded);
    }

    #[test]
    fn test_not_canonical_converts_to_decode_error() {
        let err: DecodeError = NotCanonical { index: 3 }.into();
        assert!(matches!(err, DecodeError::NotCanonical(NotCanonical { index: 3 })));
    }
}
