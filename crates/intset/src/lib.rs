//! intset: an ordered integer set value type.
//!
//! This crate provides the textual form `{1,2,3}`, a canonical in-memory
//! representation, a binary layout, and set algebra over canonical sets.
//!
//! # Quick Start
//!
//! ```rust
//! use intset::{parse_text, to_text, union, intersection};
//!
//! let a = parse_text("{3, 1, 2, 1}").unwrap();
//! let b = parse_text("{2,3,4}").unwrap();
//! assert_eq!(to_text(&a), "{1,2,3}");
//!
//! assert_eq!(to_text(&union(&a, &b)), "{1,2,3,4}");
//! assert_eq!(to_text(&intersection(&a, &b)), "{2,3}");
//! assert_eq!(to_text(&(&a ^ &b)), "{1,4}");
//! ```
//!
//! # Modules
//!
//! - [`model`]: [`CanonicalSet`] and canonicalization
//! - [`text`]: validation, parsing and formatting of the textual form
//! - [`algebra`]: membership, comparison and merge-based set operations
//! - [`codec`]: binary encoding/decoding with optional zstd compression
//! - [`error`]: Error types
//! - [`limits`]: Bounds for untrusted input
//!
//! # Canonical form
//!
//! A [`CanonicalSet`] is always strictly ascending. Every constructor
//! establishes that, and every set operation relies on it to run in a
//! single linear pass over its operands.
//!
//! # Text grammar
//!
//! Whitespace is ignored. Elements are unsigned decimal numerals that fit
//! in an `i32`; negative numbers are not part of the text form, although a
//! set built in memory or decoded from binary may hold them.
//! Such sets still format with [`to_text`], but that text does not parse
//! back, so the text round trip only holds for non-negative sets.

pub mod algebra;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod text;

// Re-export commonly used items at crate root
pub use algebra::{
    cardinality, contains, difference, equal, intersection, is_subset, is_superset, not_equal,
    symmetric_difference, union,
};
pub use codec::{decode_set, decompress, encode_set, encode_set_compressed};
pub use error::{DecodeError, EncodeError, ErrorCode, NotCanonical, ParseError, ParseErrorKind};
pub use model::{CanonicalSet, canonicalize};
pub use text::{ParseOptions, parse_text, parse_text_with_options, to_text, validate};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
