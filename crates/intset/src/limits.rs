//! Bounds and wire constants.
//!
//! Decoding and parsing both accept untrusted input, so every allocation
//! driven by input is capped by one of these values.

/// Magic bytes for the uncompressed binary layout.
pub const MAGIC_UNCOMPRESSED: &[u8; 4] = b"ISET";

/// Magic bytes for the zstd-compressed binary layout.
pub const MAGIC_COMPRESSED: &[u8; 5] = b"ISETZ";

/// Current binary layout version.
pub const FORMAT_VERSION: u8 = 1;

/// Oldest binary layout version the decoder accepts.
pub const MIN_FORMAT_VERSION: u8 = 1;

/// Maximum bytes in a LEB128 varint.
pub const MAX_VARINT_BYTES: usize = 10;

/// Maximum number of elements in a set, for both text and binary forms.
pub const MAX_ELEMENTS: usize = 16 * 1024 * 1024;

/// Maximum length in bytes of a textual intset.
///
/// The longest canonical element (`2147483647`) plus its separator is 11
/// bytes, so this admits `MAX_ELEMENTS` elements with room for whitespace.
pub const MAX_INPUT_LEN: usize = 256 * 1024 * 1024;

/// Size of the uncompressed header: magic, version, count.
pub const HEADER_LEN: usize = MAGIC_UNCOMPRESSED.len() + 1 + 4;

/// Maximum size of an uncompressed binary set.
pub const MAX_ENCODED_LEN: usize = HEADER_LEN + MAX_ELEMENTS * 4;
