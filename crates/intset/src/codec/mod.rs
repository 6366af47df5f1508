//! Binary encoding/decoding for intsets.
//!
//! The layout is an element count followed by the elements in ascending
//! order, fixed-width, behind a magic/version header. A zstd-compressed
//! wrapper is also supported and detected automatically on decode.

pub mod primitives;
pub mod set;

pub use primitives::{Reader, Writer};
pub use set::{decode_set, decompress, encode_set, encode_set_compressed};
