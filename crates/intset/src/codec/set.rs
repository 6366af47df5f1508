//! Binary layout for a canonical set.
//!
//! ```text
//! Uncompressed:  "ISET" | version: u8 | count: u32 LE | count x i32 LE
//! Compressed:    "ISETZ" | uncompressed_len: varint | zstd(uncompressed)
//! ```
//!
//! Elements are stored in ascending order. The decoder checks that order
//! instead of re-sorting, so a corrupted payload is an error rather than
//! a different set.

use std::io::Read;

use tracing::debug;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{
    FORMAT_VERSION, HEADER_LEN, MAGIC_COMPRESSED, MAGIC_UNCOMPRESSED, MAX_ELEMENTS,
    MAX_ENCODED_LEN, MIN_FORMAT_VERSION,
};
use crate::model::CanonicalSet;

// =============================================================================
// DECODING
// =============================================================================

/// Decompresses an ISETZ payload, returning the uncompressed ISET bytes.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.len() < MAGIC_COMPRESSED.len() {
        return Err(DecodeError::UnexpectedEof { context: "magic" });
    }
    if &input[..MAGIC_COMPRESSED.len()] != MAGIC_COMPRESSED {
        return Err(invalid_magic(input));
    }
    decompress_zstd(&input[MAGIC_COMPRESSED.len()..])
}

/// Decodes a set from either binary form.
pub fn decode_set(input: &[u8]) -> Result<CanonicalSet, DecodeError> {
    let result = if input.starts_with(MAGIC_COMPRESSED) {
        decompress_zstd(&input[MAGIC_COMPRESSED.len()..])
            .and_then(|bytes| decode_uncompressed(&bytes))
    } else {
        decode_uncompressed(input)
    };
    if let Err(err) = &result {
        debug!(%err, len = input.len(), "rejected binary intset");
    }
    result
}

fn invalid_magic(input: &[u8]) -> DecodeError {
    let mut found = [0u8; 4];
    found.copy_from_slice(&input[..4]);
    DecodeError::InvalidMagic { found }
}

fn decode_uncompressed(input: &[u8]) -> Result<CanonicalSet, DecodeError> {
    if input.len() < MAGIC_UNCOMPRESSED.len() {
        return Err(DecodeError::UnexpectedEof { context: "magic" });
    }
    if &input[..MAGIC_UNCOMPRESSED.len()] != MAGIC_UNCOMPRESSED {
        return Err(invalid_magic(input));
    }

    let mut reader = Reader::new(&input[MAGIC_UNCOMPRESSED.len()..]);

    let version = reader.read_byte("version")?;
    if !(MIN_FORMAT_VERSION..=FORMAT_VERSION).contains(&version) {
        return Err(DecodeError::UnsupportedVersion { version });
    }

    let count = reader.read_u32("count")? as usize;
    if count > MAX_ELEMENTS {
        return Err(DecodeError::LengthExceedsLimit {
            field: "elements",
            len: count,
            max: MAX_ELEMENTS,
        });
    }
    // Check the payload size before allocating for it.
    if reader.remaining_len() < count * 4 {
        return Err(DecodeError::UnexpectedEof { context: "elements" });
    }

    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        elements.push(reader.read_i32("elements")?);
    }

    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            count: reader.remaining_len(),
        });
    }

    Ok(CanonicalSet::from_sorted(elements)?)
}

fn decompress_zstd(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut reader = Reader::new(compressed);
    let declared_size = reader.read_varint("uncompressed_size")? as usize;

    if declared_size > MAX_ENCODED_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "uncompressed_size",
            len: declared_size,
            max: MAX_ENCODED_LEN,
        });
    }

    let decoder = zstd::Decoder::new(reader.remaining())
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    // Read one byte past the declared size so an oversized stream is caught
    // without inflating it fully.
    let mut decompressed = Vec::with_capacity(declared_size);
    decoder
        .take(declared_size as u64 + 1)
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    if decompressed.len() != declared_size {
        return Err(DecodeError::UncompressedSizeMismatch {
            declared: declared_size,
            actual: decompressed.len(),
        });
    }

    Ok(decompressed)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a set in the uncompressed layout.
pub fn encode_set(set: &CanonicalSet) -> Result<Vec<u8>, EncodeError> {
    if set.len() > MAX_ELEMENTS {
        return Err(EncodeError::LengthExceedsLimit {
            field: "elements",
            len: set.len(),
            max: MAX_ELEMENTS,
        });
    }

    let mut writer = Writer::with_capacity(HEADER_LEN + set.len() * 4);
    writer.write_bytes(MAGIC_UNCOMPRESSED);
    writer.write_byte(FORMAT_VERSION);
    writer.write_u32(set.len() as u32);
    for &value in set {
        writer.write_i32(value);
    }
    Ok(writer.into_bytes())
}

/// Encodes a set with zstd compression at the given level.
pub fn encode_set_compressed(set: &CanonicalSet, level: i32) -> Result<Vec<u8>, EncodeError> {
    let uncompressed = encode_set(set)?;

    let compressed = zstd::encode_all(uncompressed.as_slice(), level)
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;

    let mut writer = Writer::with_capacity(MAGIC_COMPRESSED.len() + 10 + compressed.len());
    writer.write_bytes(MAGIC_COMPRESSED);
    writer.write_varint(uncompressed.len() as u64);
    writer.write_bytes(&compressed);

    Ok(writer.into_bytes())
}
