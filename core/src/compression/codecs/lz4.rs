//! codecs/lz4.rs
//! LZ4 raw block codec (no size prefix, no frame).
//!
//! The block format is self-delimiting once the decompressed size is known:
//! the last sequence of a block is a literal run that ends exactly at the
//! original size. `decompress_fast` walks the sequence headers to find that
//! point, then decodes only the bytes that belong to the block.
use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size, DecompressError};

use crate::compression::constants::LZ4_MIN_MATCH;
use crate::compression::types::{ensure_capacity, Codec, CodecError, CodecKind};

const NAME: &str = "lz4";

pub struct Lz4Codec;

impl Lz4Codec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Lz4Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn kind(&self) -> CodecKind {
        CodecKind::Lz4
    }

    fn max_compressed_size(&self, original_size: usize) -> usize {
        get_maximum_output_size(original_size)
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
        ensure_capacity(NAME, self.max_compressed_size(input.len()), output.len())?;
        compress_into(input, output).map_err(|e| CodecError::failure(NAME, e.to_string()))
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
        decompress_into(input, output).map_err(|e| match e {
            DecompressError::OutputTooSmall { expected, .. } => {
                CodecError::AllocationTooSmall { codec: NAME, need: expected, have: output.len() }
            }
            other => CodecError::failure(NAME, other.to_string()),
        })
    }

    fn decompress_fast(
        &self,
        input: &[u8],
        output: &mut [u8],
        original_size: usize,
    ) -> Result<usize, CodecError> {
        ensure_capacity(NAME, original_size, output.len())?;
        let consumed = block_len(input, original_size)?;

        let written = decompress_into(&input[..consumed], &mut output[..original_size])
            .map_err(|e| CodecError::failure(NAME, e.to_string()))?;
        if written != original_size {
            return Err(CodecError::failure(
                NAME,
                format!("decoded {} bytes, expected {}", written, original_size),
            ));
        }
        Ok(consumed)
    }

    fn supports_fast_decompress(&self) -> bool {
        true
    }
}

/// Length in bytes of the LZ4 block at the start of `input` that decodes to
/// exactly `original_size` bytes.
pub fn block_len(input: &[u8], original_size: usize) -> Result<usize, CodecError> {
    let mut pos = 0usize;
    let mut produced = 0usize;

    loop {
        let token = *input
            .get(pos)
            .ok_or_else(|| CodecError::failure(NAME, "block truncated before token"))?;
        pos += 1;

        let literals = read_length(input, &mut pos, (token >> 4) as usize)?;
        pos = pos
            .checked_add(literals)
            .filter(|&end| end <= input.len())
            .ok_or_else(|| CodecError::failure(NAME, "literal run past end of input"))?;
        produced += literals;

        if produced == original_size {
            return Ok(pos);
        }
        if produced > original_size {
            return Err(CodecError::failure(NAME, "literal run overflows original size"));
        }

        let offset = match input.get(pos..pos + 2) {
            Some(b) => u16::from_le_bytes([b[0], b[1]]),
            None => return Err(CodecError::failure(NAME, "block truncated before match offset")),
        };
        pos += 2;
        if offset == 0 || offset as usize > produced {
            return Err(CodecError::failure(NAME, format!("invalid match offset {}", offset)));
        }

        let matched = read_length(input, &mut pos, (token & 0x0f) as usize)? + LZ4_MIN_MATCH;
        produced += matched;
        // a block always ends on literals
        if produced >= original_size {
            return Err(CodecError::failure(NAME, "match runs to or past original size"));
        }
    }
}

/// Decode a 4-bit length nibble plus its 255-continuation bytes.
fn read_length(input: &[u8], pos: &mut usize, nibble: usize) -> Result<usize, CodecError> {
    let mut len = nibble;
    if nibble == 0x0f {
        loop {
            let b = *input
                .get(*pos)
                .ok_or_else(|| CodecError::failure(NAME, "block truncated inside length"))?;
            *pos += 1;
            len += b as usize;
            if b != 0xff {
                break;
            }
        }
    }
    Ok(len)
}
