//! src/compression/codecs/zstd.rs
//!
//! Zstd block codec over the `zstd::bulk` API.
//!
//! The bulk decoder consumes a whole, size-delimited block and has no way to
//! report how much of a longer input belonged to it, so this codec does not
//! offer `decompress_fast`.

use crate::compression::constants::DEFAULT_LEVEL_ZSTD;
use crate::compression::types::{ensure_capacity, Codec, CodecError, CodecKind};

const NAME: &str = "zstd";

pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_ZSTD)
    }
}

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn kind(&self) -> CodecKind {
        CodecKind::Zstd
    }

    fn max_compressed_size(&self, original_size: usize) -> usize {
        zstd_safe::compress_bound(original_size)
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
        ensure_capacity(NAME, self.max_compressed_size(input.len()), output.len())?;
        ::zstd::bulk::compress_to_buffer(input, output, self.level)
            .map_err(|e| CodecError::failure(NAME, e.to_string()))
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
        // frames written by `compress` record their content size
        if let Ok(Some(size)) = zstd_safe::get_frame_content_size(input) {
            let need = usize::try_from(size).unwrap_or(usize::MAX);
            ensure_capacity(NAME, need, output.len())?;
        }
        ::zstd::bulk::decompress_to_buffer(input, output)
            .map_err(|e| CodecError::failure(NAME, e.to_string()))
    }
}
