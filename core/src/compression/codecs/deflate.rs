//! Deflate (zlib wrapper) via flate2's raw `Compress`/`Decompress` state machines.
//!
//! A zlib stream carries its own end marker and adler32 trailer, so inflate
//! stops at the end of the first stream and `total_in` is the consumed length.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::compression::constants::{DEFAULT_LEVEL_DEFLATE, ZLIB_WRAPPER_LEN};
use crate::compression::types::{ensure_capacity, Codec, CodecError, CodecKind};

const NAME: &str = "deflate";

pub struct DeflateCodec {
    level: Compression,
}

impl DeflateCodec {
    pub fn new(level: i32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level as u32),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_DEFLATE)
    }
}

impl Codec for DeflateCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn kind(&self) -> CodecKind {
        CodecKind::Deflate
    }

    /// zlib's conservative `deflateBound`, valid for any level and backend.
    fn max_compressed_size(&self, n: usize) -> usize {
        n + ((n + 7) >> 3) + ((n + 63) >> 6) + 5 + ZLIB_WRAPPER_LEN
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
        ensure_capacity(NAME, self.max_compressed_size(input.len()), output.len())?;

        let mut zs = Compress::new(self.level, true);
        let status = zs
            .compress(input, output, FlushCompress::Finish)
            .map_err(|e| CodecError::failure(NAME, e.to_string()))?;
        match status {
            Status::StreamEnd => Ok(zs.total_out() as usize),
            _ => Err(CodecError::failure(NAME, "compression did not reach end of stream")),
        }
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
        let (consumed, written) = match inflate(input, output)? {
            Inflated::End { consumed, written } => (consumed, written),
            Inflated::OutputFull { written } => {
                return Err(CodecError::AllocationTooSmall { codec: NAME, need: written + 1, have: output.len() })
            }
        };
        if consumed != input.len() {
            return Err(CodecError::failure(
                NAME,
                format!("{} trailing bytes after end of stream", input.len() - consumed),
            ));
        }
        Ok(written)
    }

    fn decompress_fast(
        &self,
        input: &[u8],
        output: &mut [u8],
        original_size: usize,
    ) -> Result<usize, CodecError> {
        ensure_capacity(NAME, original_size, output.len())?;

        let (consumed, written) = match inflate(input, &mut output[..original_size])? {
            Inflated::End { consumed, written } => (consumed, written),
            Inflated::OutputFull { written } => {
                return Err(CodecError::failure(NAME, format!("stream continues past {} bytes", written)))
            }
        };
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

enum Inflated {
    End { consumed: usize, written: usize },
    /// Output filled with compressed input left over.
    OutputFull { written: usize },
}

/// Inflate a single zlib stream into `output`. Input that runs out before
/// the end of the stream is a `CodecFailure`.
fn inflate(input: &[u8], output: &mut [u8]) -> Result<Inflated, CodecError> {
    let mut zs = Decompress::new(true);
    let status = zs
        .decompress(input, output, FlushDecompress::Finish)
        .map_err(|e| CodecError::failure(NAME, e.to_string()))?;

    let consumed = zs.total_in() as usize;
    let written = zs.total_out() as usize;
    match status {
        Status::StreamEnd => Ok(Inflated::End { consumed, written }),
        _ if written == output.len() && consumed < input.len() => Ok(Inflated::OutputFull { written }),
        _ => Err(CodecError::failure(NAME, "truncated stream")),
    }
}
