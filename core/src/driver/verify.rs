//! driver/verify.rs
//! Correctness phases: single-chunk round trip and concatenated fast decompression.
use rand::RngCore;
use tracing::debug;

use crate::buffer::Buffer;
use crate::compression::Codec;
use crate::constants::SENTINEL_BYTES;
use crate::types::HarnessError;
use crate::verify;

/// Compress `input` into a fresh buffer sized by `max_compressed_size` and
/// trim it to the bytes written.
pub fn compress_chunk(codec: &dyn Codec, input: &Buffer) -> Result<Buffer, HarnessError> {
    let mut compressed = Buffer::new(codec.max_compressed_size(input.len()));
    let written = codec.compress(input.as_slice(), compressed.raw_mut())?;
    verify!(
        written <= compressed.capacity(),
        "{} wrote {} bytes into {}",
        codec.name(),
        written,
        compressed.capacity()
    );
    compressed.trim(written)?;
    Ok(compressed)
}

/// Phase A: `decompress(compress(B)) == B`, with the exact original length.
pub fn round_trip<R: RngCore + ?Sized>(
    codec: &dyn Codec,
    chunk_len: usize,
    rng: &mut R,
) -> Result<(), HarnessError> {
    let input = Buffer::random(chunk_len, rng);
    let compressed = compress_chunk(codec, &input)?;

    let mut uncompressed = Buffer::new(chunk_len);
    let s = codec.decompress(compressed.as_slice(), uncompressed.raw_mut())?;
    verify!(s == chunk_len, "decompressed {} bytes, expected {}", s, chunk_len);
    uncompressed.trim(s)?;
    verify!(input.as_slice() == uncompressed.as_slice(), "round trip altered data");

    debug!(codec = codec.name(), chunk_len, compressed = compressed.len(), "round trip ok");
    Ok(())
}

/// Phase B: two chunks compressed separately, concatenated, and recovered
/// with `decompress_fast` given only the original size.
pub fn concatenated_fast<R: RngCore + ?Sized>(
    codec: &dyn Codec,
    chunk_len: usize,
    rng: &mut R,
) -> Result<(), HarnessError> {
    let first_chunk = Buffer::random(chunk_len, rng);
    let first_compressed = compress_chunk(codec, &first_chunk)?;

    let second_chunk = Buffer::random(chunk_len, rng);
    let second_compressed = compress_chunk(codec, &second_chunk)?;

    let chunks = &first_compressed + &second_compressed;
    let split = first_compressed.len();
    verify!(
        chunks.len() == split + second_compressed.len(),
        "concatenation is {} bytes, parts sum to {}",
        chunks.len(),
        split + second_compressed.len()
    );
    verify!(chunks.as_slice()[..split] == *first_compressed.as_slice(), "first part altered by concatenation");
    verify!(chunks.as_slice()[split..] == *second_compressed.as_slice(), "second part altered by concatenation");

    let consumed = fast_guarded(codec, chunks.as_slice(), &first_chunk)?;
    verify!(
        consumed == first_compressed.len(),
        "first chunk consumed {} bytes, compressed length is {}",
        consumed,
        first_compressed.len()
    );

    let consumed_second = fast_guarded(codec, &chunks.as_slice()[consumed..], &second_chunk)?;
    verify!(
        consumed_second == second_compressed.len(),
        "second chunk consumed {} bytes, compressed length is {}",
        consumed_second,
        second_compressed.len()
    );

    debug!(codec = codec.name(), chunk_len, first = split, second = consumed_second, "concatenated fast ok");
    Ok(())
}

/// `decompress_fast` into a buffer with the sentinel right after the
/// expected output region; checks the output and that the sentinel survived.
fn fast_guarded(codec: &dyn Codec, input: &[u8], expected: &Buffer) -> Result<usize, HarnessError> {
    let n = expected.len();
    let mut out = Buffer::with_guard(n, &SENTINEL_BYTES);
    let consumed = codec.decompress_fast(input, out.raw_mut(), n)?;

    verify!(out.prefix_eq(expected), "fast decompression output differs from original");
    verify!(out.guard_intact(n, &SENTINEL_BYTES), "write past {} output bytes", n);
    Ok(consumed)
}
