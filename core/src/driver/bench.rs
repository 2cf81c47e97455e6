//! driver/bench.rs
//! Latency benchmark: length-aware `decompress` versus length-oblivious
//! `decompress_fast` over the same compressed payloads.
use rand::RngCore;
use tracing::{debug, info};

use crate::buffer::Buffer;
use crate::compression::{Codec, CodecError};
use crate::driver::verify::compress_chunk;
use crate::telemetry::{BenchCounters, BenchSnapshot, LatencySamples};
use crate::types::HarnessError;
use crate::verify;

/// Benchmark every size in `sizes`, `iterations` times each.
pub fn latency<R: RngCore + ?Sized>(
    codec: &dyn Codec,
    sizes: &[usize],
    iterations: usize,
    rng: &mut R,
) -> Result<Vec<BenchSnapshot>, HarnessError> {
    sizes
        .iter()
        .map(|&size| latency_for_size(codec, size, iterations, rng))
        .collect()
}

pub fn latency_for_size<R: RngCore + ?Sized>(
    codec: &dyn Codec,
    size: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<BenchSnapshot, HarnessError> {
    let mut counters = BenchCounters::default();
    let mut standard = LatencySamples::with_capacity(iterations);
    let mut fast = LatencySamples::with_capacity(iterations);
    let mut fast_unsupported = false;

    let mut out = Buffer::new(size);

    for i in 0..iterations {
        let input = Buffer::random(size, rng);

        // untrimmed view: the fast path only gets max_compressed_size as its input bound
        let compressed = compress_chunk(codec, &input)?;
        let mut bounded = compressed.clone();
        bounded.trim(bounded.capacity())?;
        counters.add_chunk(size, compressed.len());

        let s = standard.time(|| codec.decompress(compressed.as_slice(), out.raw_mut()))?;
        verify!(s == size, "decompress wrote {} bytes, expected {}", s, size);

        if fast_unsupported {
            continue;
        }
        match fast.time(|| codec.decompress_fast(bounded.as_slice(), out.raw_mut(), size)) {
            Ok(consumed) => {
                verify!(
                    consumed == compressed.len(),
                    "decompress_fast consumed {} bytes, compressed length is {}",
                    consumed,
                    compressed.len()
                );
            }
            Err(e @ CodecError::Unsupported { .. }) => {
                debug!(codec = codec.name(), iteration = i, error = %e, "fast path unavailable");
                fast_unsupported = true;
                fast = LatencySamples::new();
            }
            Err(e) => return Err(e.into()),
        }
    }

    let snapshot = BenchSnapshot::from(codec.name(), size, &counters, &standard, &fast, fast_unsupported);
    info!(
        codec = codec.name(),
        chunk_size = size,
        iterations,
        ratio = snapshot.compression_ratio,
        "benchmark complete"
    );
    Ok(snapshot)
}
