//! telemetry/snapshot.rs
//!
//! Immutable per-chunk-size benchmark result: both latency distributions
//! plus the byte counters they were measured over.

use serde::{Serialize, Deserialize};

use crate::telemetry::counters::BenchCounters;
use crate::telemetry::timers::{DecompressPath, LatencySamples, LatencyStats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSnapshot {
    pub codec: String,
    pub chunk_size: usize,
    pub iterations: u64,
    pub standard: Option<LatencyStats>,
    pub fast: Option<LatencyStats>,
    /// The codec rejected `decompress_fast`; `fast` is `None`.
    pub fast_unsupported: bool,
    pub bytes_original: u64,
    pub bytes_compressed: u64,
    pub compression_ratio: f64,
}

impl BenchSnapshot {
    pub fn from(
        codec: &str,
        chunk_size: usize,
        counters: &BenchCounters,
        standard: &LatencySamples,
        fast: &LatencySamples,
        fast_unsupported: bool,
    ) -> Self {
        Self {
            codec: codec.to_string(),
            chunk_size,
            iterations: counters.iterations,
            standard: standard.stats(),
            fast: if fast_unsupported { None } else { fast.stats() },
            fast_unsupported,
            bytes_original: counters.bytes_original,
            bytes_compressed: counters.bytes_compressed,
            compression_ratio: counters.compression_ratio(),
        }
    }

    pub fn stats(&self, path: DecompressPath) -> Option<&LatencyStats> {
        match path {
            DecompressPath::Standard => self.standard.as_ref(),
            DecompressPath::Fast     => self.fast.as_ref(),
        }
    }

    /// Fast median minus standard median in nanoseconds, when both exist.
    pub fn fast_overhead_ns(&self) -> Option<i128> {
        match (&self.standard, &self.fast) {
            (Some(s), Some(f)) => Some(f.median.as_nanos() as i128 - s.median.as_nanos() as i128),
            _ => None,
        }
    }

    /// One human-readable line per path.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        for path in [DecompressPath::Standard, DecompressPath::Fast] {
            let body = match self.stats(path) {
                Some(st) => st.to_string(),
                None if path == DecompressPath::Fast && self.fast_unsupported => "not supported".to_string(),
                None => "no samples".to_string(),
            };
            lines.push(format!(
                "{} chunk={} {}: {}",
                self.codec, self.chunk_size, path, body
            ));
        }
        lines
    }
}
