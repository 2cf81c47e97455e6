//! telemetry/counters.rs
//! Byte counters collected while benchmarking one chunk size.
use std::ops::AddAssign;
use serde::{Serialize, Deserialize};

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchCounters {
    pub iterations: u64,
    pub bytes_original: u64,
    pub bytes_compressed: u64,
}

impl BenchCounters {
    /// Record one compress call.
    pub fn add_chunk(&mut self, original_len: usize, compressed_len: usize) {
        self.iterations += 1;
        self.bytes_original += original_len as u64;
        self.bytes_compressed += compressed_len as u64;
    }

    /// compressed / original, or 0 when nothing was recorded.
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_original > 0 {
            self.bytes_compressed as f64 / self.bytes_original as f64
        } else {
            0.0
        }
    }
}

impl AddAssign for BenchCounters {
    fn add_assign(&mut self, other: Self) {
        self.iterations += other.iterations;
        self.bytes_original += other.bytes_original;
        self.bytes_compressed += other.bytes_compressed;
    }
}
