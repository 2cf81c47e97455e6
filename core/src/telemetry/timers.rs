//! telemetry/timers.rs
//! Latency samples per decompression path and the statistics derived from them.

use std::fmt;
use std::time::{Duration, Instant};
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecompressPath {
    /// Compressed length known (trimmed buffer).
    Standard,
    /// Only the original size known.
    Fast,
}

impl fmt::Display for DecompressPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecompressPath::Standard => "decompress",
            DecompressPath::Fast     => "decompress_fast",
        };
        f.write_str(name)
    }
}

/// Ordered elapsed-time measurements for one repeated operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencySamples {
    samples: Vec<Duration>,
}

impl LatencySamples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { samples: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, dur: Duration) {
        self.samples.push(dur);
    }

    /// Run `f`, record how long it took, and hand back its result.
    pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.samples.push(start.elapsed());
        out
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Duration> {
        self.samples.iter()
    }

    /// `None` for an empty set.
    pub fn stats(&self) -> Option<LatencyStats> {
        LatencyStats::from_samples(&self.samples)
    }
}

impl FromIterator<Duration> for LatencySamples {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub count: usize,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl LatencyStats {
    /// Median of an even count is the mean of the two middle samples.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        };

        let total_ns: u128 = sorted.iter().map(Duration::as_nanos).sum();
        let mean_ns = total_ns / n as u128;

        Some(Self {
            count: n,
            median,
            min: sorted[0],
            max: sorted[n - 1],
            mean: Duration::from_nanos(u64::try_from(mean_ns).unwrap_or(u64::MAX)),
        })
    }
}

impl fmt::Display for LatencyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "median={}ns min={}ns max={}ns mean={}ns (n={})",
            self.median.as_nanos(),
            self.min.as_nanos(),
            self.max.as_nanos(),
            self.mean.as_nanos(),
            self.count,
        )
    }
}
