//! config.rs
//! Harness configuration.
//!
//! The binary takes no flags. Settings come from an optional JSON file named
//! by `CODEC_HARNESS_CONFIG`; any field left out keeps its default.
//! `CODEC_HARNESS_SEED` overrides the seed.
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::compression::{resolve, CodecKind, ALL_CODECS};
use crate::constants::{
    DEFAULT_BENCH_ITERATIONS, DEFAULT_BENCH_SIZES, DEFAULT_CHUNK_LENGTH, ENV_CONFIG_PATH, ENV_SEED,
};
use crate::types::HarnessError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Chunk size for the round-trip and concatenation phases.
    pub chunk_length: usize,

    /// Chunk sizes for the latency benchmark.
    pub bench_sizes: Vec<usize>,

    /// Repetitions per benchmark chunk size.
    pub bench_iterations: usize,

    /// Run seed. `None` derives one from the clock at startup.
    pub seed: Option<u64>,

    /// Keep running a codec's later phases after one fails.
    /// - `false` → first failure ends that codec's run (reference behavior).
    /// - `true` → every phase runs and every failure is reported.
    pub continue_after_failure: bool,

    /// Exit non-zero when any codec failed.
    pub strict_exit: bool,

    /// Skip the latency benchmark entirely.
    pub skip_bench: bool,

    /// Per-codec compression level, keyed by codec name.
    pub levels: HashMap<String, i32>,

    /// Write the run summary as JSON here.
    pub report_path: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            chunk_length: DEFAULT_CHUNK_LENGTH,
            bench_sizes: DEFAULT_BENCH_SIZES.to_vec(),
            bench_iterations: DEFAULT_BENCH_ITERATIONS,
            seed: None,
            continue_after_failure: false,
            strict_exit: false,
            skip_bench: false,
            levels: HashMap::new(),
            report_path: None,
        }
    }
}

impl HarnessConfig {
    /// Small, fast settings for tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            bench_sizes: vec![DEFAULT_CHUNK_LENGTH],
            bench_iterations: 4,
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, HarnessError> {
        let cfg: Self = serde_json::from_str(text).map_err(|e| HarnessError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Defaults, overlaid by the file in `CODEC_HARNESS_CONFIG` and the seed
    /// in `CODEC_HARNESS_SEED`.
    pub fn from_env() -> Result<Self, HarnessError> {
        let mut cfg = match std::env::var_os(ENV_CONFIG_PATH) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Ok(raw) = std::env::var(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| HarnessError::Config(format!("{}={:?}: {}", ENV_SEED, raw, e)))?;
            cfg.seed = Some(seed);
        }
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.chunk_length == 0 {
            return Err(HarnessError::Config("chunk_length must be non-zero".into()));
        }
        if self.bench_sizes.iter().any(|&s| s == 0) {
            return Err(HarnessError::Config("bench_sizes must be non-zero".into()));
        }
        for (name, &level) in &self.levels {
            let kind = ALL_CODECS
                .into_iter()
                .find(|k| k.name() == name.as_str())
                .ok_or_else(|| HarnessError::Config(format!("levels: unknown codec {:?}", name)))?;
            let range = resolve(kind.id())?
                .levels
                .ok_or_else(|| HarnessError::Config(format!("levels: {} has no compression levels", name)))?;
            if !range.contains(&level) {
                return Err(HarnessError::Config(format!(
                    "levels: {} level {} outside {}..={}",
                    name,
                    level,
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }

    pub fn level_for(&self, kind: CodecKind) -> Option<i32> {
        self.levels.get(kind.name()).copied()
    }
}
