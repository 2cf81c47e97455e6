//! driver/mod.rs
//! Runs each codec through the verification phases and the latency benchmark.
//!
//! - Phase A: round trip (`verify::round_trip`).
//! - Phase B: concatenated fast decompression (`verify::concatenated_fast`).
//! - Phase C: latency benchmark (`bench::latency`).
//!
//! Errors of any kind are caught per codec and recorded in its outcome; the
//! run then moves on to the next codec. Whether a failed phase ends the
//! codec's run is `HarnessConfig::continue_after_failure`.

pub mod verify;
pub mod bench;
pub mod report;

pub use report::*;

use std::time::{SystemTime, UNIX_EPOCH};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::compression::{create_codec, resolve, Codec, CodecKind, ALL_CODECS};
use crate::config::HarnessConfig;
use crate::types::HarnessError;

/// Configured seed, or one taken once from the nanosecond clock.
pub fn resolve_seed(config: &HarnessConfig) -> u64 {
    config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

/// Per-codec RNG so a codec's scenarios don't depend on run order.
pub fn codec_rng(seed: u64, kind: CodecKind) -> StdRng {
    StdRng::seed_from_u64(seed ^ u64::from(kind.id()))
}

/// A correctness phase run against one codec.
pub type Phase = fn(&dyn Codec, usize, &mut StdRng) -> Result<(), HarnessError>;

/// Phases A and B, in order.
pub const VERIFY_PHASES: [(&str, Phase); 2] = [
    ("round_trip", verify::round_trip::<StdRng>),
    ("concatenated_fast", verify::concatenated_fast::<StdRng>),
];

/// Run phases A and B. Returns the failures; with `stop_on_failure` the
/// first failure skips the remaining phases.
pub fn verify_codec(
    codec: &dyn Codec,
    chunk_len: usize,
    rng: &mut StdRng,
    stop_on_failure: bool,
) -> Vec<HarnessError> {
    let mut failures = Vec::new();
    for (phase, run) in VERIFY_PHASES {
        if let Err(err) = run(codec, chunk_len, rng) {
            warn!(codec = codec.name(), phase, error = %err, "phase failed");
            failures.push(err);
            if stop_on_failure {
                break;
            }
        }
    }
    failures
}

/// Run every phase for one codec kind and collect the outcome.
pub fn run_codec(kind: CodecKind, config: &HarnessConfig, seed: u64) -> CodecOutcome {
    let mut outcome = CodecOutcome::new(kind.name());
    let level = resolve(kind.id())
        .ok()
        .and_then(|info| info.effective_level(config.level_for(kind)));
    debug!(codec = kind.name(), ?level, "starting");

    let codec = match create_codec(kind, level) {
        Ok(c) => c,
        Err(e) => {
            let err = HarnessError::from(e);
            warn!(codec = kind.name(), error = %err, "codec unavailable");
            outcome.fail(&err);
            return outcome;
        }
    };
    let mut rng = codec_rng(seed, kind);

    let failures = verify_codec(codec.as_ref(), config.chunk_length, &mut rng, !config.continue_after_failure);
    let failed = !failures.is_empty();
    for err in &failures {
        outcome.fail(err);
    }
    if failed && !config.continue_after_failure {
        return outcome;
    }

    if !config.skip_bench {
        match bench::latency(codec.as_ref(), &config.bench_sizes, config.bench_iterations, &mut rng) {
            Ok(snapshots) => outcome.bench = snapshots,
            Err(err) => {
                warn!(codec = kind.name(), error = %err, "benchmark failed");
                outcome.fail(&err);
            }
        }
    }

    info!(codec = kind.name(), status = %outcome.status, "finished");
    outcome
}

/// Every codec in `ALL_CODECS`, in order.
pub fn run_all(config: &HarnessConfig) -> RunSummary {
    run_kinds(&ALL_CODECS, config)
}

/// As `run_all`, calling `on_outcome` as each codec finishes.
pub fn run_all_with<F>(config: &HarnessConfig, on_outcome: F) -> RunSummary
where
    F: FnMut(&CodecOutcome),
{
    run_kinds_with(&ALL_CODECS, config, on_outcome)
}

pub fn run_kinds(kinds: &[CodecKind], config: &HarnessConfig) -> RunSummary {
    run_kinds_with(kinds, config, |_| {})
}

pub fn run_kinds_with<F>(kinds: &[CodecKind], config: &HarnessConfig, mut on_outcome: F) -> RunSummary
where
    F: FnMut(&CodecOutcome),
{
    let seed = resolve_seed(config);
    info!(seed, "run seed");
    let mut outcomes = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let outcome = run_codec(kind, config, seed);
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    RunSummary { seed, outcomes }
}
