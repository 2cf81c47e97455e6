//! codec-harness
//!
//! Runs every codec through the correctness phases and the latency
//! benchmark, printing progress and statistics to stdout.

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use codec_core::config::HarnessConfig;
use codec_core::driver::{resolve_seed, run_all_with};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = HarnessConfig::from_env().context("loading harness config")?;
    let seed = resolve_seed(&config);
    config.seed = Some(seed);
    println!("seed: {}", seed);

    let summary = run_all_with(&config, |outcome| {
        println!("testing {}...", outcome.codec);
        for msg in &outcome.failures {
            println!("Caught error: {}", msg);
        }
        for snapshot in &outcome.bench {
            for line in snapshot.report_lines() {
                println!("{}", line);
            }
        }
        println!("status: {}", outcome.status);
    });

    if let Some(path) = &config.report_path {
        summary
            .write_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    if config.strict_exit && !summary.all_passed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
