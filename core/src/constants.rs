/// Chunk size used by the correctness phases.
pub const DEFAULT_CHUNK_LENGTH: usize = 4 * 1024; // 4 KiB

/// Chunk sizes exercised by the latency benchmark.
pub const DEFAULT_BENCH_SIZES: &[usize] = &[
    4 * 1024,   // 4 KiB
    16 * 1024,  // 16 KiB
    64 * 1024,  // 64 KiB
    256 * 1024, // 256 KiB
];

/// Repetitions per benchmark chunk size.
pub const DEFAULT_BENCH_ITERATIONS: usize = 100;

/// Written past every expected output region to detect write overflow.
pub const SENTINEL: u32 = 0xDEAD_BEEF;
pub const SENTINEL_BYTES: [u8; 4] = SENTINEL.to_le_bytes();

/// Environment variables read by `HarnessConfig::from_env`.
pub const ENV_CONFIG_PATH: &str = "CODEC_HARNESS_CONFIG";
pub const ENV_SEED: &str = "CODEC_HARNESS_SEED";
