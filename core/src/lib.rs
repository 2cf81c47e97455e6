//! codec-core
//!
//! Uniform interface over lz4, deflate and zstd, plus the harness that
//! verifies the multi-chunk fast-decompression contract and measures
//! decompression latency through it.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;
pub mod buffer;

pub mod compression;
pub mod telemetry;
pub mod driver;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::compression::{create_codec, Codec, CodecError, CodecKind, ALL_CODECS};
    pub use crate::config::HarnessConfig;
    pub use crate::driver::{run_all, run_codec, CodecOutcome, RunSummary, Status};
    pub use crate::types::HarnessError;
}
