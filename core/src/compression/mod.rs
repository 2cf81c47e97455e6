//! compression/mod.rs
//! Uniform codec interface over lz4, deflate and zstd.
//!
//! - Every codec writes into caller-owned buffers sized by `max_compressed_size`.
//! - `decompress_fast` decodes a unit knowing only its original size and
//!   reports how many input bytes it used; codecs that can't do that say so
//!   with `CodecError::Unsupported`.
//! - The registry maps `CodecKind` ids to implementations.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
