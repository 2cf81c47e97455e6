//! compression/codecs/mod.rs
//! Concrete codecs behind the `Codec` trait.

pub mod deflate;
pub mod lz4;
pub mod zstd;

pub use self::deflate::*;
pub use self::lz4::*;
pub use self::zstd::*;
