//! compression/registry.rs
//! Codec registry and factory functions.

use std::ops::RangeInclusive;

use crate::compression::codecs::{DeflateCodec, Lz4Codec, ZstdCodec};
use crate::compression::constants::{codec_ids, DEFAULT_LEVEL_DEFLATE, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{Codec, CodecError, CodecKind};

/// Fixed order in which the harness exercises codecs.
pub const ALL_CODECS: [CodecKind; 3] = [CodecKind::Lz4, CodecKind::Deflate, CodecKind::Zstd];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub default_level: Option<i32>,
    /// Accepted compression levels; `None` for codecs without levels.
    pub levels: Option<RangeInclusive<i32>>,
    pub supports_fast_decompress: bool,
}

impl CodecInfo {
    /// `requested`, or the default when none was given.
    pub fn effective_level(&self, requested: Option<i32>) -> Option<i32> {
        requested.or(self.default_level)
    }
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CodecError> {
    match codec_id {
        x if x == codec_ids::ZSTD =>
            Ok(CodecInfo {
                name: "zstd",
                default_level: Some(DEFAULT_LEVEL_ZSTD),
                levels: Some(zstd_safe::min_c_level()..=zstd_safe::max_c_level()),
                supports_fast_decompress: false,
            }),
        x if x == codec_ids::LZ4 =>
            Ok(CodecInfo { name: "lz4", default_level: None, levels: None, supports_fast_decompress: true }),
        x if x == codec_ids::DEFLATE =>
            Ok(CodecInfo {
                name: "deflate",
                default_level: Some(DEFAULT_LEVEL_DEFLATE),
                levels: Some(0..=9),
                supports_fast_decompress: true,
            }),
        other => Err(CodecError::NotAvailable { raw: other }),
    }
}

/// Build a codec. `level` is ignored by codecs without levels.
pub fn create_codec(kind: CodecKind, level: Option<i32>) -> Result<Box<dyn Codec>, CodecError> {
    match kind {
        CodecKind::Lz4 => Ok(Box::new(Lz4Codec::new())),
        CodecKind::Deflate => Ok(Box::new(DeflateCodec::new(level.unwrap_or(DEFAULT_LEVEL_DEFLATE)))),
        CodecKind::Zstd => Ok(Box::new(ZstdCodec::new(level.unwrap_or(DEFAULT_LEVEL_ZSTD)))),
        CodecKind::None => Err(CodecError::NotAvailable { raw: kind.id() }),
    }
}

/// Build a codec from its raw wire id.
pub fn create_codec_by_id(codec_id: u16, level: Option<i32>) -> Result<Box<dyn Codec>, CodecError> {
    let kind = CodecKind::try_from(codec_id).map_err(|_| CodecError::NotAvailable { raw: codec_id })?;
    create_codec(kind, level)
}
