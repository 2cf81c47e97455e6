//! compression/types.rs
//! Codec identifiers, the codec error taxonomy, and the `Codec` trait.
use std::fmt;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::codec_ids;

/// Codec identifiers. `None` is a valid id with no implementation behind it.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CodecKind {
    None    = codec_ids::NONE,
    Zstd    = codec_ids::ZSTD,
    Lz4     = codec_ids::LZ4,
    Deflate = codec_ids::DEFLATE,
}

impl CodecKind {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            CodecKind::None    => "none",
            CodecKind::Zstd    => "zstd",
            CodecKind::Lz4     => "lz4",
            CodecKind::Deflate => "deflate",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

fn codec_label(raw: &u16) -> String {
    enum_name_or_hex::<CodecKind>(*raw)
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{codec}: destination too small: need {need} bytes, have {have}")]
    AllocationTooSmall { codec: &'static str, need: usize, have: usize },

    #[error("{codec} failure: {msg}")]
    CodecFailure { codec: &'static str, msg: String },

    #[error("{codec} {op}(): operation not supported")]
    Unsupported { codec: &'static str, op: &'static str },

    #[error("compressor not available: {}", codec_label(.raw))]
    NotAvailable { raw: u16 },
}

impl CodecError {
    pub fn failure(codec: &'static str, msg: impl Into<String>) -> Self {
        CodecError::CodecFailure { codec, msg: msg.into() }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, CodecError::Unsupported { .. })
    }
}

/// Uniform, stateless compression capability.
///
/// All operations write into caller-owned slices; nothing is allocated on
/// the caller's behalf, so the same destination can be reused across calls.
pub trait Codec: Send {
    /// Stable identifier used in reports.
    fn name(&self) -> &'static str;

    fn kind(&self) -> CodecKind;

    /// Worst-case compressed size for `original_size` input bytes.
    /// `compress` requires a destination at least this large.
    fn max_compressed_size(&self, original_size: usize) -> usize;

    /// Compress `input` into `output`, returning bytes written.
    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError>;

    /// Decompress `input` as exactly one compressed unit, returning bytes written.
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError>;

    /// Decompress the unit at the start of `input` knowing only its original size.
    ///
    /// Writes exactly `output[..original_size]` and leaves the rest of `output`
    /// untouched. Returns the number of input bytes consumed, i.e. the offset
    /// of the next unit when several are concatenated.
    fn decompress_fast(
        &self,
        _input: &[u8],
        _output: &mut [u8],
        _original_size: usize,
    ) -> Result<usize, CodecError> {
        Err(CodecError::Unsupported { codec: self.name(), op: "decompress_fast" })
    }

    fn supports_fast_decompress(&self) -> bool {
        false
    }
}

/// Shared destination checks used by every codec.
pub(crate) fn ensure_capacity(codec: &'static str, need: usize, have: usize) -> Result<(), CodecError> {
    if have < need {
        return Err(CodecError::AllocationTooSmall { codec, need, have });
    }
    Ok(())
}
