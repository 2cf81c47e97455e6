/// Stable codec IDs (u16) used for reporting and seed derivation.
pub mod codec_ids {
    pub const NONE: u16    = 0x0000;
    pub const ZSTD: u16    = 0x0001;
    pub const LZ4: u16     = 0x0002;
    pub const DEFLATE: u16 = 0x0003;
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;
pub const DEFAULT_LEVEL_DEFLATE: i32 = 6;

/// zlib stream wrapper: 2-byte header + 4-byte adler32 trailer.
pub const ZLIB_WRAPPER_LEN: usize = 6;

/// LZ4 block format: minimum match length encoded as zero in the token.
pub const LZ4_MIN_MATCH: usize = 4;
