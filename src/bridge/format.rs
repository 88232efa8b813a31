// In: src/bridge/format.rs

//! Defines all on-disk constants and public result structs for the compressed
//! stream format. This is the single source of truth for the header layout
//! shared by `bridge::header` (which reads and writes it) and the orchestrator.
//!
//! Layout of a compressed stream:
//!
//! ```text
//! +--------+---------+-------------+-------------+-----------+-----------------+
//! | magic  | version | body format | body length | body      | payload         |
//! | 4      | u16 LE  | u8          | u32 LE      | n bytes   | packed bits ... |
//! +--------+---------+-------------+-------------+-----------+-----------------+
//! ```

use serde::Serialize;

use crate::config::HeaderFormat;

/// The magic number to identify the start of a compressed stream.
pub const STREAM_MAGIC: &[u8; 4] = b"HUF1";
/// The current version of the stream format.
pub const STREAM_FORMAT_VERSION: u16 = 1;
/// Size of the fixed part of the header: magic(4) + version(2) + format(1) + body_len(4).
pub const FIXED_HEADER_SIZE: usize = 11;
/// Upper bound on the header body. A full 257-entry table is a few KiB in
/// either format, so anything larger is corrupt.
pub const MAX_HEADER_BODY_LEN: usize = 64 * 1024;

/// Result of a compress call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionReport {
    pub original_len: u64,
    pub header_size: usize,
    /// Payload length in bits, END_OF_DATA code included, padding excluded.
    pub payload_bits: u64,
    pub payload_size: u64,
    /// Distinct literal byte values in the input.
    pub distinct_symbols: usize,
}

/// Result of a decompress call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecompressionReport {
    pub header_size: usize,
    pub bytes_written: u64,
    /// `false` if the payload ran out before the END_OF_DATA code.
    pub reached_end_marker: bool,
}

/// The public-facing result of `analyze`: header metadata of a compressed
/// buffer, read without decoding the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    pub header_size: usize,
    pub payload_size: usize,
    pub total_size: usize,
    pub original_len: u64,
    pub distinct_symbols: usize,
    pub body_format: HeaderFormat,
}
