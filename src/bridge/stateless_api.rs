// In: src/bridge/stateless_api.rs

use std::fs::{self, File};
use std::io::Cursor;
use std::path::Path;

use crate::bridge::format::{CompressionReport, CompressionStats, DecompressionReport};
use crate::bridge::header;
use crate::config::CodecConfig;
use crate::error::HuffmanError;
use crate::pipeline::orchestrator;

/// Compresses an in-memory buffer with the default configuration.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    compress_bytes_with_config(data, &CodecConfig::default())
}

pub fn compress_bytes_with_config(
    data: &[u8],
    config: &CodecConfig,
) -> Result<Vec<u8>, HuffmanError> {
    let mut output = Vec::with_capacity(data.len() / 2 + 64);
    orchestrator::compress(Cursor::new(data), &mut output, config)?;
    Ok(output)
}

/// Decompresses an in-memory buffer produced by `compress_bytes`.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    decompress_bytes_with_config(data, &CodecConfig::default())
}

pub fn decompress_bytes_with_config(
    data: &[u8],
    config: &CodecConfig,
) -> Result<Vec<u8>, HuffmanError> {
    let mut output = Vec::new();
    orchestrator::decompress(data, &mut output, config)?;
    Ok(output)
}

/// Compresses the file at `src` into `dst`.
///
/// `dst` is replaced only when compression succeeds; `src` and `dst` must be
/// different files.
pub fn compress_file(
    src: &Path,
    dst: &Path,
    config: &CodecConfig,
) -> Result<CompressionReport, HuffmanError> {
    reject_same_file(src, dst)?;
    let input = File::open(src)?;
    log::debug!("compressing {} -> {}", src.display(), dst.display());
    replace_on_success(dst, |output| orchestrator::compress(input, output, config))
}

/// Decompresses the file at `src` into `dst`.
///
/// On any error, including a malformed header, `dst` is left untouched.
pub fn decompress_file(
    src: &Path,
    dst: &Path,
    config: &CodecConfig,
) -> Result<DecompressionReport, HuffmanError> {
    reject_same_file(src, dst)?;
    let input = File::open(src)?;
    log::debug!("decompressing {} -> {}", src.display(), dst.display());
    replace_on_success(dst, |output| orchestrator::decompress(input, output, config))
}

fn reject_same_file(src: &Path, dst: &Path) -> Result<(), HuffmanError> {
    let src_real = fs::canonicalize(src)?;
    // A destination that does not exist yet cannot alias the source.
    if let Ok(dst_real) = fs::canonicalize(dst) {
        if dst_real == src_real {
            return Err(HuffmanError::InvalidInput(format!(
                "source and destination are the same file: {}",
                src.display()
            )));
        }
    }
    Ok(())
}

/// Runs `write` against a sibling `<dst>.partial` file and renames it over
/// `dst` only if `write` succeeds. The partial file is removed on failure.
fn replace_on_success<T, F>(dst: &Path, write: F) -> Result<T, HuffmanError>
where
    F: FnOnce(File) -> Result<T, HuffmanError>,
{
    let file_name = dst.file_name().ok_or_else(|| {
        HuffmanError::InvalidInput(format!("destination {} has no file name", dst.display()))
    })?;
    let mut partial_name = file_name.to_os_string();
    partial_name.push(".partial");
    let partial = dst.with_file_name(partial_name);

    let result = File::create(&partial)
        .map_err(HuffmanError::from)
        .and_then(write)
        .and_then(|value| {
            fs::rename(&partial, dst)?;
            Ok(value)
        });
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

/// Analyzes a compressed buffer without decoding the payload.
/// This function acts as a simple facade over `header::peek_info`.
pub fn analyze(bytes: &[u8]) -> Result<CompressionStats, HuffmanError> {
    // 1. Delegate to the header peek.
    let info = header::peek_info(bytes)?;

    // 2. Translate the HeaderInfo into the public-facing CompressionStats struct.
    Ok(CompressionStats {
        header_size: info.header_size,
        payload_size: bytes.len() - info.header_size,
        total_size: bytes.len(),
        original_len: info.table.original_len(),
        distinct_symbols: info.table.distinct_bytes(),
        body_format: info.body_format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_after_compression() {
        // 1. Arrange: compress a sample buffer.
        let data = b"mississippi river".to_vec();
        let compressed = compress_bytes(&data).unwrap();

        // 2. Act: analyze the result.
        let stats = analyze(&compressed).unwrap();

        // 3. Assert: check for reasonable results.
        assert_eq!(stats.total_size, compressed.len());
        assert_eq!(stats.header_size + stats.payload_size, stats.total_size);
        assert_eq!(stats.original_len, data.len() as u64);
        assert_eq!(stats.distinct_symbols, 8);
        assert!(stats.header_size > 0);
        assert!(stats.payload_size > 0);
    }
}
