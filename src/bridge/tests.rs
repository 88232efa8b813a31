//! Bridge-level tests: the in-memory and file-path helpers end to end.

use std::fs;
use std::path::PathBuf;

use super::format::{FIXED_HEADER_SIZE, STREAM_MAGIC};
use super::stateless_api::*;
use crate::config::{CodecConfig, HeaderFormat};
use crate::error::HuffmanError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("huffman_core_{}_{}", std::process::id(), name))
}

#[test]
fn test_bytes_roundtrip() {
    let data = b"she sells sea shells by the sea shore".to_vec();
    let compressed = compress_bytes(&data).unwrap();
    assert_eq!(&compressed[..4], STREAM_MAGIC);
    assert_eq!(decompress_bytes(&compressed).unwrap(), data);
}

#[test]
fn test_bytes_roundtrip_json_header() {
    let config = CodecConfig {
        header_format: HeaderFormat::Json,
        ..CodecConfig::default()
    };
    let data = b"json header round trip".to_vec();
    let compressed = compress_bytes_with_config(&data, &config).unwrap();

    let stats = analyze(&compressed).unwrap();
    assert_eq!(stats.body_format, HeaderFormat::Json);
    // The body format is read from the header, so the default config decodes it too.
    assert_eq!(decompress_bytes(&compressed).unwrap(), data);
    assert_eq!(decompress_bytes_with_config(&compressed, &config).unwrap(), data);
}

#[test]
fn test_analyze_empty_input() {
    let compressed = compress_bytes(&[]).unwrap();
    let stats = analyze(&compressed).unwrap();
    assert_eq!(stats.original_len, 0);
    assert_eq!(stats.distinct_symbols, 0);
    assert_eq!(stats.payload_size, 1);
    assert!(stats.header_size > FIXED_HEADER_SIZE);
}

#[test]
fn test_analyze_rejects_garbage() {
    let result = analyze(b"definitely not a huffman stream");
    assert!(matches!(result, Err(HuffmanError::MalformedHeader(_))));
    assert!(matches!(analyze(&[]), Err(HuffmanError::MalformedHeader(_))));
}

#[test]
fn test_file_roundtrip() {
    let src = temp_path("file_src.txt");
    let packed = temp_path("file_packed.huf");
    let restored = temp_path("file_restored.txt");
    let data: Vec<u8> = b"line of text with some repetition\n".repeat(200);
    fs::write(&src, &data).unwrap();

    let config = CodecConfig::default();
    let report = compress_file(&src, &packed, &config).unwrap();
    assert_eq!(report.original_len, data.len() as u64);
    assert_eq!(
        fs::metadata(&packed).unwrap().len(),
        report.header_size as u64 + report.payload_size
    );

    let report = decompress_file(&packed, &restored, &config).unwrap();
    assert!(report.reached_end_marker);
    assert_eq!(fs::read(&restored).unwrap(), data);

    for path in [&src, &packed, &restored] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn test_missing_source_file_is_io_error() {
    let result = compress_file(
        &temp_path("does_not_exist.bin"),
        &temp_path("never_written.huf"),
        &CodecConfig::default(),
    );
    assert!(matches!(result, Err(HuffmanError::Io(_))));
}

#[test]
fn test_same_source_and_destination_is_rejected_without_data_loss() {
    let path = temp_path("same_path.txt");
    let data = b"this file must survive an in-place request".to_vec();
    fs::write(&path, &data).unwrap();

    let config = CodecConfig::default();
    let result = compress_file(&path, &path, &config);
    assert!(matches!(result, Err(HuffmanError::InvalidInput(_))));
    assert_eq!(fs::read(&path).unwrap(), data);

    let result = decompress_file(&path, &path, &config);
    assert!(matches!(result, Err(HuffmanError::InvalidInput(_))));
    assert_eq!(fs::read(&path).unwrap(), data);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_failed_decompression_leaves_no_destination_file() {
    let src = temp_path("garbage.huf");
    let dst = temp_path("garbage_restored.txt");
    let _ = fs::remove_file(&dst);
    fs::write(&src, b"not a compressed stream at all").unwrap();

    let result = decompress_file(&src, &dst, &CodecConfig::default());
    assert!(matches!(result, Err(HuffmanError::MalformedHeader(_))));
    assert!(!dst.exists());
    assert!(!temp_path("garbage_restored.txt.partial").exists());

    let _ = fs::remove_file(&src);
}

#[test]
fn test_failed_decompression_keeps_existing_destination() {
    let src = temp_path("truncated.huf");
    let dst = temp_path("keep_me.txt");
    let compressed = compress_bytes(b"payload that will be cut short").unwrap();
    fs::write(&src, &compressed[..FIXED_HEADER_SIZE - 2]).unwrap();
    fs::write(&dst, b"previous contents").unwrap();

    let result = decompress_file(&src, &dst, &CodecConfig::default());
    assert!(matches!(result, Err(HuffmanError::MalformedHeader(_))));
    assert_eq!(fs::read(&dst).unwrap(), b"previous contents");

    for path in [&src, &dst] {
        let _ = fs::remove_file(path);
    }
}
