// In: src/pipeline/orchestrator.rs

//! The compress / decompress coordinators.
//!
//! Each function acts as a high-level coordinator, delegating every stage to
//! a kernel. The frequency table, tree and code table are locals of one call:
//! they are released on every exit path, including early errors.

use std::io::{BufReader, BufWriter, Read, Seek, Write};

use crate::bridge::format::{CompressionReport, DecompressionReport};
use crate::bridge::header;
use crate::config::CodecConfig;
use crate::error::HuffmanError;
use crate::io_adapters::{BitReader, BitWriter, ByteReader};
use crate::kernels::{code_table, decoder, encoder, frequency, tree_builder};
use crate::traits::{BitSink, ByteSource};
use crate::types::{CodeTable, FrequencyTable};

//==================================================================================
// 1. Public Orchestration API
//==================================================================================

/// Compresses everything readable from `input` into `output`.
///
/// The input is read twice: once to count frequencies and, after rewinding to
/// where it started, once to encode. The output receives the frequency table
/// header followed by the packed payload.
pub fn compress<R, W>(
    input: R,
    output: W,
    config: &CodecConfig,
) -> Result<CompressionReport, HuffmanError>
where
    R: Read + Seek,
    W: Write,
{
    config.validate()?;

    // 1. First pass: frequency analysis.
    let mut source = ByteReader::with_capacity(config.buffer_capacity, input)?;
    let table = frequency::count_frequencies(&mut source)?;

    // 2. Build the tree and derive the codes from it.
    let tree = tree_builder::build_tree(&table)?;
    let codes = code_table::derive_code_table(tree.root());
    if config.enable_stats_collection {
        log_code_table(&table, &codes);
    }

    // 3. Second pass: header, then payload.
    source.rewind()?;
    let mut output = BufWriter::with_capacity(config.buffer_capacity, output);
    let header_size = header::write_header(&mut output, &table, config.header_format)?;

    let mut sink = BitWriter::with_capacity(config.buffer_capacity, &mut output);
    let payload_bits = encoder::encode(&mut source, &codes, &mut sink)?;
    if codes.encoded_bits(table.iter()) != Some(payload_bits) {
        return Err(HuffmanError::InvalidInput(
            "input changed between the counting and encoding passes".to_string(),
        ));
    }
    sink.finish()?;
    let payload_size = sink.bytes_written();
    drop(sink);
    output.flush()?;

    let report = CompressionReport {
        original_len: table.original_len(),
        header_size,
        payload_bits,
        payload_size,
        distinct_symbols: table.distinct_bytes(),
    };
    log::debug!("compress finished: {:?}", report);
    if config.enable_stats_collection {
        log::info!(
            "Compressed {} bytes ({} distinct) into {} header + {} payload bytes",
            report.original_len,
            report.distinct_symbols,
            report.header_size,
            report.payload_size
        );
    }
    Ok(report)
}

/// Decompresses a stream produced by `compress` from `input` into `output`.
///
/// A payload that ends before its END_OF_DATA code is decoded as far as it
/// goes, unless `config.strict_length` is set.
pub fn decompress<R, W>(
    input: R,
    output: W,
    config: &CodecConfig,
) -> Result<DecompressionReport, HuffmanError>
where
    R: Read,
    W: Write,
{
    config.validate()?;

    // 1. Recover the frequency table and rebuild the identical tree.
    let mut input = BufReader::with_capacity(config.buffer_capacity, input);
    let info = header::read_header_info(&mut input)?;
    let tree = tree_builder::build_tree(&info.table)?;
    if config.enable_stats_collection {
        log_code_table(&info.table, &tree.code_table());
    }

    // 2. Decode the payload.
    let mut source = BitReader::with_capacity(config.buffer_capacity, &mut input);
    let mut output = BufWriter::with_capacity(config.buffer_capacity, output);
    let summary = decoder::decode(&mut source, &tree, &mut output)?;
    output.flush()?;

    let expected_len = info.table.original_len();
    if config.strict_length && summary.bytes_written != expected_len {
        return Err(HuffmanError::MalformedPayload(format!(
            "decoded {} bytes but the header declares {}",
            summary.bytes_written, expected_len
        )));
    }

    let report = DecompressionReport {
        header_size: info.header_size,
        bytes_written: summary.bytes_written,
        reached_end_marker: summary.reached_end_marker,
    };
    log::debug!("decompress finished: {:?}", report);
    if config.enable_stats_collection {
        log::info!(
            "Decompressed {} of {} declared bytes (end marker reached: {})",
            report.bytes_written,
            expected_len,
            report.reached_end_marker
        );
    }
    Ok(report)
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

fn log_code_table(table: &FrequencyTable, codes: &CodeTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    log::debug!("--- CODE TABLE ({} symbols) ---", codes.len());
    for (symbol, count) in table.iter() {
        log::debug!(
            "  {:<16} | count: {:>10} | code: {}",
            symbol.to_string(),
            count,
            codes.code_string(symbol).unwrap_or_default()
        );
    }
}
