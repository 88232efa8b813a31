//! Defines the self-delimiting on-disk header that carries the frequency table.
//! This module is the single source of truth for serialization, deserialization,
//! and metadata peeking of the header.
//!
//! The header must reproduce the exact symbol-to-count mapping, END_OF_DATA
//! included, because the decompressor rebuilds the tree from it alone.

use std::collections::BTreeSet;
use std::io::{Cursor, Read, Write};

use serde::{Deserialize, Serialize};

use crate::bridge::format::{
    FIXED_HEADER_SIZE, MAX_HEADER_BODY_LEN, STREAM_FORMAT_VERSION, STREAM_MAGIC,
};
use crate::config::HeaderFormat;
use crate::error::HuffmanError;
use crate::kernels::leb128;
use crate::types::{FrequencyTable, Symbol};

//==================================================================================
// Public Structs
//==================================================================================

/// Metadata extracted from a header. `header_size` is where the payload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub format_version: u16,
    pub body_format: HeaderFormat,
    pub table: FrequencyTable,
    pub header_size: usize,
}

/// One entry of the JSON body.
#[derive(Serialize, Deserialize, Debug)]
struct JsonEntry {
    symbol: Symbol,
    count: u64,
}

//==================================================================================
// Writing
//==================================================================================

/// Writes the header for `table` and returns its size in bytes.
pub fn write_header<W>(
    writer: &mut W,
    table: &FrequencyTable,
    format: HeaderFormat,
) -> Result<usize, HuffmanError>
where
    W: Write + ?Sized,
{
    let body = match format {
        HeaderFormat::Binary => encode_binary_body(table)?,
        HeaderFormat::Json => encode_json_body(table)?,
    };
    if body.len() > MAX_HEADER_BODY_LEN {
        return Err(HuffmanError::InternalError(format!(
            "header body of {} bytes exceeds the {} byte limit",
            body.len(),
            MAX_HEADER_BODY_LEN
        )));
    }

    let mut fixed = Vec::with_capacity(FIXED_HEADER_SIZE);
    fixed.extend_from_slice(STREAM_MAGIC);
    fixed.extend_from_slice(&STREAM_FORMAT_VERSION.to_le_bytes());
    fixed.push(format.tag());
    fixed.extend_from_slice(&(body.len() as u32).to_le_bytes());

    writer.write_all(&fixed)?;
    writer.write_all(&body)?;
    Ok(fixed.len() + body.len())
}

fn encode_binary_body(table: &FrequencyTable) -> Result<Vec<u8>, HuffmanError> {
    let mut body = Vec::with_capacity(1 + table.len() * 4);
    leb128::encode_one(table.len() as u64, &mut body)?;
    for (symbol, count) in table.iter() {
        leb128::encode_one(symbol.code(), &mut body)?;
        leb128::encode_one(count, &mut body)?;
    }
    Ok(body)
}

fn encode_json_body(table: &FrequencyTable) -> Result<Vec<u8>, HuffmanError> {
    let entries: Vec<JsonEntry> = table
        .iter()
        .map(|(symbol, count)| JsonEntry { symbol, count })
        .collect();
    Ok(serde_json::to_vec(&entries)?)
}

//==================================================================================
// Reading
//==================================================================================

/// Reads a header from `reader`, consuming exactly the header bytes and
/// leaving the reader positioned at the first payload byte.
pub fn read_header_info<R>(reader: &mut R) -> Result<HeaderInfo, HuffmanError>
where
    R: Read + ?Sized,
{
    let map_err = |e: std::io::Error| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            HuffmanError::MalformedHeader("stream ends inside the header".to_string())
        }
        _ => HuffmanError::Io(e),
    };

    let mut fixed = [0u8; FIXED_HEADER_SIZE];
    reader.read_exact(&mut fixed).map_err(map_err)?;

    if fixed[0..4] != STREAM_MAGIC[..] {
        return Err(HuffmanError::MalformedHeader(
            "invalid stream magic number".to_string(),
        ));
    }

    let version = u16::from_le_bytes([fixed[4], fixed[5]]);
    if version != STREAM_FORMAT_VERSION {
        return Err(HuffmanError::MalformedHeader(format!(
            "unsupported stream version: expected {}, got {}",
            STREAM_FORMAT_VERSION, version
        )));
    }

    let body_format = HeaderFormat::from_tag(fixed[6]).ok_or_else(|| {
        HuffmanError::MalformedHeader(format!("unknown header body format tag {}", fixed[6]))
    })?;

    let body_len = u32::from_le_bytes([fixed[7], fixed[8], fixed[9], fixed[10]]) as usize;
    // SECURITY: bound the allocation before trusting the declared length.
    if body_len > MAX_HEADER_BODY_LEN {
        return Err(HuffmanError::MalformedHeader(format!(
            "declared header body of {} bytes exceeds the {} byte limit",
            body_len, MAX_HEADER_BODY_LEN
        )));
    }

    let mut body = vec![0u8; body_len];
    reader.read_exact(&mut body).map_err(map_err)?;

    let table = match body_format {
        HeaderFormat::Binary => decode_binary_body(&body)?,
        HeaderFormat::Json => decode_json_body(&body)?,
    };
    table.validate()?;

    Ok(HeaderInfo {
        format_version: version,
        body_format,
        table,
        header_size: FIXED_HEADER_SIZE + body_len,
    })
}

/// Peeks into a compressed buffer's header without touching the payload.
pub fn peek_info(bytes: &[u8]) -> Result<HeaderInfo, HuffmanError> {
    read_header_info(&mut Cursor::new(bytes))
}

/// Accumulates entries while rejecting duplicates.
fn insert_unique(
    table: &mut FrequencyTable,
    seen: &mut BTreeSet<Symbol>,
    symbol: Symbol,
    count: u64,
) -> Result<(), HuffmanError> {
    if !seen.insert(symbol) {
        return Err(HuffmanError::MalformedHeader(format!(
            "symbol {} appears more than once",
            symbol
        )));
    }
    table.insert(symbol, count);
    Ok(())
}

fn decode_binary_body(body: &[u8]) -> Result<FrequencyTable, HuffmanError> {
    let mut rest = body;

    let entry_count: u64 = leb128::decode_one(&mut rest)?;
    // 256 bytes + END_OF_DATA is the whole alphabet.
    if entry_count > 257 {
        return Err(HuffmanError::MalformedHeader(format!(
            "{} entries exceed the alphabet size",
            entry_count
        )));
    }

    let mut table = FrequencyTable::new();
    let mut seen = BTreeSet::new();
    for _ in 0..entry_count {
        let code: u16 = leb128::decode_one(&mut rest)?;
        let count: u64 = leb128::decode_one(&mut rest)?;
        let symbol = Symbol::from_code(code).ok_or_else(|| {
            HuffmanError::MalformedHeader(format!("symbol code {} is outside the alphabet", code))
        })?;
        insert_unique(&mut table, &mut seen, symbol, count)?;
    }

    if !rest.is_empty() {
        return Err(HuffmanError::MalformedHeader(
            "trailing bytes after the last table entry".to_string(),
        ));
    }
    Ok(table)
}

fn decode_json_body(body: &[u8]) -> Result<FrequencyTable, HuffmanError> {
    let entries: Vec<JsonEntry> = serde_json::from_slice(body)
        .map_err(|e| HuffmanError::MalformedHeader(format!("invalid JSON table: {}", e)))?;

    let mut table = FrequencyTable::new();
    let mut seen = BTreeSet::new();
    for entry in entries {
        insert_unique(&mut table, &mut seen, entry.symbol, entry.count)?;
    }
    Ok(table)
}
