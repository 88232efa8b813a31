//! The bit encoder: the second pass over the input.

use crate::error::HuffmanError;
use crate::traits::{BitSink, ByteSource};
use crate::types::{CodeTable, Symbol};

/// Emits the code of every byte read from `source`, followed by the
/// END_OF_DATA code. Returns the number of bits written.
///
/// The sink is not finished here; the caller owns the sink's lifecycle.
///
/// # Errors
/// `MissingCode` if a byte (or END_OF_DATA) has no entry in `codes`. This only
/// happens if `codes` was derived from a table that did not come from this
/// same input.
pub fn encode<S, W>(source: &mut S, codes: &CodeTable, sink: &mut W) -> Result<u64, HuffmanError>
where
    S: ByteSource + ?Sized,
    W: BitSink + ?Sized,
{
    let mut bits_written = 0u64;
    while let Some(byte) = source.read_byte()? {
        bits_written += emit(Symbol::Byte(byte), codes, sink)?;
    }
    bits_written += emit(Symbol::EndOfData, codes, sink)?;

    log_metric!("event" = "encode", "payload_bits" = bits_written);
    Ok(bits_written)
}

fn emit<W>(symbol: Symbol, codes: &CodeTable, sink: &mut W) -> Result<u64, HuffmanError>
where
    W: BitSink + ?Sized,
{
    let code = codes.get(symbol).ok_or(HuffmanError::MissingCode(symbol))?;
    for bit in code.iter().by_vals() {
        sink.write_bit(bit)?;
    }
    Ok(code.len() as u64)
}
