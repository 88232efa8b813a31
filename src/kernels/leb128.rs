//! LEB128 (Little-Endian Base 128) variable-length integers for the binary
//! header body.
//!
//! Symbol codes and counts are almost always small, so most take one byte.
//! Decoding reads from an advancing byte slice and reports every failure as
//! `MalformedHeader`, since the only input it ever sees is a header body.

use num_traits::{PrimInt, Unsigned};

use crate::error::HuffmanError;

//==================================================================================
// 1. Encoding
//==================================================================================

/// Appends the LEB128 encoding of `value` to `buffer`.
pub fn encode_one<T>(value: T, buffer: &mut Vec<u8>) -> Result<(), HuffmanError>
where
    T: PrimInt + Unsigned,
{
    let mut rest = value.to_u64().ok_or_else(|| {
        HuffmanError::InternalError("varint values wider than 64 bits are not supported".to_string())
    })?;
    loop {
        let low = (rest & 0x7F) as u8;
        rest >>= 7;
        if rest == 0 {
            buffer.push(low);
            return Ok(());
        }
        buffer.push(low | 0x80);
    }
}

//==================================================================================
// 2. Decoding
//==================================================================================

/// Decodes one value from the front of `input` and advances it past the
/// consumed bytes.
pub fn decode_one<T>(input: &mut &[u8]) -> Result<T, HuffmanError>
where
    T: PrimInt + Unsigned,
{
    let overflow = || {
        HuffmanError::MalformedHeader(format!(
            "varint does not fit in {} bits",
            std::mem::size_of::<T>() * 8
        ))
    };

    let mut value = 0u64;
    let mut shift = 0u32;
    loop {
        let (&byte, rest) = input.split_first().ok_or_else(|| {
            HuffmanError::MalformedHeader("varint runs past the end of the header body".to_string())
        })?;
        *input = rest;

        let payload = u64::from(byte & 0x7F);
        if shift >= 64 || (shift > 0 && payload >> (64 - shift) != 0) {
            return Err(overflow());
        }
        value |= payload << shift;

        if byte & 0x80 == 0 {
            return T::from(value).ok_or_else(overflow);
        }
        shift += 7;
    }
}
