//! MSB-first bit writer over any `Write`.

use std::io::Write;

use bitvec::prelude::*;

use crate::error::HuffmanError;
use crate::traits::BitSink;

use super::DEFAULT_BUFFER_CAPACITY;

/// Packs bits most-significant-first into bytes and writes them to `inner`.
///
/// Bits are staged in a `BitVec` and handed to the writer in whole bytes once
/// the staging buffer fills. `finish` zero-pads the final partial byte.
pub struct BitWriter<W: Write> {
    inner: W,
    pending: BitVec<u8, Msb0>,
    /// Flush threshold in bits; always a multiple of 8.
    flush_bits: usize,
    bits_written: u64,
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        let flush_bits = capacity.max(1) * 8;
        Self {
            inner,
            pending: BitVec::with_capacity(flush_bits),
            flush_bits,
            bits_written: 0,
            bytes_written: 0,
        }
    }

    /// Total bits accepted so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Total bytes handed to the underlying writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn drain_pending(&mut self) -> Result<(), HuffmanError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        // Dead bits in the last byte may hold stale data from before a clear.
        self.pending.set_uninitialized(false);
        let bytes = self.pending.as_raw_slice();
        self.inner.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        self.pending.clear();
        Ok(())
    }
}

impl<W: Write> BitSink for BitWriter<W> {
    fn write_bit(&mut self, bit: bool) -> Result<(), HuffmanError> {
        self.pending.push(bit);
        self.bits_written += 1;
        if self.pending.len() >= self.flush_bits {
            self.drain_pending()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HuffmanError> {
        self.drain_pending()?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_str(sink: &mut impl BitSink, bits: &str) {
        for c in bits.chars() {
            sink.write_bit(c == '1').unwrap();
        }
    }

    #[test]
    fn test_packs_msb_first_and_pads_with_zeros() {
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        write_str(&mut writer, "1010110011");
        writer.finish().unwrap();
        assert_eq!(writer.bits_written(), 10);
        assert_eq!(writer.bytes_written(), 2);
        drop(writer);
        assert_eq!(out, vec![0b1010_1100, 0b1100_0000]);
    }

    #[test]
    fn test_small_capacity_flushes_whole_bytes_and_clears_stale_bits() {
        let mut out = Vec::new();
        let mut writer = BitWriter::with_capacity(1, &mut out);
        write_str(&mut writer, "11111111");
        write_str(&mut writer, "0");
        writer.finish().unwrap();
        drop(writer);
        assert_eq!(out, vec![0xFF, 0x00]);
    }

    #[test]
    fn test_finish_without_bits_writes_nothing() {
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        writer.finish().unwrap();
        drop(writer);
        assert!(out.is_empty());
    }
}
