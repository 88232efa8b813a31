//! This module defines the I/O capabilities the kernels are written against.
//!
//! The kernels never touch `std::io` directly; they read and write through
//! these three traits. Concrete adapters over `Read`/`Write`/`Seek` live in
//! `io_adapters`, and tests can supply in-memory implementations.

use crate::error::HuffmanError;

/// A sequential byte reader that can be repositioned to where it started.
pub trait ByteSource {
    /// Returns the next byte, or `Ok(None)` once the input is exhausted.
    fn read_byte(&mut self) -> Result<Option<u8>, HuffmanError>;

    /// Repositions the reader to its starting point.
    fn rewind(&mut self) -> Result<(), HuffmanError>;
}

/// Appends single bits, packing them into bytes.
pub trait BitSink {
    fn write_bit(&mut self, bit: bool) -> Result<(), HuffmanError>;

    /// Pads the trailing partial byte, writes it out and flushes.
    fn finish(&mut self) -> Result<(), HuffmanError>;
}

/// Yields single bits unpacked from bytes.
pub trait BitSource {
    /// Returns the next bit, or `Ok(None)` once the input is exhausted.
    /// `Err` is reserved for genuine I/O failures.
    fn read_bit(&mut self) -> Result<Option<bool>, HuffmanError>;
}
