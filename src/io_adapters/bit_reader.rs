//! MSB-first bit reader over any `Read`.

use std::io::{self, Read};

use bitvec::prelude::*;

use crate::error::HuffmanError;
use crate::traits::BitSource;

use super::DEFAULT_BUFFER_CAPACITY;

/// Unpacks bytes from `inner` into bits, most significant bit first.
pub struct BitReader<R: Read> {
    inner: R,
    buffer: BitVec<u8, Msb0>,
    cursor: usize,
    chunk_size: usize,
    exhausted: bool,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buffer: BitVec::new(),
            cursor: 0,
            chunk_size: capacity.max(1),
            exhausted: false,
        }
    }

    /// Reads the next chunk of bytes. Leaves the buffer empty at end of input.
    fn refill(&mut self) -> Result<(), HuffmanError> {
        let mut bytes = vec![0u8; self.chunk_size];
        let filled = loop {
            match self.inner.read(&mut bytes) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        if filled == 0 {
            self.exhausted = true;
        }
        bytes.truncate(filled);
        self.buffer = BitVec::from_vec(bytes);
        self.cursor = 0;
        Ok(())
    }
}

impl<R: Read> BitSource for BitReader<R> {
    fn read_bit(&mut self) -> Result<Option<bool>, HuffmanError> {
        if self.cursor == self.buffer.len() {
            if self.exhausted {
                return Ok(None);
            }
            self.refill()?;
            if self.buffer.is_empty() {
                return Ok(None);
            }
        }
        let bit = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(Some(bit))
    }
}
