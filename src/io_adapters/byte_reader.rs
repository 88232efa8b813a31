//! Sequential, rewindable byte reader over any `Read + Seek`.

use std::io::{self, BufReader, Read, Seek, SeekFrom};

use crate::error::HuffmanError;
use crate::traits::ByteSource;

use super::DEFAULT_BUFFER_CAPACITY;

pub struct ByteReader<R: Read + Seek> {
    inner: BufReader<R>,
    /// Position of the underlying reader when it was wrapped; `rewind` returns here.
    start: u64,
}

impl<R: Read + Seek> ByteReader<R> {
    pub fn new(inner: R) -> Result<Self, HuffmanError> {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, mut inner: R) -> Result<Self, HuffmanError> {
        let start = inner.stream_position()?;
        Ok(Self {
            inner: BufReader::with_capacity(capacity, inner),
            start,
        })
    }
}

impl<R: Read + Seek> ByteSource for ByteReader<R> {
    fn read_byte(&mut self) -> Result<Option<u8>, HuffmanError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn rewind(&mut self) -> Result<(), HuffmanError> {
        // Seeking a BufReader discards its buffer.
        self.inner.seek(SeekFrom::Start(self.start))?;
        Ok(())
    }
}
