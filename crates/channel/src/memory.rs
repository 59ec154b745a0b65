//! In-memory byte channels
//!
//! A `Vec<u8>` is the canonical in-memory sink; [`SliceReader`] is the
//! matching source over any byte slice, typically the vector written by a
//! prior store pass.

use crate::{ByteSink, ByteSource};
use meshpoint_core::{Error, Result};

impl ByteSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Read-only byte source over a slice with a consuming cursor
#[derive(Debug)]
pub struct SliceReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a reader positioned at the start of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor position in bytes
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to consume
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether every byte has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl ByteSource for SliceReader<'_> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let available = self.remaining();
        if buf.len() > available {
            return Err(Error::Underrun {
                requested: buf.len(),
                available,
            });
        }
        let end = self.pos + buf.len();
        buf.copy_from_slice(&self.buf[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}
