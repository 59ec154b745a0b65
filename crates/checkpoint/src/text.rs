//! Text primitives
//!
//! `String` is length-prefixed with a native-order `u32` and written as
//! raw UTF-8 bytes, no terminator. [`TextBuffer`] gets an independent
//! encoding with a `u64` prefix: the two types have different
//! construction/retrieval semantics at the caller layer even though their
//! shapes are similar, and the prefix widths deliberately differ.

use crate::{CheckpointContext, Load, Store};
use meshpoint_channel::{ByteSink, ByteSource};
use meshpoint_core::{Error, Result, TextBuffer};

impl Store for String {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        // Length must fit the u32 prefix; longer strings are a caller
        // error and are not checked on this path.
        let len = self.len() as u32;
        len.store(sink, ctx)?;
        sink.write_bytes(self.as_bytes())
    }
}

impl Load for String {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut len = 0u32;
        len.load(source, ctx)?;

        let mut bytes = vec![0u8; len as usize];
        source.read_bytes(&mut bytes)?;

        *self = String::from_utf8(bytes)
            .map_err(|e| Error::Corruption(format!("invalid UTF-8 in stored string: {}", e)))?;
        Ok(())
    }
}

impl Store for TextBuffer {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        let len = self.len() as u64;
        len.store(sink, ctx)?;
        sink.write_bytes(self.as_str().as_bytes())
    }
}

impl Load for TextBuffer {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut len = 0u64;
        len.load(source, ctx)?;

        let mut bytes = vec![0u8; len as usize];
        source.read_bytes(&mut bytes)?;

        let contents = String::from_utf8(bytes)
            .map_err(|e| Error::Corruption(format!("invalid UTF-8 in stored text buffer: {}", e)))?;
        *self = TextBuffer::from(contents);
        Ok(())
    }
}
