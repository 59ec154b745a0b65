//! Byte channels for checkpoint I/O
//!
//! A channel is an ordered sink or source of raw bytes with an implicit
//! cursor that store/load calls advance monotonically. There is no seeking,
//! no type awareness, and no buffering contract across calls beyond what
//! the backing implementation guarantees.
//!
//! Implementations:
//! - In-memory: `Vec<u8>` as a sink, [`SliceReader`] as a source
//! - File-backed: [`FileWriter`] / [`FileReader`]
//!
//! A channel is not safe for concurrent writers: the cursor is not
//! synchronized. Concurrent checkpointing units must each own a distinct
//! channel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;

pub use file::{FileReader, FileWriter, SyncMode};
pub use memory::SliceReader;

use meshpoint_core::Result;

/// Write side of a byte channel
pub trait ByteSink {
    /// Append exactly `bytes.len()` raw bytes at the current position
    ///
    /// A short write is never a partial success: on error the channel is
    /// left at an unspecified position and must not be reused.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Read side of a byte channel
pub trait ByteSource {
    /// Fill `buf` exactly, consuming `buf.len()` bytes
    ///
    /// Fails with [`meshpoint_core::Error::Underrun`] if fewer bytes
    /// remain; the contents of `buf` are unspecified on error.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_bytes(buf)
    }
}
