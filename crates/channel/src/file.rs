//! File-backed byte channels
//!
//! A checkpoint file is exactly the concatenation of the bytes written to a
//! [`FileWriter`]: no header, no framing, no trailer. [`FileReader`] reads
//! the same bytes back in order.

use crate::{ByteSink, ByteSource};
use meshpoint_core::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// When a [`FileWriter`] forces written bytes to disk
///
/// # Default
///
/// The default is `OnClose`: a checkpoint is written in one pass and only
/// needs to be durable once complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// fsync on every [`FileWriter::flush`] call (slow, maximum durability)
    OnFlush,
    /// fsync once when the writer is finished or dropped
    #[default]
    OnClose,
}

/// Write side of a file-backed byte channel
///
/// Creates parent directories as needed and truncates any existing file at
/// the path: a checkpoint replaces its predecessor wholesale. Writes are
/// buffered; call [`FileWriter::finish`] to flush and sync explicitly, or
/// rely on the best-effort flush in `Drop`.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    sync_mode: SyncMode,
}

impl FileWriter {
    /// Create (or truncate) the file at `path` for writing
    pub fn create<P: AsRef<Path>>(path: P, sync_mode: SyncMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&path)?;
        debug!(path = %path.display(), ?sync_mode, "opened checkpoint file for writing");

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            sync_mode,
        })
    }

    /// Flush buffered writes to the OS
    ///
    /// In [`SyncMode::OnFlush`] this also forces the bytes to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        if self.sync_mode == SyncMode::OnFlush {
            self.writer.get_ref().sync_all()?;
        }
        Ok(())
    }

    /// Flush, force to disk, and close the writer
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        debug!(path = %self.path.display(), "finished checkpoint file");
        Ok(())
    }

    /// Path of the file being written
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSink for FileWriter {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Best-effort: a writer abandoned mid-checkpoint still flushes what
        // it has, but only finish() reports failures.
        let _ = self.writer.flush();
        if self.sync_mode == SyncMode::OnClose {
            let _ = self.writer.get_ref().sync_all();
        }
    }
}

/// Read side of a file-backed byte channel
#[derive(Debug)]
pub struct FileReader {
    path: PathBuf,
    reader: BufReader<File>,
}

impl FileReader {
    /// Open the file at `path` for reading from the start
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        debug!(path = %path.display(), "opened checkpoint file for reading");

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Path of the file being read
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileReader {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.reader.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(Error::Underrun {
                    requested: buf.len(),
                    available: filled,
                });
            }
            filled += n;
        }
        Ok(())
    }
}
