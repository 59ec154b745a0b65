//! Accumulating opaque text buffer
//!
//! [`TextBuffer`] is the checkpoint-side analog of an output text stream a
//! simulation accumulates into between checkpoints. It is deliberately a
//! distinct type from `String`: at the caller layer it is constructed by
//! appending and drained wholesale, and its checkpoint encoding is
//! independent of the plain-string encoding.

use std::fmt;

/// Accumulating text buffer with [`fmt::Write`] support
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    data: String,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string slice to the buffer
    pub fn push_str(&mut self, s: &str) {
        self.data.push_str(s);
    }

    /// Current contents
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Length of the contents in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Discard the contents
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consume the buffer, yielding its contents
    pub fn into_string(self) -> String {
        self.data
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.data.push_str(s);
        Ok(())
    }
}

impl From<String> for TextBuffer {
    fn from(data: String) -> Self {
        Self { data }
    }
}

impl From<&str> for TextBuffer {
    fn from(data: &str) -> Self {
        Self {
            data: data.to_string(),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
