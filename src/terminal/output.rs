//! `OutputBuffer`: Single-syscall output buffer for one frame.

use std::io::Write;

/// Pre-allocated buffer for building a frame's escape sequences and glyphs.
///
/// All output is accumulated here, then written in a single `write_all()`
/// and flushed, so a frame reaches the terminal without buffering delay.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal frame.
    ///
    /// Every cell costs a cursor move (up to 12 bytes) plus a 3-byte glyph,
    /// so 80x24 needs roughly 32KB.
    pub fn new() -> Self {
        Self::with_capacity(32 * 1024)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to terminal position (`row`, `col`).
    ///
    /// Coordinates are passed through unchanged. Terminals are 1-indexed and
    /// clamp 0 onto the first line or column.
    #[inline]
    pub fn cursor_move(&mut self, row: u16, col: u16) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{row};{col}H");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_is_raw() {
        let mut out = OutputBuffer::with_capacity(16);
        out.cursor_move(0, 7);
        assert_eq!(out.as_bytes(), b"\x1b[0;7H");
    }

    #[test]
    fn test_flush_to_writes_everything() {
        let mut out = OutputBuffer::new();
        out.cursor_move(3, 4);
        out.write_str("█");

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, "\x1b[3;4H█".as_bytes());
        assert_eq!(out.len(), sink.len());

        out.clear();
        assert!(out.is_empty());
    }
}
