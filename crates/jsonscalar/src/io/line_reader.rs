use crate::buffer::ByteBuffer;

use super::{ByteSource, IoError};

/// Adapts an arbitrary [`ByteSource`] into one call-per-line reads.
///
/// Each call to [`LineReader::read_line`] returns exactly one line: the
/// bytes up to and including the next `b'\n'`, or — only on the final call
/// before end-of-stream — the trailing partial line without a terminating
/// `b'\n'`. After that first partial line is returned, every subsequent
/// call returns a zero-length slice.
pub struct LineReader<S> {
    source: S,
    buffer: ByteBuffer,
    /// Bytes of `buffer`'s current prefix already handed to the caller by
    /// the previous `read_line` call; discarded at the top of the next one.
    bytes_returned: usize,
    at_eof: bool,
}

impl<S: ByteSource> LineReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: ByteBuffer::new(),
            bytes_returned: 0,
            at_eof: false,
        }
    }

    /// Opens the underlying byte source.
    pub fn open(&mut self) -> Result<(), IoError> {
        self.source.open()
    }

    /// Returns the next line, including its trailing `b'\n'` if present.
    pub fn read_line(&mut self) -> Result<&[u8], IoError> {
        if self.at_eof {
            return Ok(&[]);
        }

        self.buffer.discard_front(self.bytes_returned);
        self.bytes_returned = 0;

        if let Some(n) = find_newline(self.buffer.as_slice()) {
            self.bytes_returned = n;
            return Ok(&self.buffer.as_slice()[..n]);
        }

        loop {
            let chunk = self.source.read()?;
            if chunk.is_empty() {
                self.at_eof = true;
                self.bytes_returned = self.buffer.len();
                return Ok(self.buffer.as_slice());
            }
            self.buffer.append(chunk);

            if let Some(n) = find_newline(self.buffer.as_slice()) {
                self.bytes_returned = n;
                return Ok(&self.buffer.as_slice()[..n]);
            }
        }
    }
}

/// Returns the length of the prefix up to and including the first `b'\n'`,
/// or `None` if no newline is present yet.
fn find_newline(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n').map(|i| i + 1)
}
