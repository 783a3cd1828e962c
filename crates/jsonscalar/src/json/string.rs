//! The JSON string lexer: raw bytes up to an unescaped `"`, with the six
//! short escapes and `\uXXXX` unicode escapes.

use crate::buffer::ByteBuffer;

use super::{ParseError, ParseStatus};

/// Incrementally accumulates one JSON string body (the bytes between, but
/// not including, the surrounding quotes) across arbitrarily-chunked input.
///
/// Mirrors the original's `json_string_t`: `escape_seq_len` tracks how far
/// into an escape sequence we are (`0` outside one, `1` right after the
/// backslash, `2..=6` while collecting `\uXXXX` hex digits), and
/// `unicode_escaped_value` accumulates the 16-bit codepoint as hex digits
/// arrive.
#[derive(Debug, Clone, Default)]
pub struct StringAccumulator {
    output: ByteBuffer,
    escape_seq_len: u8,
    unicode_escaped_value: u16,
}

impl StringAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk of bytes. Returns the parse status alongside whatever
    /// suffix of `chunk` was not consumed — non-empty only when `Ready`,
    /// holding everything from (and including) the closing `"` onward.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is empty.
    pub fn feed<'a>(
        &mut self,
        mut chunk: &'a [u8],
    ) -> Result<(ParseStatus, &'a [u8]), ParseError> {
        assert!(!chunk.is_empty(), "feed requires a non-empty chunk");

        if self.escape_seq_len == 1 {
            match self.resume_simple_escape(&mut chunk)? {
                Some(status) => return Ok((status, chunk)),
                None => {}
            }
        } else if self.escape_seq_len >= 2 {
            match self.resume_unicode_escape(&mut chunk)? {
                Some(status) => return Ok((status, chunk)),
                None => {}
            }
        }

        loop {
            if chunk.is_empty() {
                return Ok((ParseStatus::NeedMore, chunk));
            }

            let unescaped_len = chunk
                .iter()
                .position(|&b| b == b'"' || b == b'\\')
                .unwrap_or(chunk.len());
            if unescaped_len > 0 {
                self.output.append(&chunk[..unescaped_len]);
                chunk = &chunk[unescaped_len..];
            }

            if chunk.is_empty() {
                return Ok((ParseStatus::NeedMore, chunk));
            }

            if chunk[0] == b'"' {
                return Ok((ParseStatus::Ready, chunk));
            }

            // chunk[0] == b'\\'
            chunk = &chunk[1..];
            self.escape_seq_len = 1;
            if chunk.is_empty() {
                return Ok((ParseStatus::NeedMore, chunk));
            }
            match self.resume_simple_escape(&mut chunk)? {
                Some(status) => return Ok((status, chunk)),
                None => continue,
            }
        }
    }

    /// Handles the byte immediately following a backslash. On entry,
    /// `escape_seq_len == 1` and `chunk` is non-empty.
    ///
    /// Returns `Some(status)` when the caller should return immediately
    /// (either `NeedMore` because `chunk` is now empty, or a decision was
    /// already folded into `chunk`), or `None` to keep scanning for more
    /// unescaped bytes in the same call.
    fn resume_simple_escape(
        &mut self,
        chunk: &mut &[u8],
    ) -> Result<Option<ParseStatus>, ParseError> {
        if chunk.is_empty() {
            return Ok(Some(ParseStatus::NeedMore));
        }

        let byte = chunk[0];
        let decoded = match byte {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                self.escape_seq_len = 2;
                *chunk = &chunk[1..];
                return self.resume_unicode_escape(chunk);
            }
            other => return Err(ParseError::UnsupportedEscape(other)),
        };

        *chunk = &chunk[1..];
        self.output.push(decoded);
        self.escape_seq_len = 0;
        self.unicode_escaped_value = 0;

        if chunk.is_empty() {
            Ok(Some(ParseStatus::NeedMore))
        } else {
            Ok(None)
        }
    }

    /// Collects hex digits for a `\uXXXX` escape. On entry,
    /// `escape_seq_len` is in `2..=6`.
    fn resume_unicode_escape(
        &mut self,
        chunk: &mut &[u8],
    ) -> Result<Option<ParseStatus>, ParseError> {
        while !chunk.is_empty() && self.escape_seq_len < 6 {
            let byte = chunk[0];
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(ParseError::InvalidUnicodeEscape { byte }),
            };
            self.unicode_escaped_value = (self.unicode_escaped_value << 4) | u16::from(digit);
            self.escape_seq_len += 1;
            *chunk = &chunk[1..];
        }

        if self.escape_seq_len < 6 {
            return Ok(Some(ParseStatus::NeedMore));
        }

        append_u16_as_utf8(&mut self.output, self.unicode_escaped_value);
        self.unicode_escaped_value = 0;
        self.escape_seq_len = 0;

        if chunk.is_empty() {
            Ok(Some(ParseStatus::NeedMore))
        } else {
            Ok(None)
        }
    }

    /// The decoded string body accumulated so far. Only meaningful once
    /// `feed` has returned `Ready`.
    pub fn as_bytes(&self) -> &[u8] {
        self.output.as_slice()
    }

    /// Consumes the accumulator, yielding the decoded body as a `String`.
    ///
    /// JSON permits unpaired UTF-16 surrogates to appear via `\uXXXX`
    /// escapes; since those are not valid UTF-8 on their own, this yields
    /// the replacement character for any byte run they produced.
    pub fn into_string_lossy(self) -> String {
        String::from_utf8_lossy(self.output.as_slice()).into_owned()
    }
}

/// Encodes a raw 16-bit value (which may be an unpaired UTF-16 surrogate,
/// not just a valid Unicode scalar value) as UTF-8 bytes.
///
/// `char::encode_utf8` cannot be used here: it requires a valid `char`,
/// which excludes the surrogate range `0xD800..=0xDFFF` entirely, but the
/// original faithfully emits a (technically invalid) three-byte UTF-8
/// encoding for any 16-bit value, surrogate or not.
fn append_u16_as_utf8(output: &mut ByteBuffer, value: u16) {
    if value <= 0x007f {
        output.push(value as u8);
    } else if value <= 0x07ff {
        output.push(((value >> 6) as u8) | 0xc0);
        output.push(((value & 0x3f) as u8) | 0x80);
    } else {
        output.push(((value >> 12) as u8) | 0xe0);
        output.push((((value >> 6) & 0x3f) as u8) | 0x80);
        output.push(((value & 0x3f) as u8) | 0x80);
    }
}
