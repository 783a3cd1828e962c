//! The JSON number lexer: `[-]?(0|[1-9][0-9]*)([.][0-9]+)?([eE][+-]?[0-9]+)?`.
//!
//! States correspond to meaningful boundaries of the grammar. The original
//! C implementation dispatches across a `switch` using computed-goto entry
//! labels so a call can resume mid-state; here each state is a variant of
//! [`State`] and resumption falls naturally out of `match`ing on
//! `self.state` at the top of every `feed` call.

use crate::buffer::ByteBuffer;

use super::{ParseError, ParseStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    GotNegative,
    GotZero,
    GotNonzero,
    GotSeparator,
    GotFractionDigit,
    GotExponent,
    GotExpSign,
    GotExpDigit,
}

/// Whether a fully-accumulated number is an integer or carries a fraction
/// and/or exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

/// The decoded value of a number, once [`NumberAccumulator::result`] has
/// been called on a `Ready` accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
}

/// The largest magnitude a positive `i64`-representable integer can have.
const POSITIVE_MAGNITUDE_LIMIT: u64 = i64::MAX as u64;
/// The largest magnitude a negative `i64`-representable integer can have
/// (`i64::MIN`'s magnitude is one greater than `i64::MAX`'s).
const NEGATIVE_MAGNITUDE_LIMIT: u64 = (i64::MAX as u64) + 1;

/// Incrementally accumulates one JSON number across arbitrarily-chunked
/// input.
#[derive(Debug, Clone)]
pub struct NumberAccumulator {
    state: State,
    kind: NumberKind,
    /// The as-written textual form, normalizing `E` to `e`. ASCII only.
    text: ByteBuffer,
    int_value: u64,
    int_overflow: bool,
    int_negative: bool,
}

impl Default for NumberAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberAccumulator {
    pub fn new() -> Self {
        Self {
            state: State::Init,
            kind: NumberKind::Integer,
            text: ByteBuffer::new(),
            int_value: 0,
            int_overflow: false,
            int_negative: false,
        }
    }

    fn push_text(&mut self, byte: u8) {
        self.text.push(byte);
    }

    fn accumulate_digit(&mut self, digit: u8) {
        if self.int_overflow {
            return;
        }
        let limit = if self.int_negative {
            NEGATIVE_MAGNITUDE_LIMIT
        } else {
            POSITIVE_MAGNITUDE_LIMIT
        };
        match self
            .int_value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) if v <= limit => self.int_value = v,
            _ => self.int_overflow = true,
        }
    }

    /// Feeds a chunk of bytes, advancing the state machine as far as the
    /// grammar allows. Returns the parse status alongside whatever suffix
    /// of `chunk` was not needed to reach that status — non-empty only when
    /// the status is `Ready` and a number-terminating byte was found.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is empty; callers are expected to only call `feed`
    /// with a non-empty chunk, exactly like the original.
    pub fn feed<'a>(
        &mut self,
        mut chunk: &'a [u8],
    ) -> Result<(ParseStatus, &'a [u8]), ParseError> {
        assert!(!chunk.is_empty(), "feed requires a non-empty chunk");

        loop {
            let byte = chunk[0];
            match self.state {
                State::Init => match byte {
                    b'0' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                        self.state = State::GotZero;
                    }
                    b'-' => {
                        chunk = &chunk[1..];
                        self.int_negative = true;
                        self.push_text(byte);
                        self.state = State::GotNegative;
                    }
                    b'1'..=b'9' => {
                        chunk = &chunk[1..];
                        self.accumulate_digit(byte - b'0');
                        self.push_text(byte);
                        self.state = State::GotNonzero;
                    }
                    other => {
                        return Err(ParseError::UnexpectedByte {
                            byte: other,
                            context: "start of number",
                        });
                    }
                },
                State::GotNegative => match byte {
                    b'0' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                        self.state = State::GotZero;
                    }
                    b'1'..=b'9' => {
                        chunk = &chunk[1..];
                        self.accumulate_digit(byte - b'0');
                        self.push_text(byte);
                        self.state = State::GotNonzero;
                    }
                    other => {
                        return Err(ParseError::UnexpectedByte {
                            byte: other,
                            context: "number after '-'",
                        });
                    }
                },
                State::GotZero => match byte {
                    b'.' => {
                        chunk = &chunk[1..];
                        self.kind = NumberKind::Float;
                        self.push_text(b'.');
                        self.state = State::GotSeparator;
                    }
                    b'e' | b'E' => {
                        chunk = &chunk[1..];
                        self.kind = NumberKind::Float;
                        self.push_text(b'e');
                        self.state = State::GotExponent;
                    }
                    _ => return Ok((ParseStatus::Ready, chunk)),
                },
                State::GotNonzero => match byte {
                    b'0'..=b'9' => {
                        chunk = &chunk[1..];
                        self.accumulate_digit(byte - b'0');
                        self.push_text(byte);
                    }
                    b'.' => {
                        chunk = &chunk[1..];
                        self.kind = NumberKind::Float;
                        self.push_text(b'.');
                        self.state = State::GotSeparator;
                    }
                    b'e' | b'E' => {
                        chunk = &chunk[1..];
                        self.kind = NumberKind::Float;
                        self.push_text(b'e');
                        self.state = State::GotExponent;
                    }
                    _ => return Ok((ParseStatus::Ready, chunk)),
                },
                State::GotSeparator => match byte {
                    b'0'..=b'9' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                        self.state = State::GotFractionDigit;
                    }
                    other => {
                        return Err(ParseError::UnexpectedByte {
                            byte: other,
                            context: "fraction digit after '.'",
                        });
                    }
                },
                State::GotFractionDigit => match byte {
                    b'0'..=b'9' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                    }
                    b'e' | b'E' => {
                        chunk = &chunk[1..];
                        self.push_text(b'e');
                        self.state = State::GotExponent;
                    }
                    _ => return Ok((ParseStatus::Ready, chunk)),
                },
                State::GotExponent => match byte {
                    b'+' | b'-' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                        self.state = State::GotExpSign;
                    }
                    b'0'..=b'9' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                        self.state = State::GotExpDigit;
                    }
                    other => {
                        return Err(ParseError::UnexpectedByte {
                            byte: other,
                            context: "exponent",
                        });
                    }
                },
                State::GotExpSign => {
                    if byte.is_ascii_digit() {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                        self.state = State::GotExpDigit;
                    } else {
                        return Ok((ParseStatus::Ready, chunk));
                    }
                }
                State::GotExpDigit => match byte {
                    b'0'..=b'9' => {
                        chunk = &chunk[1..];
                        self.push_text(byte);
                    }
                    _ => return Ok((ParseStatus::Ready, chunk)),
                },
            }

            if chunk.is_empty() {
                return Ok((self.status_on_exhaustion(), chunk));
            }
        }
    }

    /// The status to report when the chunk runs out right after reaching
    /// `self.state`.
    fn status_on_exhaustion(&self) -> ParseStatus {
        match self.state {
            State::GotNegative | State::GotSeparator | State::GotExponent | State::GotExpSign => {
                ParseStatus::NeedMore
            }
            State::GotZero | State::GotNonzero | State::GotFractionDigit | State::GotExpDigit => {
                ParseStatus::Ready
            }
            State::Init => unreachable!("a consumed byte always leaves the Init state"),
        }
    }

    /// Extracts the decoded value. Only meaningful once `feed` has returned
    /// `Ready`.
    pub fn result(&self) -> Result<(NumberKind, NumberValue), ParseError> {
        match self.kind {
            NumberKind::Integer => {
                if self.int_overflow {
                    Err(ParseError::IntegerOverflow)
                } else {
                    let magnitude = self.int_value as i64;
                    let value = if self.int_negative {
                        magnitude.wrapping_neg()
                    } else {
                        magnitude
                    };
                    Ok((NumberKind::Integer, NumberValue::Integer(value)))
                }
            }
            NumberKind::Float => {
                let text = self.as_written();
                match text.parse::<f64>() {
                    Ok(value) if value.is_finite() => {
                        Ok((NumberKind::Float, NumberValue::Float(value)))
                    }
                    Ok(_) => Err(ParseError::FloatOutOfRange(text.to_string())),
                    Err(_) => Err(ParseError::MalformedNumber(text.to_string())),
                }
            }
        }
    }

    /// The as-written textual form of the number, normalizing `E` to `e`.
    pub fn as_written(&self) -> &str {
        std::str::from_utf8(self.text.as_slice()).expect("number text is always ASCII")
    }
}
