//! Top-level dispatch over the three kinds of JSON scalar value.

use super::number::{NumberAccumulator, NumberKind, NumberValue};
use super::string::StringAccumulator;
use super::{ParseError, ParseStatus};

/// A fully-decoded JSON scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    String(String),
    Integer(i64),
    Float(f64),
    True,
    False,
    Null,
}

#[derive(Debug, Clone)]
enum Inner {
    /// No byte has been consumed yet; the first byte decides which other
    /// variant this becomes.
    None,
    Str(StringAccumulator),
    Num(NumberAccumulator),
    /// Walking the tail of a `true`/`false`/`null` literal. `tail` is the
    /// expected remaining bytes (after whatever already matched);
    /// `resolved` is the value produced once the whole literal matches.
    Literal {
        tail: &'static [u8],
        matched: usize,
        resolved: JsonValue,
        name: &'static str,
    },
}

/// Non-consuming view of a [`ValueParser`]'s committed kind, carrying a
/// reference to the inner accumulator for STRING and NUMBER so a caller can
/// inspect the decoded value without taking ownership of the parser.
#[derive(Debug)]
pub enum ValueResult<'a> {
    String(&'a StringAccumulator),
    Number(&'a NumberAccumulator),
    True,
    False,
    Null,
}

/// Incrementally parses one JSON scalar value: a string, a number, or one
/// of the literals `true`, `false`, `null`.
///
/// On the first byte fed, the parser commits to exactly one of those kinds
/// and never changes its mind; every subsequent byte is routed to that
/// kind's own accumulator (or, for literals, to a simple tail-matching
/// cursor).
#[derive(Debug, Clone)]
pub struct ValueParser {
    inner: Inner,
}

impl Default for ValueParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueParser {
    pub fn new() -> Self {
        Self { inner: Inner::None }
    }

    /// Feeds a chunk of bytes. Returns the parse status alongside whatever
    /// suffix of `chunk` was not needed.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is empty.
    pub fn feed<'a>(
        &mut self,
        mut chunk: &'a [u8],
    ) -> Result<(ParseStatus, &'a [u8]), ParseError> {
        assert!(!chunk.is_empty(), "feed requires a non-empty chunk");

        if matches!(self.inner, Inner::None) {
            let byte = chunk[0];
            self.inner = match byte {
                b'"' => {
                    chunk = &chunk[1..];
                    Inner::Str(StringAccumulator::new())
                }
                b'-' | b'0'..=b'9' => Inner::Num(NumberAccumulator::new()),
                b't' => {
                    chunk = &chunk[1..];
                    Inner::Literal {
                        tail: b"rue",
                        matched: 0,
                        resolved: JsonValue::True,
                        name: "true",
                    }
                }
                b'f' => {
                    chunk = &chunk[1..];
                    Inner::Literal {
                        tail: b"alse",
                        matched: 0,
                        resolved: JsonValue::False,
                        name: "false",
                    }
                }
                b'n' => {
                    chunk = &chunk[1..];
                    Inner::Literal {
                        tail: b"ull",
                        matched: 0,
                        resolved: JsonValue::Null,
                        name: "null",
                    }
                }
                other => {
                    return Err(ParseError::UnexpectedByte {
                        byte: other,
                        context: "start of value",
                    });
                }
            };

            if chunk.is_empty() {
                return Ok((ParseStatus::NeedMore, chunk));
            }
        }

        match &mut self.inner {
            Inner::None => unreachable!("committed to a variant above"),
            Inner::Str(acc) => match acc.feed(chunk)? {
                (ParseStatus::NeedMore, rest) => Ok((ParseStatus::NeedMore, rest)),
                (ParseStatus::Ready, rest) => {
                    // `StringAccumulator::feed` hands back everything from
                    // (and including) the closing quote onward; the value
                    // itself isn't done until that quote is consumed too.
                    debug_assert_eq!(rest.first(), Some(&b'"'));
                    Ok((ParseStatus::Ready, &rest[1..]))
                }
            },
            Inner::Num(acc) => acc.feed(chunk),
            Inner::Literal {
                tail,
                matched,
                name,
                ..
            } => loop {
                if chunk.is_empty() {
                    return Ok((ParseStatus::NeedMore, chunk));
                }
                if *matched == tail.len() {
                    return Ok((ParseStatus::Ready, chunk));
                }
                let expected = tail[*matched];
                let found = chunk[0];
                if found != expected {
                    return Err(ParseError::LiteralMismatch {
                        expected: *name,
                        found,
                    });
                }
                *matched += 1;
                chunk = &chunk[1..];
                if *matched == tail.len() {
                    return Ok((ParseStatus::Ready, chunk));
                }
            },
        }
    }

    /// Non-consuming accessor for the committed kind and, for STRING or
    /// NUMBER, a reference to the inner accumulator. Only meaningful once
    /// `feed` has returned `Ready`; see [`ValueParser::into_value`] for a
    /// convenience that collapses this straight into a [`JsonValue`].
    pub fn result(&self) -> ValueResult<'_> {
        match &self.inner {
            Inner::None => unreachable!("Ready is never returned before committing to a variant"),
            Inner::Str(acc) => ValueResult::String(acc),
            Inner::Num(acc) => ValueResult::Number(acc),
            Inner::Literal { resolved, .. } => match resolved {
                JsonValue::True => ValueResult::True,
                JsonValue::False => ValueResult::False,
                JsonValue::Null => ValueResult::Null,
                _ => unreachable!("a literal only ever resolves to True/False/Null"),
            },
        }
    }

    /// Extracts the decoded value. Only meaningful once `feed` has returned
    /// `Ready`.
    pub fn into_value(self) -> Result<JsonValue, ParseError> {
        match self.inner {
            Inner::None => unreachable!("Ready is never returned before committing to a variant"),
            Inner::Str(acc) => Ok(JsonValue::String(acc.into_string_lossy())),
            Inner::Num(acc) => match acc.result()? {
                (NumberKind::Integer, NumberValue::Integer(v)) => Ok(JsonValue::Integer(v)),
                (NumberKind::Float, NumberValue::Float(v)) => Ok(JsonValue::Float(v)),
                _ => unreachable!("NumberKind and NumberValue variants always agree"),
            },
            Inner::Literal { resolved, .. } => Ok(resolved),
        }
    }
}
