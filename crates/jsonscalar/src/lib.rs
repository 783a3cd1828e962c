//! An incremental, chunk-driven JSON scalar-value parser.
//!
//! This crate parses JSON strings, numbers, and the `true`/`false`/`null`
//! literals from a stream of arbitrarily-sized byte chunks, resuming
//! correctly no matter where a chunk boundary falls — including inside a
//! `\uXXXX` escape, a multi-byte UTF-8 output, or an exponent sign.
//!
//! Full JSON documents (objects and arrays) are out of scope: this crate
//! only ever parses one scalar value at a time. See [`ValueParser`] for the
//! entry point.
//!
//! Two auxiliary primitives round out the crate: [`LineReader`], a streaming
//! line reader layered over any [`ByteSource`], and [`tree`], a red-black
//! ordered-set tree used as a general container primitive.

mod buffer;
pub mod io;
pub mod json;
pub mod tree;

pub use io::{ByteSource, FileByteSource, IoError, LineReader};
pub use json::{
    JsonValue, NumberAccumulator, NumberKind, ParseError, ParseStatus, StringAccumulator,
    ValueParser, ValueResult,
};
pub use tree::{Node, Tree};
