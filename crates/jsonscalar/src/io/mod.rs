//! A polymorphic streaming byte source and a line reader layered over it.

mod file_source;
mod line_reader;

pub use file_source::FileByteSource;
pub use line_reader::LineReader;

/// Error surfaced by a [`ByteSource`]'s `open`/`read` operations.
///
/// Replaces the original C implementation's two-phase "call, then ask
/// `get_error`" protocol: the error detail travels with the `Err` value
/// itself, and `source()` still exposes the underlying OS error.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to open byte source: {0}")]
    Open(#[source] std::io::Error),
    #[error("failed to read from byte source: {0}")]
    Read(#[source] std::io::Error),
}

/// A polymorphic handle over an arbitrary streaming byte source.
///
/// Implementations must guarantee that the slice returned by `read` stays
/// valid only until the next call to `read` on the same source — the
/// `&mut self` receiver and elided output lifetime make the borrow checker
/// enforce this for free.
pub trait ByteSource {
    /// Prepares the source to emit bytes.
    fn open(&mut self) -> Result<(), IoError>;

    /// Returns one non-empty segment of freshly produced bytes, or an empty
    /// slice at end of stream.
    fn read(&mut self) -> Result<&[u8], IoError>;
}
