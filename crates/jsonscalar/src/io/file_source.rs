use std::fs::File;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use super::{ByteSource, IoError};

/// Default read-buffer size, in bytes. Mirrors the original's
/// `FILE_READER_BUFLEN`, scaled up to a size more typical of modern I/O.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// A [`ByteSource`] that reads a filesystem path in binary mode.
///
/// The read-buffer size is overridable for tests via
/// [`FileByteSource::with_buffer_size`], mirroring the original's
/// test-overridable `file_reader_read_buflen`.
pub struct FileByteSource {
    path: PathBuf,
    file: Option<File>,
    buf: Vec<u8>,
}

impl FileByteSource {
    /// Creates a reader for `path` using the default read-buffer size.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_buffer_size(path, DEFAULT_BUFFER_SIZE)
    }

    /// Creates a reader for `path` using a caller-chosen read-buffer size.
    ///
    /// Intended for tests that want to exercise chunk-boundary handling
    /// with small, predictable reads.
    pub fn with_buffer_size(path: impl AsRef<Path>, buffer_size: usize) -> Self {
        assert!(buffer_size > 0, "buffer_size must be non-zero");
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
            buf: vec![0u8; buffer_size],
        }
    }
}

impl ByteSource for FileByteSource {
    fn open(&mut self) -> Result<(), IoError> {
        self.file = Some(File::open(&self.path).map_err(IoError::Open)?);
        Ok(())
    }

    fn read(&mut self) -> Result<&[u8], IoError> {
        let file = self
            .file
            .as_mut()
            .expect("FileByteSource::open must be called before read");
        let n = file.read(&mut self.buf).map_err(IoError::Read)?;
        Ok(&self.buf[..n])
    }
}
