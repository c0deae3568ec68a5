//! Options controlling how archives are written.

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::{Error, Result};

/// Compression applied to every written entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Compression {
    /// Deflate, the method XMind itself uses.
    #[default]
    Deflate,
    /// No compression.
    Store,
}

/// Options for writing an archive.
///
/// # Example
///
/// ```rust
/// use xmindkit::archive::{Compression, WriteOptions};
///
/// let options = WriteOptions::new().level(9).unwrap();
/// assert_eq!(options.compression_method(), Compression::Deflate);
///
/// let stored = WriteOptions::new().compression(Compression::Store);
/// assert_eq!(stored.compression_method(), Compression::Store);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    compression: Compression,
    level: Option<u8>,
}

impl WriteOptions {
    /// Creates default options (deflate at the library's default level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression method.
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Sets the deflate level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCompressionLevel`] if `level` is above 9.
    pub fn level(mut self, level: u32) -> Result<Self> {
        if level > 9 {
            return Err(Error::InvalidCompressionLevel { level });
        }
        self.level = Some(level as u8);
        Ok(self)
    }

    /// Returns the compression method.
    pub fn compression_method(&self) -> Compression {
        self.compression
    }

    /// Returns the configured level, if any.
    pub fn compression_level(&self) -> Option<u8> {
        self.level
    }

    pub(crate) fn file_options(&self) -> SimpleFileOptions {
        match self.compression {
            Compression::Store => {
                SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
            }
            Compression::Deflate => SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(self.level.map(i64::from)),
        }
    }
}
