//! Archive entries kept alongside the document.

/// A non-content entry of an XMind archive.
///
/// Metadata, manifest, thumbnails and resources are carried as raw bytes
/// and written back exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarEntry {
    name: String,
    data: Vec<u8>,
    is_directory: bool,
}

impl SidecarEntry {
    /// Creates a file entry.
    pub fn file(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            is_directory: false,
        }
    }

    /// Creates an explicit directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
            is_directory: true,
        }
    }

    /// Entry name inside the archive (forward slashes).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uncompressed entry bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns `true` for directory entries.
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }
}

/// Name and size of one archive entry, in archive order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EntryInfo {
    /// Entry name.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Whether this is the document entry.
    pub is_content: bool,
    /// Whether this is a directory entry.
    pub is_directory: bool,
}
