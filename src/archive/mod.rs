//! Reading and writing `.xmind` zip containers.
//!
//! An XMind file is a zip archive whose `content.json` entry holds the sheet
//! array. Every other entry (metadata, manifest, thumbnails, attachments) is
//! carried through as a [`SidecarEntry`] and written back byte for byte.
//!
//! # Example
//!
//! ```rust
//! use xmindkit::XmindArchive;
//! use xmindkit::template::TemplateConfig;
//!
//! # fn main() -> xmindkit::Result<()> {
//! let archive = XmindArchive::create(&TemplateConfig::new().sheet_title("Plan"));
//! let bytes = archive.to_bytes()?;
//!
//! let reopened = XmindArchive::open(std::io::Cursor::new(bytes))?;
//! assert_eq!(reopened.document().sheets()[0].title(), "Plan");
//! # Ok(())
//! # }
//! ```

mod entry;
mod options;
mod read;
mod write;

pub use entry::{EntryInfo, SidecarEntry};
pub use options::{Compression, WriteOptions};
pub use write::WriteResult;

use crate::model::Document;
use crate::template::{TemplateConfig, default_sidecars};

/// Name of the entry holding the document.
pub const CONTENT_ENTRY: &str = "content.json";

/// Content entry of pre-2020 XMind files, which this crate does not read.
pub const LEGACY_CONTENT_ENTRY: &str = "content.xml";

/// An XMind archive loaded into memory.
///
/// The archive owns the parsed [`Document`] plus every other entry of the
/// container. Entry order is preserved on write, with `content.json`
/// regenerated in its original slot.
#[derive(Debug, Clone)]
pub struct XmindArchive {
    document: Document,
    sidecars: Vec<SidecarEntry>,
    content_position: usize,
    options: WriteOptions,
}

impl XmindArchive {
    /// Wraps a document with the default metadata and manifest entries.
    pub fn new(document: Document) -> Self {
        Self::from_raw_parts(document, default_sidecars(), 0)
    }

    /// Creates a new single-sheet archive from `config`.
    pub fn create(config: &TemplateConfig) -> Self {
        Self::new(Document::from_template(config))
    }

    /// Builds an archive from a document and explicit sidecar entries.
    ///
    /// `content.json` is written before the sidecars. Any sidecar named
    /// `content.json` is dropped.
    pub fn from_parts(document: Document, sidecars: Vec<SidecarEntry>) -> Self {
        let sidecars = sidecars
            .into_iter()
            .filter(|entry| entry.name() != CONTENT_ENTRY)
            .collect();
        Self::from_raw_parts(document, sidecars, 0)
    }

    pub(crate) fn from_raw_parts(
        document: Document,
        sidecars: Vec<SidecarEntry>,
        content_position: usize,
    ) -> Self {
        Self {
            document,
            sidecars,
            content_position,
            options: WriteOptions::default(),
        }
    }

    /// Sets the options used by subsequent writes.
    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the write options.
    pub fn write_options(&self) -> &WriteOptions {
        &self.options
    }

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the document for editing.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Replaces the document, keeping the sidecar entries.
    pub fn replace_document(&mut self, document: Document) -> Document {
        std::mem::replace(&mut self.document, document)
    }

    /// Consumes the archive and returns the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Returns the non-content entries in archive order.
    pub fn sidecars(&self) -> &[SidecarEntry] {
        &self.sidecars
    }

    /// Looks up a sidecar entry by name.
    pub fn sidecar(&self, name: &str) -> Option<&SidecarEntry> {
        self.sidecars.iter().find(|entry| entry.name() == name)
    }

    pub(crate) fn content_position(&self) -> usize {
        self.content_position
    }

    /// Lists every entry, `content.json` included, in the order it will be
    /// written. The content size is that of the current serialization.
    pub fn entries(&self) -> crate::Result<Vec<EntryInfo>> {
        let content_size = self.document.to_json_pretty()?.len() as u64;
        let content = EntryInfo {
            name: CONTENT_ENTRY.to_string(),
            size: content_size,
            is_content: true,
            is_directory: false,
        };

        let mut entries: Vec<EntryInfo> = self
            .sidecars
            .iter()
            .map(|entry| EntryInfo {
                name: entry.name().to_string(),
                size: entry.data().len() as u64,
                is_content: false,
                is_directory: entry.is_directory(),
            })
            .collect();
        let position = self.content_position.min(entries.len());
        entries.insert(position, content);
        Ok(entries)
    }
}
