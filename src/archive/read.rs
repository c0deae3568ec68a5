//! Decoding XMind archives.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use super::entry::SidecarEntry;
use super::{CONTENT_ENTRY, LEGACY_CONTENT_ENTRY, XmindArchive};
use crate::model::Document;
use crate::template::TemplateConfig;
use crate::{Error, Result};

/// Upper bound for buffer preallocation from a declared entry size.
const MAX_PREALLOCATION: u64 = 16 * 1024 * 1024;

impl XmindArchive {
    /// Opens an archive from any seekable reader.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] if the bytes are not a zip archive
    /// - [`Error::MissingContent`] if there is no `content.json`
    /// - [`Error::InvalidContent`] if `content.json` is not a valid sheet array
    pub fn open<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut zip = ZipArchive::new(reader)?;

        let mut content = None;
        let mut content_position = 0;
        let mut sidecars = Vec::with_capacity(zip.len());
        let mut seen = HashSet::new();
        let mut has_legacy_content = false;

        for index in 0..zip.len() {
            let mut file = zip.by_index(index)?;
            let name = file.name().to_string();

            if !seen.insert(name.clone()) {
                log::warn!("skipping duplicate archive entry '{name}'");
                continue;
            }
            if file.is_dir() {
                sidecars.push(SidecarEntry::directory(name));
                continue;
            }

            let mut data = Vec::with_capacity(file.size().min(MAX_PREALLOCATION) as usize);
            file.read_to_end(&mut data)?;

            if name == CONTENT_ENTRY {
                content = Some(data);
                content_position = sidecars.len();
            } else {
                has_legacy_content |= name == LEGACY_CONTENT_ENTRY;
                sidecars.push(SidecarEntry::file(name, data));
            }
        }

        let Some(content) = content else {
            if has_legacy_content {
                log::warn!("archive only has {LEGACY_CONTENT_ENTRY} (XMind 8 format)");
            }
            return Err(Error::MissingContent {
                entry: CONTENT_ENTRY,
            });
        };

        let document = Document::from_json(&content)?;
        log::debug!(
            "opened archive: {} sheet(s), {} sidecar entr(ies)",
            document.len(),
            sidecars.len()
        );

        Ok(Self::from_raw_parts(document, sidecars, content_position))
    }

    /// Opens an archive from a file path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("reading {}", path.display());
        Self::open(BufReader::new(file))
    }

    /// Opens a template archive and applies the title overrides in `config`
    /// to its first sheet. The template's sidecar entries are kept.
    pub fn open_template(path: impl AsRef<Path>, config: &TemplateConfig) -> Result<Self> {
        let mut archive = Self::open_path(path)?;
        config.apply(archive.document_mut());
        Ok(archive)
    }
}
