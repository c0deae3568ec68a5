//! Encoding XMind archives.

use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::{CONTENT_ENTRY, XmindArchive};
use crate::Result;

/// Statistics of a completed write.
#[must_use = "write result should be checked to verify operation completed as expected"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteResult {
    /// Entries written, including `content.json`.
    pub entries_written: usize,
    /// Size of the serialized `content.json`.
    pub content_bytes: u64,
    /// Uncompressed bytes across all entries.
    pub total_bytes: u64,
}

impl XmindArchive {
    /// Writes the archive to `writer`.
    ///
    /// `content.json` is regenerated from the document and placed where it
    /// was in the source archive; every sidecar entry is written with its
    /// original bytes.
    pub fn write<W: Write + Seek>(&self, writer: W) -> Result<WriteResult> {
        self.write_to(writer).map(|(_, result)| result)
    }

    /// Serializes the archive into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let (cursor, _) = self.write_to(std::io::Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Writes the archive to `path`, replacing it atomically.
    ///
    /// The data goes to a temporary sibling file which is renamed over `path`
    /// once complete, so `path` is never left half written. Missing parent
    /// directories are created. Saving to the path the archive was opened
    /// from is safe because the source is fully loaded in memory.
    ///
    /// Concurrent saves to the same path are not coordinated: the last
    /// rename wins.
    pub fn save_path(&self, path: impl AsRef<Path>) -> Result<WriteResult> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = temp_path_for(path);
        let result = match self.write_file(&temp_path) {
            Ok(result) => result,
            Err(e) => {
                let _ = fs::remove_file(&temp_path);
                return Err(e);
            }
        };
        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        log::info!(
            "wrote {} ({} entries, {} bytes)",
            path.display(),
            result.entries_written,
            result.total_bytes
        );
        Ok(result)
    }

    fn write_file(&self, path: &Path) -> Result<WriteResult> {
        let file = File::create(path)?;
        let (writer, result) = self.write_to(BufWriter::new(file))?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(result)
    }

    fn write_to<W: Write + Seek>(&self, writer: W) -> Result<(W, WriteResult)> {
        let content = self.document().to_json_pretty()?;
        let options = self.write_options().file_options();
        let mut zip = ZipWriter::new(writer);
        let mut result = WriteResult::default();

        let content_position = self.content_position().min(self.sidecars().len());
        for (index, entry) in self.sidecars().iter().enumerate() {
            if index == content_position {
                add_file(&mut zip, CONTENT_ENTRY, &content, options, &mut result)?;
            }
            if entry.is_directory() {
                zip.add_directory(entry.name(), options)?;
                result.entries_written += 1;
            } else {
                add_file(&mut zip, entry.name(), entry.data(), options, &mut result)?;
            }
        }
        if content_position == self.sidecars().len() {
            add_file(&mut zip, CONTENT_ENTRY, &content, options, &mut result)?;
        }
        result.content_bytes = content.len() as u64;

        let writer = zip.finish()?;
        Ok((writer, result))
    }
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    data: &[u8],
    options: SimpleFileOptions,
    result: &mut WriteResult,
) -> Result<()> {
    zip.start_file(name, options)?;
    zip.write_all(data)?;
    result.entries_written += 1;
    result.total_bytes += data.len() as u64;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
