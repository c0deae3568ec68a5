//! Editor for applying batches of operations to an archive.

use std::io::{Seek, Write};
use std::path::Path;

use crate::archive::{WriteOptions, XmindArchive};
use crate::color::Color;
use crate::model::Document;
use crate::path::PathExpr;
use crate::{Error, Result};

use super::operation::Operation;

/// Result of an edit operation.
#[must_use = "edit result should be checked to verify operation completed as expected"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditResult {
    /// Number of topics appended.
    pub topics_inserted: usize,
    /// Number of sheet background changes.
    pub sheets_restyled: usize,
    /// Ids of the appended topics, in insertion order.
    pub inserted_ids: Vec<String>,
    /// Uncompressed bytes written, when the result was written out.
    pub bytes_written: u64,
}

impl EditResult {
    /// Returns the total number of changes made to the document.
    pub fn total_changes(&self) -> usize {
        self.topics_inserted + self.sheets_restyled
    }

    /// Returns whether the document was left unchanged.
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// An editor for modifying archive contents.
///
/// Operations are queued and only applied when [`apply`](Self::apply) is
/// called. They run against a copy of the document which replaces the
/// archive's document only when every operation succeeded, so a failing
/// batch leaves the archive untouched.
///
/// # Example
///
/// ```rust,no_run
/// use xmindkit::XmindArchive;
/// use xmindkit::edit::EditableArchive;
///
/// # fn main() -> xmindkit::Result<()> {
/// let archive = XmindArchive::open_path("plan.xmind")?;
/// let mut editor = archive.edit();
///
/// editor.insert_topics("$[0].rootTopic", ["Scope", "Risks"])?;
/// editor.set_all_backgrounds("#FFFFFFFF")?;
///
/// let result = editor.apply_to_path("plan.xmind")?;
/// println!("added {} topics", result.topics_inserted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Editor {
    archive: XmindArchive,
    operations: Vec<Operation>,
}

impl Editor {
    /// Creates a new editor for the given archive.
    pub fn new(archive: XmindArchive) -> Self {
        Self {
            archive,
            operations: Vec::new(),
        }
    }

    /// Opens the archive at `path` for editing.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        XmindArchive::open_path(path).map(Self::new)
    }

    /// Sets the write options for the output archive.
    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.archive = self.archive.with_options(options);
        self
    }

    /// Returns the archive being edited.
    pub fn archive(&self) -> &XmindArchive {
        &self.archive
    }

    /// Consumes the editor, discarding pending operations.
    pub fn into_archive(self) -> XmindArchive {
        self.archive
    }

    /// Returns the queued operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the number of pending operations.
    pub fn pending_operations(&self) -> usize {
        self.operations.len()
    }

    /// Returns whether there are any pending operations.
    pub fn has_pending_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Clears all pending operations.
    pub fn clear_operations(&mut self) {
        self.operations.clear();
    }

    /// Queues a topic insertion with a generated id.
    ///
    /// The path is parsed immediately; whether it selects a topic is only
    /// known once earlier operations have run.
    pub fn insert_topic(&mut self, parent: &str, title: &str) -> Result<()> {
        self.insert_topic_with_id(parent, title, None)
    }

    /// Queues a topic insertion with an optional caller-chosen id.
    pub fn insert_topic_with_id(
        &mut self,
        parent: &str,
        title: &str,
        id: Option<&str>,
    ) -> Result<()> {
        PathExpr::parse(parent)?;
        if let Some(id) = id {
            self.check_unclaimed(id)?;
        }
        self.operations.push(Operation::InsertTopic {
            parent: parent.to_string(),
            title: title.to_string(),
            id: id.map(str::to_string),
        });
        Ok(())
    }

    /// Queues a batch insertion under one parent.
    pub fn insert_topics<I, S>(&mut self, parent: &str, titles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PathExpr::parse(parent)?;
        self.operations.push(Operation::InsertTopics {
            parent: parent.to_string(),
            titles: titles.into_iter().map(Into::into).collect(),
        });
        Ok(())
    }

    /// Queues a background change for one sheet.
    pub fn set_background(&mut self, sheet: usize, color: &str) -> Result<()> {
        let color = Color::new(color)?;
        let count = self.archive.document().len();
        if sheet >= count {
            return Err(Error::SheetIndexOutOfRange {
                index: sheet,
                count,
            });
        }
        self.operations
            .push(Operation::SetBackground { sheet, color });
        Ok(())
    }

    /// Queues a background change for every sheet.
    pub fn set_all_backgrounds(&mut self, color: &str) -> Result<()> {
        let color = Color::new(color)?;
        self.operations
            .push(Operation::SetAllBackgrounds { color });
        Ok(())
    }

    /// Queues already built operations.
    pub fn extend(&mut self, operations: impl IntoIterator<Item = Operation>) {
        self.operations.extend(operations);
    }

    /// Applies all pending operations to the in-memory document.
    ///
    /// On error the archive is unchanged and the pending operations are
    /// kept so the caller can inspect them.
    pub fn apply(&mut self) -> Result<EditResult> {
        let mut document = self.archive.document().clone();
        let mut result = EditResult::default();

        for (index, op) in self.operations.iter().enumerate() {
            apply_operation(&mut document, op, &mut result).inspect_err(|e| {
                log::debug!("operation {index} ({}) failed: {e}", op.operation_type());
            })?;
        }

        self.archive.replace_document(document);
        self.operations.clear();
        log::debug!(
            "applied edits: {} topic(s) inserted, {} sheet(s) restyled",
            result.topics_inserted,
            result.sheets_restyled
        );
        Ok(result)
    }

    /// Applies all pending operations and writes the archive to `output`.
    pub fn apply_to_writer<W: Write + Seek>(mut self, output: W) -> Result<EditResult> {
        let mut result = self.apply()?;
        let written = self.archive.write(output)?;
        result.bytes_written = written.total_bytes;
        Ok(result)
    }

    /// Applies all pending operations and atomically writes the archive to
    /// `path`. Nothing is written if any operation fails.
    pub fn apply_to_path(mut self, path: impl AsRef<Path>) -> Result<EditResult> {
        let mut result = self.apply()?;
        let written = self.archive.save_path(path)?;
        result.bytes_written = written.total_bytes;
        Ok(result)
    }

    /// Checks a caller id against the document and pending insertions.
    fn check_unclaimed(&self, id: &str) -> Result<()> {
        let pending = self.operations.iter().any(|op| {
            matches!(op, Operation::InsertTopic { id: Some(queued), .. } if queued == id)
        });
        if id.is_empty() || pending || self.archive.document().contains_id(id) {
            return Err(Error::DuplicateId { id: id.to_string() });
        }
        Ok(())
    }
}

fn apply_operation(document: &mut Document, op: &Operation, result: &mut EditResult) -> Result<()> {
    match op {
        Operation::InsertTopic { parent, title, id } => {
            let id = document.insert_topic_with_id(parent, title, id.as_deref())?;
            result.topics_inserted += 1;
            result.inserted_ids.push(id);
        }
        Operation::InsertTopics { parent, titles } => {
            let ids = document.insert_topics(parent, titles)?;
            result.topics_inserted += ids.len();
            result.inserted_ids.extend(ids);
        }
        Operation::SetBackground { sheet, color } => {
            document.set_background_color(*sheet, color)?;
            result.sheets_restyled += 1;
        }
        Operation::SetAllBackgrounds { color } => {
            result.sheets_restyled += document.set_all_background_colors(color);
        }
    }
    Ok(())
}

/// Trait extension for [`XmindArchive`] to enable editing.
pub trait EditableArchive: Sized {
    /// Creates an editor for this archive.
    fn edit(self) -> Editor;
}

impl EditableArchive for XmindArchive {
    fn edit(self) -> Editor {
        Editor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::OperationBuilder;
    use crate::template::TemplateConfig;

    fn editor() -> Editor {
        XmindArchive::create(&TemplateConfig::new()).edit()
    }

    #[test]
    fn test_edit_result_defaults() {
        let result = EditResult::default();
        assert_eq!(result.total_changes(), 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_apply_runs_in_order() {
        let mut editor = editor();
        editor.insert_topic("$[0].rootTopic", "First").unwrap();
        editor
            .insert_topic("$[0].rootTopic.children.attached[0]", "Nested")
            .unwrap();
        editor.set_background(0, "#112233FF").unwrap();

        let result = editor.apply().unwrap();
        assert_eq!(result.topics_inserted, 2);
        assert_eq!(result.sheets_restyled, 1);
        assert_eq!(result.inserted_ids.len(), 2);
        assert!(!editor.has_pending_operations());

        let sheet = &editor.archive().document().sheets()[0];
        let first = sheet.root_topic().child(0).unwrap();
        assert_eq!(first.child(0).unwrap().title(), "Nested");
        assert_eq!(sheet.background(), Some("#112233FF"));
    }

    #[test]
    fn test_failed_batch_leaves_document_untouched() {
        let mut editor = editor();
        let before = editor.archive().document().clone();
        editor.insert_topic("$[0].rootTopic", "Kept?").unwrap();
        editor
            .insert_topic("$[0].rootTopic.children.attached[5]", "Orphan")
            .unwrap();

        let err = editor.apply().unwrap_err();
        assert!(matches!(err, Error::TargetNotFound { .. }));
        assert_eq!(editor.archive().document(), &before);
        assert_eq!(editor.pending_operations(), 2);
    }

    #[test]
    fn test_queue_time_validation() {
        let mut editor = editor();
        assert!(matches!(
            editor.set_background(0, "red"),
            Err(Error::InvalidColor { .. })
        ));
        assert!(matches!(
            editor.set_background(3, "#000000FF"),
            Err(Error::SheetIndexOutOfRange { index: 3, count: 1 })
        ));
        assert!(matches!(
            editor.insert_topic("rootTopic", "x"),
            Err(Error::InvalidPath { .. })
        ));
        assert!(!editor.has_pending_operations());
    }

    #[test]
    fn test_duplicate_pending_id_rejected() {
        let mut editor = editor();
        editor
            .insert_topic_with_id("$[0].rootTopic", "A", Some("custom"))
            .unwrap();
        let err = editor
            .insert_topic_with_id("$[0].rootTopic", "B", Some("custom"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId { .. }));
    }

    #[test]
    fn test_extend_with_builder() {
        let mut editor = editor();
        editor.extend(
            OperationBuilder::new()
                .insert_topics("$[0].rootTopic", ["a", "b", "c"])
                .set_all_backgrounds(Color::new("#FFFFFFFF").unwrap())
                .build(),
        );
        let result = editor.apply().unwrap();
        assert_eq!(result.topics_inserted, 3);
        assert_eq!(result.sheets_restyled, 1);
        assert_eq!(result.total_changes(), 4);
    }

    #[test]
    fn test_apply_to_writer_reports_bytes() {
        let mut editor = editor();
        editor.insert_topic("$[0].rootTopic", "Out").unwrap();
        let result = editor
            .apply_to_writer(std::io::Cursor::new(Vec::new()))
            .unwrap();
        assert!(result.bytes_written > 0);
    }
}
