//! Batched document editing.
//!
//! This module lets callers queue several modifications of an opened
//! archive and apply them as one unit:
//! - Inserting a topic (with a generated or caller-chosen id)
//! - Inserting several topics under one parent
//! - Setting the background of one sheet or of every sheet
//!
//! # Example
//!
//! ```rust
//! use xmindkit::XmindArchive;
//! use xmindkit::edit::EditableArchive;
//! use xmindkit::template::TemplateConfig;
//!
//! # fn main() -> xmindkit::Result<()> {
//! let mut editor = XmindArchive::create(&TemplateConfig::new()).edit();
//!
//! editor.insert_topic("$[0].rootTopic", "Goals")?;
//! editor.set_background(0, "#FFFFFFFF")?;
//!
//! let result = editor.apply()?;
//! assert_eq!(result.topics_inserted, 1);
//! assert_eq!(result.sheets_restyled, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Implementation Notes
//!
//! The editor works by:
//! 1. Validating arguments (path syntax, colors, sheet bounds) as operations are queued
//! 2. When `apply()` is called, cloning the document
//! 3. Running every operation against the clone in queue order
//! 4. Swapping the clone in only if all operations succeeded
//!
//! Path targets are resolved at apply time, so an operation may address a
//! topic inserted by an earlier one.

mod editor;
mod operation;

pub use editor::{EditResult, EditableArchive, Editor};
pub use operation::{Operation, OperationBuilder};
