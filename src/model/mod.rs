//! In-memory document model.
//!
//! A [`Document`] is the parsed `content.json`: an ordered list of
//! [`Sheet`]s, each holding one root [`Topic`] whose attached children form
//! the mind-map tree.
//!
//! Only the fields the crate edits are modelled as struct fields. Everything
//! else (themes, markers, notes, detached topics, relationships, ...) is
//! carried as opaque JSON so a decode/encode cycle loses nothing.
//!
//! Identifiers are assigned when a node is created and never change. Fresh
//! identifiers are random UUIDv4 strings checked against every id already in
//! the document.

mod document;
mod id;
mod mutate;
mod sheet;
mod topic;

pub use document::{Document, MAX_NESTING, SheetSummary, TopicPath};
pub use sheet::{BACKGROUND_PROPERTY, Sheet, Style};
pub use topic::{Children, Topic};

pub(crate) use id::IdAllocator;
