//! # xmindkit
//!
//! A library for reading, editing and writing XMind mind-map files.
//!
//! An `.xmind` file is a zip archive. Its `content.json` entry holds an array
//! of sheets, each with a root topic whose children nest arbitrarily deep.
//! This crate loads that tree, lets callers address topics with a small path
//! expression dialect, applies edits, and writes the archive back with every
//! other entry (metadata, manifest, thumbnails) untouched.
//!
//! ## Quick Start
//!
//! ### Creating a Document
//!
//! ```rust,no_run
//! use xmindkit::{XmindArchive, Result};
//! use xmindkit::template::TemplateConfig;
//!
//! fn main() -> Result<()> {
//!     let config = TemplateConfig::new()
//!         .sheet_title("Roadmap")
//!         .root_topic_title("2027");
//!     let _ = XmindArchive::create(&config).save_path("roadmap.xmind")?;
//!     Ok(())
//! }
//! ```
//!
//! ### Inserting Topics
//!
//! ```rust,no_run
//! use xmindkit::{XmindArchive, Result};
//!
//! fn main() -> Result<()> {
//!     let mut archive = XmindArchive::open_path("roadmap.xmind")?;
//!     let doc = archive.document_mut();
//!
//!     doc.insert_topics("$[0].rootTopic", ["Q1", "Q2", "Q3", "Q4"])?;
//!     doc.insert_topic(r#"$[0].rootTopic.children.attached[?(@.title=="Q1")]"#, "Hiring")?;
//!
//!     let _ = archive.save_path("roadmap.xmind")?;
//!     Ok(())
//! }
//! ```
//!
//! ### Changing Backgrounds
//!
//! ```rust,no_run
//! use xmindkit::{XmindArchive, Result};
//!
//! fn main() -> Result<()> {
//!     let mut archive = XmindArchive::open_path("roadmap.xmind")?;
//!     archive.document_mut().set_all_backgrounds("#1E1E1EFF")?;
//!
//!     for sheet in archive.document().list_sheets() {
//!         println!("{}: {:?}", sheet.title, sheet.background_color);
//!     }
//!     let _ = archive.save_path("roadmap.xmind")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Path Expressions
//!
//! See the [`path`] module for the supported dialect. In short: `$` is the
//! sheet array, `[N]` indexes arrays, `.rootTopic`, `.children` and
//! `.attached` traverse the tree, and `[?(@.title=="X")]` filters by title
//! or id.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | No | Command-line interface tool |
//!
//! ## Logging
//!
//! The library logs through the [`log`](https://docs.rs/log) facade and
//! never installs a logger itself.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod archive;
pub mod color;
pub mod edit;
pub mod error;
pub mod model;
pub mod path;
pub mod template;

pub use error::{Error, Result};

// Re-export archive API at crate root for convenience
pub use archive::{Compression, EntryInfo, SidecarEntry, WriteOptions, WriteResult, XmindArchive};

// Re-export model API
pub use color::Color;
pub use model::{Children, Document, Sheet, SheetSummary, Style, Topic, TopicPath};

// Re-export path API
pub use path::{NodeRef, PathExpr, TopicAddr};

// Re-export edit API
pub use edit::{EditResult, EditableArchive, Editor, Operation, OperationBuilder};

// Re-export template API
pub use template::TemplateConfig;
