//! Error types for XMind document operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when reading, editing or writing XMind archives, along with
//! a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`:
//!
//! ```rust,no_run
//! use xmindkit::{XmindArchive, Result};
//!
//! fn add_idea(path: &str) -> Result<()> {
//!     let mut archive = XmindArchive::open_path(path)?;
//!     archive.document_mut().insert_topic("$[0].rootTopic", "New idea")?;
//!     let _ = archive.save_path(path)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Matching Specific Failures
//!
//! ```rust,no_run
//! use xmindkit::{Error, XmindArchive};
//!
//! fn insert(path: &str, parent: &str) -> xmindkit::Result<()> {
//!     let mut archive = XmindArchive::open_path(path)?;
//!     match archive.document_mut().insert_topic(parent, "Child") {
//!         Ok(_) => archive.save_path(path).map(|_| ()),
//!         Err(Error::TargetNotFound { path }) => {
//!             eprintln!("Nothing matches {}", path);
//!             Ok(())
//!         }
//!         Err(e @ Error::AmbiguousTarget { .. }) => {
//!             eprintln!("Refine the path: {}", e);
//!             Err(e)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for XMind operations.
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | File system operations |
/// | Format | [`InvalidFormat`][Self::InvalidFormat], [`MissingContent`][Self::MissingContent], [`InvalidContent`][Self::InvalidContent] | Not an XMind archive |
/// | Target | [`TargetNotFound`][Self::TargetNotFound], [`AmbiguousTarget`][Self::AmbiguousTarget], [`InvalidTarget`][Self::InvalidTarget] | Path selects the wrong nodes |
/// | Input | [`InvalidPath`][Self::InvalidPath], [`InvalidColor`][Self::InvalidColor], [`SheetIndexOutOfRange`][Self::SheetIndexOutOfRange], [`DuplicateId`][Self::DuplicateId] | Bad caller-supplied values |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a readable zip container.
    #[error("Invalid XMind archive: {0}")]
    InvalidFormat(String),

    /// The archive has no `content.json` entry.
    ///
    /// Legacy XMind 8 files store their content as `content.xml` and are
    /// reported through this variant as well.
    #[error("Archive has no {entry} entry")]
    MissingContent {
        /// Name of the entry that was expected.
        entry: &'static str,
    },

    /// `content.json` exists but is not a valid sheet array.
    #[error("Invalid content.json: {0}")]
    InvalidContent(String),

    /// A JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The path expression could not be parsed.
    #[error("Invalid path expression '{expression}' at offset {offset}: {reason}")]
    InvalidPath {
        /// The expression as supplied.
        expression: String,
        /// Byte offset where parsing stopped.
        offset: usize,
        /// What was expected.
        reason: String,
    },

    /// The path resolved to no node where exactly one was required.
    #[error("No topic matches path: {path}")]
    TargetNotFound {
        /// The path expression.
        path: String,
    },

    /// The path resolved to several nodes where exactly one was required.
    #[error("Path matches {count} nodes, expected exactly one: {path}")]
    AmbiguousTarget {
        /// The path expression.
        path: String,
        /// Number of matched nodes.
        count: usize,
    },

    /// The path resolved to a node that cannot receive topics (a sheet).
    #[error("Path does not select a topic ({kind}): {path}")]
    InvalidTarget {
        /// The path expression.
        path: String,
        /// Kind of node that was selected.
        kind: &'static str,
    },

    /// A color string is not in `#RRGGBBAA` form.
    #[error("Invalid color '{value}': expected #RRGGBBAA (8 hex digits)")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },

    /// A sheet index is outside the document.
    #[error("Sheet index {index} out of range: document has {count} sheet(s)")]
    SheetIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of sheets in the document.
        count: usize,
    },

    /// Invalid compression level.
    #[error("invalid compression level {level}: must be 0-9")]
    InvalidCompressionLevel {
        /// The invalid level that was provided.
        level: u32,
    },

    /// An identifier is empty or already used in the document.
    #[error("Identifier '{id}' is empty or already in use")]
    DuplicateId {
        /// The offending identifier.
        id: String,
    },
}

impl Error {
    /// Returns `true` if the archive itself is unusable.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidFormat(_) | Error::MissingContent { .. } | Error::InvalidContent(_)
        )
    }

    /// Returns `true` if a path selected the wrong number or kind of nodes.
    pub fn is_target_error(&self) -> bool {
        matches!(
            self,
            Error::TargetNotFound { .. }
                | Error::AmbiguousTarget { .. }
                | Error::InvalidTarget { .. }
        )
    }

    /// Returns `true` if a caller-supplied value was rejected before any mutation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPath { .. }
                | Error::InvalidColor { .. }
                | Error::SheetIndexOutOfRange { .. }
                | Error::DuplicateId { .. }
                | Error::InvalidCompressionLevel { .. }
        )
    }

    /// Returns the path expression associated with this error, if any.
    pub fn path_expression(&self) -> Option<&str> {
        match self {
            Error::InvalidPath { expression, .. } => Some(expression),
            Error::TargetNotFound { path } => Some(path),
            Error::AmbiguousTarget { path, .. } => Some(path),
            Error::InvalidTarget { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn invalid_path(
        expression: &str,
        offset: usize,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidPath {
            expression: expression.to_string(),
            offset,
            reason: reason.into(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::InvalidFormat(other.to_string()),
        }
    }
}

/// A specialized Result type for XMind operations.
pub type Result<T> = std::result::Result<T, Error>;
