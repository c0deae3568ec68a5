//! Document modification operations.

use crate::color::Color;

/// A pending modification of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Append one topic under a parent topic.
    InsertTopic {
        /// Path expression selecting the parent topic.
        parent: String,
        /// Title of the new topic.
        title: String,
        /// Caller-chosen id; a fresh one is generated when `None`.
        id: Option<String>,
    },
    /// Append several topics, in order, under one parent topic.
    InsertTopics {
        /// Path expression selecting the parent topic.
        parent: String,
        /// Titles of the new topics.
        titles: Vec<String>,
    },
    /// Set the background of one sheet.
    SetBackground {
        /// Sheet index.
        sheet: usize,
        /// New background color.
        color: Color,
    },
    /// Set the background of every sheet.
    SetAllBackgrounds {
        /// New background color.
        color: Color,
    },
}

impl Operation {
    /// Returns the parent path for topic insertions.
    pub fn parent_path(&self) -> Option<&str> {
        match self {
            Operation::InsertTopic { parent, .. } | Operation::InsertTopics { parent, .. } => {
                Some(parent)
            }
            Operation::SetBackground { .. } | Operation::SetAllBackgrounds { .. } => None,
        }
    }

    /// Returns whether this operation changes the topic tree (as opposed to
    /// sheet styling only).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Operation::InsertTopic { .. } | Operation::InsertTopics { .. }
        )
    }

    /// Returns the operation type as a string.
    pub fn operation_type(&self) -> &'static str {
        match self {
            Operation::InsertTopic { .. } => "insert-topic",
            Operation::InsertTopics { .. } => "insert-topics",
            Operation::SetBackground { .. } => "set-background",
            Operation::SetAllBackgrounds { .. } => "set-all-backgrounds",
        }
    }
}

/// Builder for creating operations fluently.
///
/// Colors are already validated [`Color`] values; path expressions are
/// checked when the operations are queued on an [`Editor`](super::Editor).
#[derive(Debug, Default)]
pub struct OperationBuilder {
    operations: Vec<Operation>,
}

impl OperationBuilder {
    /// Creates a new operation builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single topic insertion with a generated id.
    pub fn insert_topic(mut self, parent: impl Into<String>, title: impl Into<String>) -> Self {
        self.operations.push(Operation::InsertTopic {
            parent: parent.into(),
            title: title.into(),
            id: None,
        });
        self
    }

    /// Adds a batch topic insertion.
    pub fn insert_topics<I, S>(mut self, parent: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operations.push(Operation::InsertTopics {
            parent: parent.into(),
            titles: titles.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Adds a background change for one sheet.
    pub fn set_background(mut self, sheet: usize, color: Color) -> Self {
        self.operations
            .push(Operation::SetBackground { sheet, color });
        self
    }

    /// Adds a background change for every sheet.
    pub fn set_all_backgrounds(mut self, color: Color) -> Self {
        self.operations
            .push(Operation::SetAllBackgrounds { color });
        self
    }

    /// Builds the list of operations.
    pub fn build(self) -> Vec<Operation> {
        self.operations
    }
}
