//! Topic nodes of the mind-map tree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node in the mind-map tree.
///
/// Fields the crate does not interpret (markers, notes, `structureClass`,
/// detached children, ...) are kept in [`extra`](Topic::extra) and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default)]
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_unedited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Children>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// The `children` object of a topic.
///
/// Only the `attached` list is modelled; `detached`, `summary` and other
/// child groups stay opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Children {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attached: Option<Vec<Topic>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Topic {
    /// Creates a topic with an edited title and an empty `children.attached`.
    pub(crate) fn new(id: String, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            title_unedited: Some(false),
            children: Some(Children {
                attached: Some(Vec::new()),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }

    /// Creates a topic carrying a placeholder title the user has not edited.
    pub(crate) fn placeholder(id: String, title: impl Into<String>) -> Self {
        Self {
            title_unedited: Some(true),
            ..Self::new(id, title)
        }
    }

    /// Returns the topic identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title, or `""` when the topic has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Returns the `titleUnedited` flag if present.
    pub fn title_unedited(&self) -> Option<bool> {
        self.title_unedited
    }

    /// Replaces the title and marks it as edited.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
        self.title_unedited = Some(false);
    }

    /// Returns the attached children in order.
    ///
    /// A missing `children` object, a `children` object without `attached`
    /// and an empty `attached` list all read as no children.
    pub fn attached(&self) -> &[Topic] {
        self.children
            .as_ref()
            .and_then(|c| c.attached.as_deref())
            .unwrap_or_default()
    }

    /// Returns the number of attached children.
    pub fn child_count(&self) -> usize {
        self.attached().len()
    }

    /// Returns the attached child at `index`.
    pub fn child(&self, index: usize) -> Option<&Topic> {
        self.attached().get(index)
    }

    /// Returns the `children` object, if present.
    pub fn children(&self) -> Option<&Children> {
        self.children.as_ref()
    }

    /// Returns a field that is not modelled explicitly.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns the unmodelled fields for editing.
    pub fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut Topic> {
        self.children
            .as_mut()?
            .attached
            .as_mut()?
            .get_mut(index)
    }

    /// Appends a child, creating `children` and `attached` when missing.
    pub(crate) fn push_child(&mut self, topic: Topic) {
        self.children
            .get_or_insert_with(Children::default)
            .attached
            .get_or_insert_with(Vec::new)
            .push(topic);
    }

    /// Returns a string-valued field by its JSON name.
    pub(crate) fn field_str(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "title" => self.title.as_deref(),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }

    /// Visits this topic and every attached descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Topic)) {
        visit(self);
        for child in self.attached() {
            child.walk(visit);
        }
    }
}

impl Children {
    /// Returns the attached list if the field is present.
    pub fn attached(&self) -> Option<&[Topic]> {
        self.attached.as_deref()
    }

    /// Returns the unmodelled child groups (`detached`, `summary`, ...).
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
