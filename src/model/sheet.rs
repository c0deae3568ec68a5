//! Sheets (canvases) and their style block.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::topic::Topic;
use crate::Color;

/// Style property XMind uses for the sheet background.
pub const BACKGROUND_PROPERTY: &str = "svg:fill";

/// One canvas of a document, holding a single root topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(default)]
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    root_topic: Topic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// The `style` block of a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Sheet {
    pub(crate) fn new(id: String, title: impl Into<String>, root_topic: Topic) -> Self {
        Self {
            id,
            title: Some(title.into()),
            root_topic,
            style: None,
            extra: Map::new(),
        }
    }

    /// Returns the sheet identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the sheet title, or `""` when it has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Replaces the sheet title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Returns the root topic.
    pub fn root_topic(&self) -> &Topic {
        &self.root_topic
    }

    pub(crate) fn root_topic_mut(&mut self) -> &mut Topic {
        &mut self.root_topic
    }

    /// Returns the style block, if any.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Returns the current background color property.
    pub fn background(&self) -> Option<&str> {
        self.style.as_ref()?.property(BACKGROUND_PROPERTY)
    }

    /// Sets the background color, creating the style block when needed.
    ///
    /// Other style properties are left untouched. `new_style_id` is only
    /// called when a style block without an id has to be completed.
    pub(crate) fn set_background(&mut self, color: &Color, new_style_id: impl FnOnce() -> String) {
        let style = self.style.get_or_insert_with(Style::default);
        if style.id.is_none() {
            style.id = Some(new_style_id());
        }
        style
            .properties
            .get_or_insert_with(Map::new)
            .insert(BACKGROUND_PROPERTY.to_string(), Value::String(color.to_string()));
    }

    /// Returns the unmodelled sheet fields (`theme`, `topicPositioning`, ...).
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub(crate) fn field_str(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "title" => self.title.as_deref(),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }
}

impl Style {
    /// Returns the style identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns a string-valued style property.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.as_ref()?.get(name)?.as_str()
    }

    /// Returns all style properties.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref()
    }
}
