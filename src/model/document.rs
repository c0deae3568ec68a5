//! The document: an ordered list of sheets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::sheet::Sheet;
use super::topic::Topic;
use crate::path::TopicAddr;
use crate::{Error, Result};

/// An in-memory XMind document, i.e. the parsed `content.json`.
///
/// Sheet order is significant: index 0 is the first canvas shown by XMind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sheets: Vec<Sheet>,
}

/// Read-only overview of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    /// Position in the document.
    pub index: usize,
    /// Sheet identifier.
    pub id: String,
    /// Sheet title.
    pub title: String,
    /// Title of the sheet's root topic.
    pub root_topic_title: String,
    /// Number of topics attached directly to the root topic.
    pub child_count: usize,
    /// Current `svg:fill` background, if set.
    pub background_color: Option<String>,
}

/// A topic together with a path expression that selects exactly it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicPath {
    /// Path expression, e.g. `$[0].rootTopic.children.attached[1]`.
    pub path: String,
    /// Topic title.
    pub title: String,
    /// Topic identifier.
    pub id: String,
    /// Distance from the root topic (root is 0).
    pub depth: usize,
}

/// Deepest nesting of JSON arrays and objects accepted in `content.json`.
///
/// Each topic level costs three (topic, `children`, `attached`), so this
/// allows roughly 170 levels of topics.
pub const MAX_NESTING: usize = 512;

/// Maximum bracket depth of a JSON text, ignoring brackets inside strings.
fn nesting_depth(bytes: &[u8]) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &b in bytes {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

impl Document {
    /// Builds a document from already constructed sheets.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidContent`] if the sheets break the id
    /// invariants (see [`validate`](Self::validate)).
    pub fn from_sheets(sheets: Vec<Sheet>) -> Result<Self> {
        let document = Self { sheets };
        document.validate()?;
        Ok(document)
    }

    /// Parses `content.json` bytes.
    ///
    /// Topic trees may nest far deeper than serde_json's default recursion
    /// limit allows; input is accepted up to [`MAX_NESTING`] levels of JSON
    /// arrays and objects.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let depth = nesting_depth(bytes);
        if depth > MAX_NESTING {
            return Err(Error::InvalidContent(format!(
                "nesting depth {depth} exceeds limit of {MAX_NESTING}"
            )));
        }

        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        deserializer.disable_recursion_limit();
        let document = Document::deserialize(&mut deserializer)
            .and_then(|document| deserializer.end().map(|()| document))
            .map_err(|e| Error::InvalidContent(e.to_string()))?;
        document.validate()?;
        log::debug!("decoded document with {} sheet(s)", document.sheets.len());
        Ok(document)
    }

    /// Serializes the document the way it is stored in `content.json`.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.sheets)?)
    }

    /// Checks the structural invariants.
    ///
    /// The document must contain at least one sheet, and every sheet and
    /// topic needs a non-empty id that is unique across the document.
    pub fn validate(&self) -> Result<()> {
        if self.sheets.is_empty() {
            return Err(Error::InvalidContent("document has no sheets".into()));
        }

        let mut seen = HashSet::new();
        let mut check = |kind: &str, id: &str| -> Result<()> {
            if id.is_empty() {
                return Err(Error::InvalidContent(format!("{kind} without id")));
            }
            if !seen.insert(id.to_string()) {
                return Err(Error::InvalidContent(format!("duplicate {kind} id '{id}'")));
            }
            Ok(())
        };

        for sheet in &self.sheets {
            check("sheet", sheet.id())?;
            let mut result = Ok(());
            sheet.root_topic().walk(&mut |topic| {
                if result.is_ok() {
                    result = check("topic", topic.id());
                }
            });
            result?;
        }
        Ok(())
    }

    /// Returns the sheets in order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Returns the sheet at `index`.
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Returns the number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns `true` if the document has no sheets.
    ///
    /// Decoded and template-built documents always have at least one.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Returns `true` if any sheet, topic or style uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.sheets.iter().any(|sheet| {
            if sheet.id() == id || sheet.style().and_then(|s| s.id()) == Some(id) {
                return true;
            }
            let mut found = false;
            sheet.root_topic().walk(&mut |t| found |= t.id() == id);
            found
        })
    }

    /// Looks up a topic by its structural address.
    pub fn topic(&self, addr: &TopicAddr) -> Option<&Topic> {
        let mut topic = self.sheets.get(addr.sheet())?.root_topic();
        for &index in addr.indices() {
            topic = topic.child(index)?;
        }
        Some(topic)
    }

    pub(crate) fn topic_mut(&mut self, addr: &TopicAddr) -> Option<&mut Topic> {
        let mut topic = self.sheets.get_mut(addr.sheet())?.root_topic_mut();
        for &index in addr.indices() {
            topic = topic.child_mut(index)?;
        }
        Some(topic)
    }

    pub(crate) fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    pub(crate) fn sheets_mut(&mut self) -> impl Iterator<Item = &mut Sheet> {
        self.sheets.iter_mut()
    }

    pub(crate) fn empty() -> Self {
        Self { sheets: Vec::new() }
    }

    pub(crate) fn push_sheet_raw(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Summarizes every sheet. Never mutates the document.
    pub fn list_sheets(&self) -> Vec<SheetSummary> {
        self.sheets
            .iter()
            .enumerate()
            .map(|(index, sheet)| SheetSummary {
                index,
                id: sheet.id().to_string(),
                title: sheet.title().to_string(),
                root_topic_title: sheet.root_topic().title().to_string(),
                child_count: sheet.root_topic().child_count(),
                background_color: sheet.background().map(str::to_string),
            })
            .collect()
    }

    /// Lists every attached topic with a path expression selecting it.
    pub fn topic_paths(&self) -> Vec<TopicPath> {
        fn visit(topic: &Topic, addr: TopicAddr, out: &mut Vec<TopicPath>) {
            out.push(TopicPath {
                path: addr.to_expression(),
                title: topic.title().to_string(),
                id: topic.id().to_string(),
                depth: addr.depth(),
            });
            for (index, child) in topic.attached().iter().enumerate() {
                visit(child, addr.child(index), out);
            }
        }

        let mut out = Vec::new();
        for (index, sheet) in self.sheets.iter().enumerate() {
            visit(sheet.root_topic(), TopicAddr::root(index), &mut out);
        }
        out
    }
}
