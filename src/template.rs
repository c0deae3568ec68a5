//! Blank documents and the built-in archive skeleton.

use serde_json::json;

use crate::archive::SidecarEntry;
use crate::model::{Document, IdAllocator, Sheet, Topic};

/// Title XMind gives a new sheet.
pub const DEFAULT_SHEET_TITLE: &str = "Sheet 1";
/// Title XMind gives a new central topic.
pub const DEFAULT_ROOT_TOPIC_TITLE: &str = "Central Topic";

/// Titles for a newly created document.
///
/// `None` keeps the default (or, for a user template, the template's own
/// title).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Title of the first sheet.
    pub sheet_title: Option<String>,
    /// Title of the first sheet's root topic.
    pub root_topic_title: Option<String>,
}

impl TemplateConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sheet title.
    pub fn sheet_title(mut self, title: impl Into<String>) -> Self {
        self.sheet_title = Some(title.into());
        self
    }

    /// Sets the root topic title.
    pub fn root_topic_title(mut self, title: impl Into<String>) -> Self {
        self.root_topic_title = Some(title.into());
        self
    }

    /// Overrides the first sheet's titles of an existing document.
    pub fn apply(&self, document: &mut Document) {
        let Some(sheet) = document.sheet_mut(0) else {
            return;
        };
        if let Some(title) = &self.sheet_title {
            sheet.set_title(title.clone());
        }
        if let Some(title) = &self.root_topic_title {
            sheet.root_topic_mut().set_title(title.clone());
        }
    }
}

impl Document {
    /// Builds a one-sheet document with a root topic and no children.
    ///
    /// A root topic that keeps the default title is flagged as unedited, the
    /// way XMind marks placeholder text.
    ///
    /// ```
    /// use xmindkit::Document;
    /// use xmindkit::template::TemplateConfig;
    ///
    /// let doc = Document::from_template(
    ///     &TemplateConfig::new().sheet_title("S").root_topic_title("R"),
    /// );
    /// assert_eq!(doc.len(), 1);
    /// assert_eq!(doc.sheets()[0].title(), "S");
    /// assert_eq!(doc.sheets()[0].root_topic().title(), "R");
    /// assert_eq!(doc.sheets()[0].root_topic().child_count(), 0);
    /// ```
    pub fn from_template(config: &TemplateConfig) -> Self {
        let mut ids = IdAllocator::default();
        let sheet = new_sheet(
            &mut ids,
            config.sheet_title.as_deref(),
            config.root_topic_title.as_deref(),
        );
        let mut document = Document::empty();
        document.push_sheet_raw(sheet);
        document
    }

    /// Appends a new sheet with fresh ids and returns its index.
    pub fn add_sheet(&mut self, title: &str, root_topic_title: &str) -> usize {
        let mut ids = IdAllocator::for_document(self);
        let sheet = new_sheet(&mut ids, Some(title), Some(root_topic_title));
        self.push_sheet_raw(sheet);
        self.len() - 1
    }
}

fn new_sheet(ids: &mut IdAllocator, title: Option<&str>, root_title: Option<&str>) -> Sheet {
    let sheet_id = ids.fresh();
    let root = match root_title {
        Some(title) => Topic::new(ids.fresh(), title),
        None => Topic::placeholder(ids.fresh(), DEFAULT_ROOT_TOPIC_TITLE),
    };
    Sheet::new(sheet_id, title.unwrap_or(DEFAULT_SHEET_TITLE), root)
}

/// Sidecar entries written next to `content.json` in a new archive.
pub fn default_sidecars() -> Vec<SidecarEntry> {
    let metadata = json!({
        "creator": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }
    });
    let manifest = json!({
        "file-entries": {
            "content.json": {},
            "metadata.json": {},
        }
    });
    vec![
        SidecarEntry::file("metadata.json", metadata.to_string().into_bytes()),
        SidecarEntry::file("manifest.json", manifest.to_string().into_bytes()),
    ]
}
