//! Mutation operations on a [`Document`].
//!
//! Every operation validates its input and resolves its target before
//! touching the tree, so a failed call leaves the document unchanged.

use super::document::Document;
use super::id::IdAllocator;
use super::topic::Topic;
use crate::path::{self, NodeRef, PathExpr, TopicAddr};
use crate::{Color, Error, Result};

impl Document {
    /// Resolves a path expression to every matching node.
    ///
    /// # Errors
    ///
    /// Only a malformed expression is an error; no match is `Ok(vec![])`.
    pub fn resolve(&self, expression: &str) -> Result<Vec<NodeRef>> {
        let expr = PathExpr::parse(expression)?;
        Ok(path::resolve(self, &expr))
    }

    /// Resolves a path expression that must select exactly one topic.
    ///
    /// A `children` or `children.attached` reference counts as its owning
    /// topic.
    ///
    /// # Errors
    ///
    /// - [`Error::TargetNotFound`] when nothing matches
    /// - [`Error::AmbiguousTarget`] when more than one node matches
    /// - [`Error::InvalidTarget`] when the match is a sheet or the document
    pub fn resolve_topic(&self, expression: &str) -> Result<TopicAddr> {
        let mut refs = self.resolve(expression)?;
        match refs.len() {
            0 => Err(Error::TargetNotFound {
                path: expression.to_string(),
            }),
            1 => {
                let node = refs.remove(0);
                node.owning_topic().cloned().ok_or_else(|| Error::InvalidTarget {
                    path: expression.to_string(),
                    kind: node.kind(),
                })
            }
            count => Err(Error::AmbiguousTarget {
                path: expression.to_string(),
                count,
            }),
        }
    }

    /// Appends a topic titled `title` under the single topic selected by
    /// `parent`, returning the new topic's id.
    ///
    /// ```
    /// use xmindkit::Document;
    /// use xmindkit::template::TemplateConfig;
    ///
    /// let mut doc = Document::from_template(&TemplateConfig::default());
    /// let id = doc.insert_topic("$[0].rootTopic", "First branch").unwrap();
    /// let root = doc.sheets()[0].root_topic();
    /// assert_eq!(root.child(0).unwrap().id(), id);
    /// ```
    pub fn insert_topic(&mut self, parent: &str, title: &str) -> Result<String> {
        self.insert_topic_with_id(parent, title, None)
    }

    /// Like [`insert_topic`](Self::insert_topic), optionally with a
    /// caller-chosen id.
    ///
    /// # Errors
    ///
    /// In addition to the target errors, [`Error::DuplicateId`] if `id` is
    /// empty or already used in the document.
    pub fn insert_topic_with_id(
        &mut self,
        parent: &str,
        title: &str,
        id: Option<&str>,
    ) -> Result<String> {
        let addr = self.resolve_topic(parent)?;
        let mut ids = IdAllocator::for_document(self);
        let id = match id {
            Some(id) => ids.claim(id)?,
            None => ids.fresh(),
        };

        let target = self.topic_mut(&addr).ok_or_else(|| Error::TargetNotFound {
            path: parent.to_string(),
        })?;
        target.push_child(Topic::new(id.clone(), title));
        log::debug!("inserted topic {id} under {addr}");
        Ok(id)
    }

    /// Appends one topic per title, in order, under the single topic
    /// selected by `parent`.
    ///
    /// The parent is resolved once; every new topic gets a distinct fresh id.
    pub fn insert_topics<I, S>(&mut self, parent: &str, titles: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let addr = self.resolve_topic(parent)?;
        let mut ids = IdAllocator::for_document(self);
        let topics: Vec<Topic> = titles
            .into_iter()
            .map(|title| Topic::new(ids.fresh(), title.as_ref()))
            .collect();

        let target = self.topic_mut(&addr).ok_or_else(|| Error::TargetNotFound {
            path: parent.to_string(),
        })?;
        let new_ids: Vec<String> = topics.iter().map(|t| t.id().to_string()).collect();
        for topic in topics {
            target.push_child(topic);
        }
        log::debug!("inserted {} topic(s) under {addr}", new_ids.len());
        Ok(new_ids)
    }

    /// Sets the background of sheet `index` to `color` (`#RRGGBBAA`).
    ///
    /// Other style properties of the sheet are preserved.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColor`] or [`Error::SheetIndexOutOfRange`]; the
    /// document is not modified in either case.
    pub fn set_background(&mut self, index: usize, color: &str) -> Result<()> {
        let color = Color::new(color)?;
        self.set_background_color(index, &color)
    }

    /// Sets the background of sheet `index` from an already validated color.
    pub fn set_background_color(&mut self, index: usize, color: &Color) -> Result<()> {
        let count = self.len();
        if index >= count {
            return Err(Error::SheetIndexOutOfRange { index, count });
        }
        let mut ids = IdAllocator::for_document(self);
        if let Some(sheet) = self.sheet_mut(index) {
            sheet.set_background(color, || ids.fresh());
        }
        log::debug!("sheet {index} background set to {color}");
        Ok(())
    }

    /// Sets the background of every sheet, returning the number of sheets
    /// changed. The color is validated once before any sheet is touched.
    pub fn set_all_backgrounds(&mut self, color: &str) -> Result<usize> {
        let color = Color::new(color)?;
        Ok(self.set_all_background_colors(&color))
    }

    /// Sets the background of every sheet from an already validated color.
    pub fn set_all_background_colors(&mut self, color: &Color) -> usize {
        let mut ids = IdAllocator::for_document(self);
        let mut changed = 0;
        for sheet in self.sheets_mut() {
            sheet.set_background(color, || ids.fresh());
            changed += 1;
        }
        log::debug!("{changed} sheet background(s) set to {color}");
        changed
    }
}
