//! Evaluation of path expressions against a [`Document`].

use std::fmt;

use super::parser::{PathExpr, Segment};
use crate::model::{Document, Topic};

/// Structural address of a topic: sheet index plus child indices from the
/// root topic downwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicAddr {
    sheet: usize,
    indices: Vec<usize>,
}

impl TopicAddr {
    /// The root topic of sheet `sheet`.
    pub fn root(sheet: usize) -> Self {
        Self {
            sheet,
            indices: Vec::new(),
        }
    }

    /// The `index`-th attached child of this topic.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            sheet: self.sheet,
            indices,
        }
    }

    /// Sheet index.
    pub fn sheet(&self) -> usize {
        self.sheet
    }

    /// Child indices below the root topic.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Nesting depth (root topic is 0).
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Renders a canonical path expression selecting this topic.
    pub fn to_expression(&self) -> String {
        let mut out = format!("$[{}].rootTopic", self.sheet);
        for index in &self.indices {
            out.push_str(&format!(".children.attached[{index}]"));
        }
        out
    }
}

impl fmt::Display for TopicAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_expression())
    }
}

/// A location in the document selected by a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    /// The whole sheet array (`$`).
    Document,
    /// A sheet.
    Sheet(usize),
    /// A topic.
    Topic(TopicAddr),
    /// The `children` object of a topic.
    Children(TopicAddr),
    /// The `children.attached` list of a topic, an insertion point.
    Attached(TopicAddr),
}

impl NodeRef {
    /// The topic that receives new children when this node is an insert target.
    pub fn owning_topic(&self) -> Option<&TopicAddr> {
        match self {
            NodeRef::Topic(addr) | NodeRef::Children(addr) | NodeRef::Attached(addr) => Some(addr),
            NodeRef::Document | NodeRef::Sheet(_) => None,
        }
    }

    /// Short name of the node kind, used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeRef::Document => "document",
            NodeRef::Sheet(_) => "sheet",
            NodeRef::Topic(_) => "topic",
            NodeRef::Children(_) => "children",
            NodeRef::Attached(_) => "attached list",
        }
    }
}

/// Evaluates `expr` against `document`.
///
/// Returns every matching node in document order. No match is an empty
/// vector, not an error; fields the model does not navigate (for example
/// `style` or `detached`) match nothing.
pub fn resolve(document: &Document, expr: &PathExpr) -> Vec<NodeRef> {
    let mut current = vec![NodeRef::Document];
    for segment in expr.segments() {
        let mut next = Vec::new();
        for node in &current {
            step(document, node, segment, &mut next);
        }
        if next.is_empty() {
            return next;
        }
        current = next;
    }
    current
}

fn step(document: &Document, node: &NodeRef, segment: &Segment, out: &mut Vec<NodeRef>) {
    match segment {
        Segment::Field(name) => {
            if let Some(child) = field(document, node, name) {
                out.push(child);
            }
        }
        Segment::Index(index) => match node {
            NodeRef::Document => {
                if let Some(i) = normalize_index(*index, document.len()) {
                    out.push(NodeRef::Sheet(i));
                }
            }
            NodeRef::Attached(addr) => {
                let len = document.topic(addr).map_or(0, Topic::child_count);
                if let Some(i) = normalize_index(*index, len) {
                    out.push(NodeRef::Topic(addr.child(i)));
                }
            }
            _ => {}
        },
        Segment::Wildcard => match node {
            NodeRef::Document => out.extend((0..document.len()).map(NodeRef::Sheet)),
            NodeRef::Attached(addr) => {
                let len = document.topic(addr).map_or(0, Topic::child_count);
                out.extend((0..len).map(|i| NodeRef::Topic(addr.child(i))));
            }
            NodeRef::Sheet(_) => out.extend(field(document, node, "rootTopic")),
            NodeRef::Topic(_) => out.extend(field(document, node, "children")),
            NodeRef::Children(_) => out.extend(field(document, node, "attached")),
        },
        Segment::Filter { field, value } => match node {
            NodeRef::Document => {
                for (i, sheet) in document.sheets().iter().enumerate() {
                    if sheet.field_str(field) == Some(value.as_str()) {
                        out.push(NodeRef::Sheet(i));
                    }
                }
            }
            NodeRef::Attached(addr) => {
                if let Some(topic) = document.topic(addr) {
                    for (i, child) in topic.attached().iter().enumerate() {
                        if child.field_str(field) == Some(value.as_str()) {
                            out.push(NodeRef::Topic(addr.child(i)));
                        }
                    }
                }
            }
            _ => {}
        },
    }
}

fn field(document: &Document, node: &NodeRef, name: &str) -> Option<NodeRef> {
    match (node, name) {
        (NodeRef::Sheet(i), "rootTopic") => Some(NodeRef::Topic(TopicAddr::root(*i))),
        (NodeRef::Topic(addr), "children") => document
            .topic(addr)?
            .children()
            .map(|_| NodeRef::Children(addr.clone())),
        (NodeRef::Children(addr), "attached") => document
            .topic(addr)?
            .children()?
            .attached()
            .map(|_| NodeRef::Attached(addr.clone())),
        _ => None,
    }
}

fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = if index < 0 { len + index } else { index };
    (0..len).contains(&index).then_some(index as usize)
}
