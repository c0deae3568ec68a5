//! Path expressions for selecting sheets and topics.
//!
//! The dialect is the small JSONPath subset XMind tooling uses to point at
//! topics inside `content.json`:
//!
//! | Form | Meaning |
//! |------|---------|
//! | `$` | the sheet array |
//! | `[n]` | n-th sheet or attached child (negative counts from the end) |
//! | `.rootTopic`, `.children`, `.attached` | field traversal |
//! | `[?(@.title=="X")]` | elements whose string field equals a literal |
//! | `[*]` | every element |
//!
//! Field traversal only matches keys that are present. A topic stored
//! without `children` and one stored with `"children": {"attached": []}`
//! have the same (empty) child list, but only the second resolves
//! `.children.attached`. Address a parent through the topic itself
//! (`$[0].rootTopic`, not `$[0].rootTopic.children.attached`) to insert
//! under either form.
//!
//! ```
//! use xmindkit::Document;
//! use xmindkit::template::TemplateConfig;
//!
//! let doc = Document::from_template(&TemplateConfig::default());
//! let refs = doc.resolve("$[0].rootTopic").unwrap();
//! assert_eq!(refs.len(), 1);
//!
//! let none = doc.resolve(r#"$[0].rootTopic.children.attached[?(@.title=="Missing")]"#).unwrap();
//! assert!(none.is_empty());
//! ```

mod parser;
mod resolver;

pub use parser::{PathExpr, Segment};
pub use resolver::{NodeRef, TopicAddr, resolve};
