//! Identifier generation for sheets, topics and styles.

use std::collections::HashSet;

use uuid::Uuid;

use super::Document;
use crate::{Error, Result};

/// Hands out identifiers that are unique within one document.
///
/// Seeded with every id already present, so a fresh id never collides with
/// an existing sheet, topic or style.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    used: HashSet<String>,
}

impl IdAllocator {
    pub(crate) fn for_document(document: &Document) -> Self {
        let mut used = HashSet::new();
        for sheet in document.sheets() {
            used.insert(sheet.id().to_string());
            if let Some(id) = sheet.style().and_then(|s| s.id()) {
                used.insert(id.to_string());
            }
            sheet.root_topic().walk(&mut |topic| {
                used.insert(topic.id().to_string());
            });
        }
        Self { used }
    }

    /// Returns a new random (UUIDv4) identifier.
    pub(crate) fn fresh(&mut self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.used.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Reserves a caller-chosen identifier.
    pub(crate) fn claim(&mut self, id: &str) -> Result<String> {
        if id.is_empty() || !self.used.insert(id.to_string()) {
            return Err(Error::DuplicateId { id: id.to_string() });
        }
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let mut ids = IdAllocator::default();
        let a = ids.fresh();
        let b = ids.fresh();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_claim_rejects_reuse_and_empty() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.claim("custom").unwrap(), "custom");
        assert!(matches!(ids.claim("custom"), Err(Error::DuplicateId { .. })));
        assert!(matches!(ids.claim(""), Err(Error::DuplicateId { .. })));
    }
}
