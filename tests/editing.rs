//! Integration tests for document editing operations.
//!
//! These tests verify that the editing API correctly:
//! - Appends topics under a resolved parent, singly and in batches
//! - Sets sheet backgrounds without disturbing other style properties
//! - Returns correct error types for invalid targets and arguments
//! - Leaves the document untouched when an operation fails

mod common;

use std::collections::HashSet;
use std::io::Cursor;

use xmindkit::edit::{EditableArchive, Editor};
use xmindkit::model::BACKGROUND_PROPERTY;
use xmindkit::{Document, Error, TemplateConfig, XmindArchive};

use common::{BETA_ONE, read_content, sample_xmind};

fn sample_document() -> Document {
    XmindArchive::open(Cursor::new(sample_xmind()))
        .unwrap()
        .into_document()
}

// ============================================================================
// Insert topic tests
// ============================================================================

#[test]
fn test_insert_topic_appends_last() {
    let mut doc = sample_document();
    let id = doc.insert_topic("$[0].rootTopic", "Gamma").unwrap();

    let root = doc.sheets()[0].root_topic();
    assert_eq!(root.child_count(), 3);
    let gamma = root.child(2).unwrap();
    assert_eq!(gamma.id(), id);
    assert_eq!(gamma.title(), "Gamma");
    assert_eq!(gamma.title_unedited(), Some(false));
    assert_eq!(gamma.child_count(), 0);
    assert_eq!(root.child(0).unwrap().title(), "Alpha");
}

#[test]
fn test_insert_topic_creates_children_field() {
    let mut doc = sample_document();
    doc.insert_topic("$[1].rootTopic", "First note").unwrap();

    let root = doc.sheets()[1].root_topic();
    assert_eq!(root.child_count(), 1);
    assert!(root.children().is_some());
}

#[test]
fn test_insert_topic_through_attached_and_filter() {
    let mut doc = sample_document();
    doc.insert_topic("$[0].rootTopic.children.attached", "Via attached")
        .unwrap();
    doc.insert_topic(
        r#"$[0].rootTopic.children.attached[?(@.title=="Beta")]"#,
        "Via filter",
    )
    .unwrap();

    let root = doc.sheets()[0].root_topic();
    assert_eq!(root.child(2).unwrap().title(), "Via attached");
    let beta = root.child(1).unwrap();
    assert_eq!(beta.child_count(), 2);
    assert_eq!(beta.child(1).unwrap().title(), "Via filter");
}

#[test]
fn test_insert_topic_nested() {
    let mut doc = sample_document();
    let id = doc.insert_topic(BETA_ONE, "Leaf").unwrap();
    let addr = doc.resolve_topic(BETA_ONE).unwrap();
    let parent = doc.topic(&addr).unwrap();
    assert_eq!(parent.child(0).unwrap().id(), id);
}

#[test]
fn test_insert_topic_ids_are_unique() {
    let mut doc = sample_document();
    let a = doc.insert_topic("$[0].rootTopic", "Same").unwrap();
    let b = doc.insert_topic("$[0].rootTopic", "Same").unwrap();
    assert_ne!(a, b);
    assert!(!["sheet-1", "root-1", "t-a", "t-b", "t-b1", "style-1"].contains(&a.as_str()));
}

#[test]
fn test_insert_topic_with_custom_id() {
    let mut doc = sample_document();
    let id = doc
        .insert_topic_with_id("$[0].rootTopic", "Mine", Some("my-id"))
        .unwrap();
    assert_eq!(id, "my-id");
    assert!(doc.contains_id("my-id"));

    let err = doc
        .insert_topic_with_id("$[0].rootTopic", "Clash", Some("t-a"))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId { ref id } if id == "t-a"));
}

#[test]
fn test_insert_topic_not_found() {
    let mut doc = sample_document();
    let before = doc.clone();
    let err = doc
        .insert_topic(r#"$[0].rootTopic.children.attached[?(@.title=="Nope")]"#, "X")
        .unwrap_err();
    assert!(matches!(err, Error::TargetNotFound { .. }));
    assert_eq!(doc, before);
}

#[test]
fn test_insert_topic_ambiguous() {
    let mut doc = sample_document();
    let before = doc.clone();
    let err = doc.insert_topic("$[*].rootTopic", "X").unwrap_err();
    assert!(matches!(err, Error::AmbiguousTarget { count: 2, .. }));
    assert_eq!(doc, before);
}

#[test]
fn test_insert_topic_on_sheet_is_invalid_target() {
    let mut doc = sample_document();
    let err = doc.insert_topic("$[0]", "X").unwrap_err();
    assert!(matches!(err, Error::InvalidTarget { kind: "sheet", .. }));
}

#[test]
fn test_insert_topic_bad_path_syntax() {
    let mut doc = sample_document();
    let err = doc.insert_topic("$[0", "X").unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }));
}

// ============================================================================
// Batch insert tests
// ============================================================================

#[test]
fn test_insert_topics_in_order() {
    let mut doc = sample_document();
    let ids = doc
        .insert_topics("$[0].rootTopic", ["One", "Two", "Three"])
        .unwrap();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);

    let root = doc.sheets()[0].root_topic();
    let titles: Vec<_> = (2..5).map(|i| root.child(i).unwrap().title()).collect();
    assert_eq!(titles, ["One", "Two", "Three"]);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(root.child(i + 2).unwrap().id(), id.as_str());
    }
}

#[test]
fn test_insert_topics_empty_batch() {
    let mut doc = sample_document();
    let before = doc.clone();
    let ids = doc
        .insert_topics("$[0].rootTopic", Vec::<String>::new())
        .unwrap();
    assert!(ids.is_empty());
    assert_eq!(doc, before);
}

#[test]
fn test_insert_topics_not_found_leaves_document() {
    let mut doc = sample_document();
    let before = doc.clone();
    let err = doc
        .insert_topics("$[5].rootTopic", ["a", "b"])
        .unwrap_err();
    assert!(matches!(err, Error::TargetNotFound { .. }));
    assert_eq!(doc, before);
}

// ============================================================================
// Background tests
// ============================================================================

#[test]
fn test_set_background_preserves_other_properties() {
    let mut doc = sample_document();
    doc.set_background(0, "#000000FF").unwrap();

    let style = doc.sheets()[0].style().unwrap();
    assert_eq!(style.id(), Some("style-1"));
    assert_eq!(style.property(BACKGROUND_PROPERTY), Some("#000000FF"));
    assert_eq!(style.property("multi-line-colors"), Some("none"));
}

#[test]
fn test_set_background_creates_style() {
    let mut doc = sample_document();
    assert!(doc.sheets()[1].style().is_none());
    doc.set_background(1, "#abcdef80").unwrap();

    let sheet = &doc.sheets()[1];
    assert_eq!(sheet.background(), Some("#abcdef80"));
    let style_id = sheet.style().and_then(|s| s.id()).unwrap();
    assert!(!style_id.is_empty());
}

#[test]
fn test_set_background_invalid_color() {
    let mut doc = sample_document();
    let before = doc.clone();
    for bad in ["000000FF", "#000000", "#GG0000FF", "#000000FF00", ""] {
        let err = doc.set_background(0, bad).unwrap_err();
        assert!(matches!(err, Error::InvalidColor { .. }), "{bad}");
    }
    assert_eq!(doc, before);
}

#[test]
fn test_set_background_index_out_of_range() {
    let mut doc = sample_document();
    let err = doc.set_background(2, "#000000FF").unwrap_err();
    assert!(matches!(
        err,
        Error::SheetIndexOutOfRange { index: 2, count: 2 }
    ));
}

#[test]
fn test_set_all_backgrounds() {
    let mut doc = sample_document();
    let changed = doc.set_all_backgrounds("#FF0000FF").unwrap();
    assert_eq!(changed, 2);
    for summary in doc.list_sheets() {
        assert_eq!(summary.background_color.as_deref(), Some("#FF0000FF"));
    }
}

#[test]
fn test_set_all_backgrounds_three_sheets() {
    let content = serde_json::json!([
        {
            "id": "s1",
            "title": "Styled",
            "rootTopic": { "id": "r1", "title": "One" },
            "style": {
                "id": "st1",
                "properties": { "svg:fill": "#FFFFFFFF", "multi-line-colors": "#017c98 #0098b9" }
            }
        },
        {
            "id": "s2",
            "title": "Bare style",
            "rootTopic": { "id": "r2", "title": "Two" },
            "style": { "id": "st2" }
        },
        { "id": "s3", "title": "Unstyled", "rootTopic": { "id": "r3", "title": "Three" } }
    ]);
    let archive = XmindArchive::open(Cursor::new(common::create_xmind(&content))).unwrap();
    let mut doc = archive.into_document();

    assert_eq!(doc.set_all_backgrounds("#102030FF").unwrap(), 3);

    for sheet in doc.sheets() {
        assert_eq!(sheet.background(), Some("#102030FF"), "{}", sheet.title());
    }
    let style = doc.sheets()[0].style().unwrap();
    assert_eq!(style.property("multi-line-colors"), Some("#017c98 #0098b9"));
    assert_eq!(style.property(BACKGROUND_PROPERTY), Some("#102030FF"));
    assert!(doc.validate().is_ok());
}

#[test]
fn test_set_all_backgrounds_invalid_color_touches_nothing() {
    let mut doc = sample_document();
    let before = doc.clone();
    assert!(doc.set_all_backgrounds("red").is_err());
    assert_eq!(doc, before);
}

// ============================================================================
// List sheets tests
// ============================================================================

#[test]
fn test_list_sheets() {
    let doc = sample_document();
    let sheets = doc.list_sheets();
    assert_eq!(sheets.len(), 2);

    assert_eq!(sheets[0].index, 0);
    assert_eq!(sheets[0].title, "Plan");
    assert_eq!(sheets[0].root_topic_title, "Project");
    assert_eq!(sheets[0].child_count, 2);
    assert_eq!(sheets[0].background_color.as_deref(), Some("#FFFFFFFF"));

    assert_eq!(sheets[1].title, "Notes");
    assert_eq!(sheets[1].child_count, 0);
    assert_eq!(sheets[1].background_color, None);
}

#[test]
fn test_topic_paths_resolve_back() {
    let doc = sample_document();
    let paths = doc.topic_paths();
    assert_eq!(paths.len(), 5);
    for entry in &paths {
        let addr = doc.resolve_topic(&entry.path).unwrap();
        assert_eq!(doc.topic(&addr).unwrap().id(), entry.id);
    }
}

// ============================================================================
// Editor tests
// ============================================================================

#[test]
fn test_editor_apply_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_sample(dir.path(), "in.xmind");
    let output = dir.path().join("out.xmind");

    let mut editor = Editor::open_path(&input).unwrap();
    editor
        .insert_topics("$[0].rootTopic", ["x", "y"])
        .unwrap();
    editor.set_all_backgrounds("#222222FF").unwrap();
    let result = editor.apply_to_path(&output).unwrap();

    assert_eq!(result.topics_inserted, 2);
    assert_eq!(result.sheets_restyled, 2);

    let content = read_content(&std::fs::read(&output).unwrap());
    assert_eq!(content[0]["rootTopic"]["children"]["attached"][3]["title"], "y");
    assert_eq!(content[1]["style"]["properties"]["svg:fill"], "#222222FF");

    // Input untouched
    assert_eq!(std::fs::read(&input).unwrap(), sample_xmind());
}

#[test]
fn test_editor_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xmind");

    let mut editor = XmindArchive::open(Cursor::new(sample_xmind())).unwrap().edit();
    editor.insert_topic("$[0].rootTopic", "ok").unwrap();
    editor.insert_topic("$[*].rootTopic", "ambiguous").unwrap();

    let err = editor.apply_to_path(&output).unwrap_err();
    assert!(err.is_target_error());
    assert!(!output.exists());
}

#[test]
fn test_editor_on_new_document() {
    let mut editor = XmindArchive::create(&TemplateConfig::new()).edit();
    editor.insert_topic("$[0].rootTopic", "Child").unwrap();
    editor
        .insert_topic("$[0].rootTopic.children.attached[-1]", "Grandchild")
        .unwrap();
    let result = editor.apply().unwrap();
    assert_eq!(result.inserted_ids.len(), 2);

    let root = editor.archive().document().sheets()[0].root_topic();
    assert_eq!(root.child(0).unwrap().child(0).unwrap().title(), "Grandchild");
}
