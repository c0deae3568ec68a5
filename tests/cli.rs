//! CLI command integration tests.
//!
//! These tests verify the core functionality that CLI commands would use.
//! Tests use library functions directly rather than subprocess execution.

mod common;

use std::path::PathBuf;

use tempfile::TempDir;
use xmindkit::edit::EditableArchive;
use xmindkit::{Color, Error, TemplateConfig, XmindArchive};

use common::{THUMBNAIL, read_content, read_entry};

/// Creates the sample archive file on disk.
fn create_sample_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = common::write_sample(temp_dir.path(), "sample.xmind");
    (temp_dir, path)
}

// =============================================================================
// Create Command Tests
// =============================================================================

#[test]
fn test_create_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("new.xmind");

    let _ = XmindArchive::create(&TemplateConfig::new())
        .save_path(&path)
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let content = read_content(&bytes);
    assert_eq!(content.as_array().unwrap().len(), 1);
    assert_eq!(content[0]["title"], "Sheet 1");
    assert_eq!(content[0]["rootTopic"]["title"], "Central Topic");
    assert_eq!(content[0]["rootTopic"]["children"]["attached"], serde_json::json!([]));
    assert!(!read_entry(&bytes, "metadata.json").is_empty());
}

#[test]
fn test_create_with_titles() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("titled.xmind");

    let config = TemplateConfig::new()
        .sheet_title("Research")
        .root_topic_title("Questions");
    let _ = XmindArchive::create(&config).save_path(&path).unwrap();

    let archive = XmindArchive::open_path(&path).unwrap();
    let summary = &archive.document().list_sheets()[0];
    assert_eq!(summary.title, "Research");
    assert_eq!(summary.root_topic_title, "Questions");
    assert_eq!(summary.child_count, 0);
}

#[test]
fn test_create_from_template_keeps_sidecars() {
    let (temp_dir, template) = create_sample_file();
    let path = temp_dir.path().join("from-template.xmind");

    let config = TemplateConfig::new().sheet_title("Copy");
    let archive = XmindArchive::open_template(&template, &config).unwrap();
    let _ = archive.save_path(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(read_entry(&bytes, "Thumbnails/thumbnail.png"), THUMBNAIL);
    let content = read_content(&bytes);
    assert_eq!(content[0]["title"], "Copy");
    assert_eq!(content[0]["rootTopic"]["title"], "Project");
    assert_eq!(content[1]["title"], "Notes");
}

// =============================================================================
// Insert-Topic Command Tests
// =============================================================================

#[test]
fn test_insert_topic_in_place() {
    let (_temp_dir, path) = create_sample_file();

    let mut editor = XmindArchive::open_path(&path).unwrap().edit();
    editor
        .insert_topic_with_id("$[0].rootTopic", "Gamma", Some("gamma"))
        .unwrap();
    let result = editor.apply_to_path(&path).unwrap();
    assert_eq!(result.inserted_ids, ["gamma"]);

    let content = read_content(&std::fs::read(&path).unwrap());
    let attached = &content[0]["rootTopic"]["children"]["attached"];
    assert_eq!(attached[2]["id"], "gamma");
    assert_eq!(attached[2]["title"], "Gamma");
    assert_eq!(attached[2]["titleUnedited"], false);
}

#[test]
fn test_insert_titles_to_output() {
    let (temp_dir, path) = create_sample_file();
    let output = temp_dir.path().join("out").join("edited.xmind");
    let original = std::fs::read(&path).unwrap();

    let mut editor = XmindArchive::open_path(&path).unwrap().edit();
    editor
        .insert_topics("$[1].rootTopic", ["a", "b", "c"])
        .unwrap();
    let result = editor.apply_to_path(&output).unwrap();
    assert_eq!(result.topics_inserted, 3);

    assert_eq!(std::fs::read(&path).unwrap(), original);
    let content = read_content(&std::fs::read(&output).unwrap());
    assert_eq!(
        content[1]["rootTopic"]["children"]["attached"][2]["title"],
        "c"
    );
}

#[test]
fn test_list_topics_is_read_only() {
    let (_temp_dir, path) = create_sample_file();
    let before = std::fs::read(&path).unwrap();

    let archive = XmindArchive::open_path(&path).unwrap();
    let topics = archive.document().topic_paths();
    assert_eq!(topics[0].path, "$[0].rootTopic");
    assert_eq!(topics[0].depth, 0);
    assert!(topics.iter().any(|t| t.title == "Beta one" && t.depth == 2));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_insert_topic_unknown_parent_leaves_file() {
    let (_temp_dir, path) = create_sample_file();
    let before = std::fs::read(&path).unwrap();

    let mut editor = XmindArchive::open_path(&path).unwrap().edit();
    editor
        .insert_topic(r#"$[0].rootTopic.children.attached[?(@.title=="Zeta")]"#, "x")
        .unwrap();
    let err = editor.apply_to_path(&path).unwrap_err();
    assert!(matches!(err, Error::TargetNotFound { .. }));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

// =============================================================================
// Set-Background Command Tests
// =============================================================================

#[test]
fn test_set_background_default_color() {
    let (_temp_dir, path) = create_sample_file();

    let mut editor = XmindArchive::open_path(&path).unwrap().edit();
    editor
        .set_background(1, Color::DEFAULT_BACKGROUND)
        .unwrap();
    let _ = editor.apply_to_path(&path).unwrap();

    let content = read_content(&std::fs::read(&path).unwrap());
    assert_eq!(content[1]["style"]["properties"]["svg:fill"], "#000000FF");
    assert_eq!(content[0]["style"]["properties"]["svg:fill"], "#FFFFFFFF");
}

#[test]
fn test_set_background_all_sheets() {
    let (_temp_dir, path) = create_sample_file();

    let mut editor = XmindArchive::open_path(&path).unwrap().edit();
    editor.set_all_backgrounds("#336699FF").unwrap();
    let result = editor.apply_to_path(&path).unwrap();
    assert_eq!(result.sheets_restyled, 2);

    let archive = XmindArchive::open_path(&path).unwrap();
    assert!(
        archive
            .document()
            .list_sheets()
            .iter()
            .all(|s| s.background_color.as_deref() == Some("#336699FF"))
    );
}

#[test]
fn test_set_background_rejects_before_writing() {
    let (_temp_dir, path) = create_sample_file();
    let before = std::fs::read(&path).unwrap();

    let mut editor = XmindArchive::open_path(&path).unwrap().edit();
    assert!(matches!(
        editor.set_background(0, "#12345"),
        Err(Error::InvalidColor { .. })
    ));
    assert!(matches!(
        editor.set_background(9, "#000000FF"),
        Err(Error::SheetIndexOutOfRange { index: 9, count: 2 })
    ));
    assert!(editor.apply_to_path(&path).unwrap().is_empty());

    let archive = XmindArchive::open_path(&path).unwrap();
    let reread = archive.document().list_sheets();
    let original = XmindArchive::open(std::io::Cursor::new(before))
        .unwrap()
        .document()
        .list_sheets();
    assert_eq!(reread, original);
}

// =============================================================================
// Show Command Tests
// =============================================================================

#[test]
fn test_entries_listing() {
    let (_temp_dir, path) = create_sample_file();
    let archive = XmindArchive::open_path(&path).unwrap();
    let entries = archive.entries().unwrap();

    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "metadata.json",
            "content.json",
            "manifest.json",
            "Thumbnails/thumbnail.png"
        ]
    );
    assert!(entries[1].is_content);
    assert_eq!(entries[3].size, THUMBNAIL.len() as u64);
}
