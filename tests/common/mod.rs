//! Shared test utilities for integration tests.
//!
//! This module builds XMind archives in memory so tests do not depend on
//! fixture files.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Thumbnail bytes that are not valid UTF-8, to catch any text re-encoding.
pub const THUMBNAIL: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xFF, 0x00];

pub const METADATA: &[u8] = br#"{"creator":{"name":"Vana","version":"24.01"}}"#;

pub const MANIFEST: &[u8] =
    br#"{"file-entries":{"content.json":{},"metadata.json":{},"Thumbnails/thumbnail.png":{}}}"#;

/// Path of the nested "Beta one" topic in [`sample_content`].
pub const BETA_ONE: &str = "$[0].rootTopic.children.attached[1].children.attached[0]";

/// A two-sheet document exercising nesting, fields the crate does not
/// model, and an existing style.
pub fn sample_content() -> Value {
    json!([
        {
            "id": "sheet-1",
            "class": "sheet",
            "title": "Plan",
            "rootTopic": {
                "id": "root-1",
                "class": "topic",
                "title": "Project",
                "structureClass": "org.xmind.ui.logic.right",
                "children": {
                    "attached": [
                        { "id": "t-a", "title": "Alpha" },
                        {
                            "id": "t-b",
                            "title": "Beta",
                            "children": {
                                "attached": [ { "id": "t-b1", "title": "Beta one" } ]
                            }
                        }
                    ],
                    "detached": [ { "id": "float-1", "title": "Floating" } ]
                }
            },
            "style": {
                "id": "style-1",
                "properties": { "svg:fill": "#FFFFFFFF", "multi-line-colors": "none" }
            },
            "theme": { "id": "theme-1", "map": { "fill": "#ffffff" } }
        },
        {
            "id": "sheet-2",
            "title": "Notes",
            "rootTopic": { "id": "root-2", "title": "Notes root" }
        }
    ])
}

/// Builds a zip archive from `(name, data)` pairs, in order.
pub fn create_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        zip.start_file(*name, options).expect("start entry");
        zip.write_all(data).expect("write entry");
    }
    zip.finish().expect("finish zip").into_inner()
}

/// Builds an XMind archive around `content` with the usual sidecar entries.
pub fn create_xmind(content: &Value) -> Vec<u8> {
    let content = serde_json::to_vec(content).expect("serialize content");
    create_zip(&[
        ("metadata.json", METADATA),
        ("content.json", content.as_slice()),
        ("manifest.json", MANIFEST),
        ("Thumbnails/thumbnail.png", THUMBNAIL),
    ])
}

/// The sample document as archive bytes.
pub fn sample_xmind() -> Vec<u8> {
    create_xmind(&sample_content())
}

/// Writes the sample archive to `dir/name` and returns its path.
pub fn write_sample(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, sample_xmind()).expect("write sample archive");
    path
}

/// Entry names of a zip archive, in archive order.
pub fn entry_names(bytes: &[u8]) -> Vec<String> {
    let mut zip = ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    (0..zip.len())
        .map(|i| zip.by_index(i).expect("entry").name().to_string())
        .collect()
}

/// Raw bytes of one entry.
pub fn read_entry(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut zip = ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    let mut file = zip.by_name(name).expect("entry exists");
    let mut data = Vec::new();
    file.read_to_end(&mut data).expect("read entry");
    data
}

/// Parsed `content.json` of an archive.
pub fn read_content(bytes: &[u8]) -> Value {
    serde_json::from_slice(&read_entry(bytes, "content.json")).expect("content is JSON")
}
