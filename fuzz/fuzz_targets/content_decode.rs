//! Fuzz target for archive and `content.json` decoding.
//!
//! The input is tried both as a whole `.xmind` zip container and as a bare
//! `content.json` payload. Anything that decodes must also re-encode.
//!
//! Run with: cargo +nightly fuzz run content_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(archive) = xmindkit::XmindArchive::open(Cursor::new(data)) {
        let _ = archive.entries();
        let _ = archive.to_bytes();
    }

    if let Ok(document) = xmindkit::Document::from_json(data) {
        let _ = document.list_sheets();
        let _ = document.topic_paths();
        let _ = document.to_json_pretty();
    }
});
