//! Fuzz target for path expression parsing and resolution.
//!
//! Run with: cargo +nightly fuzz run path_expr

#![no_main]

use libfuzzer_sys::fuzz_target;
use xmindkit::template::TemplateConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(expression) = std::str::from_utf8(data) else {
        return;
    };

    let mut document = xmindkit::Document::from_template(&TemplateConfig::new());
    let _ = document.insert_topics("$[0].rootTopic", ["a", "b"]);

    if let Ok(expr) = xmindkit::PathExpr::parse(expression) {
        let _ = xmindkit::path::resolve(&document, &expr);
        let _ = document.insert_topic(expression, "fuzz");
    }
});
