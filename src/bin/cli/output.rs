//! Output formatting for CLI operations.

use std::path::Path;

use serde_json::json;
use xmindkit::{EditResult, EntryInfo, SheetSummary, TopicPath};

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats the result of `create`
    fn format_created(&self, path: &Path, sheets: &[SheetSummary]) -> String;

    /// Formats a sheet listing
    fn format_sheets(&self, sheets: &[SheetSummary]) -> String;

    /// Formats a topic listing
    fn format_topic_paths(&self, topics: &[TopicPath]) -> String;

    /// Formats the result of an edit written to `path`
    fn format_edit_result(&self, result: &EditResult, path: &Path) -> String;

    /// Formats the archive entry listing
    fn format_entries(&self, entries: &[EntryInfo]) -> String;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_created(&self, path: &Path, sheets: &[SheetSummary]) -> String {
        let mut output = format!("Created {}\n", path.display());
        for sheet in sheets {
            output.push_str(&format!(
                "  Sheet \"{}\" with root topic \"{}\"\n",
                sheet.title, sheet.root_topic_title
            ));
        }
        output
    }

    fn format_sheets(&self, sheets: &[SheetSummary]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:>5} {:<24} {:<24} {:>8} {}\n",
            "Index", "Title", "Root topic", "Children", "Background"
        ));
        output.push_str(&"-".repeat(76));
        output.push('\n');

        for sheet in sheets {
            output.push_str(&format!(
                "{:>5} {:<24} {:<24} {:>8} {}\n",
                sheet.index,
                truncate(&sheet.title, 24),
                truncate(&sheet.root_topic_title, 24),
                sheet.child_count,
                sheet.background_color.as_deref().unwrap_or("-")
            ));
        }

        output.push_str(&"-".repeat(76));
        output.push('\n');
        output.push_str(&format!("{} sheet(s)\n", sheets.len()));
        output
    }

    fn format_topic_paths(&self, topics: &[TopicPath]) -> String {
        let mut output = String::new();
        for topic in topics {
            output.push_str(&format!(
                "{}{}  {}\n",
                "  ".repeat(topic.depth),
                topic.title,
                topic.path
            ));
        }
        output
    }

    fn format_edit_result(&self, result: &EditResult, path: &Path) -> String {
        let mut output = String::new();

        if result.topics_inserted > 0 {
            output.push_str(&format!("Inserted {} topic(s):\n", result.topics_inserted));
            for id in &result.inserted_ids {
                output.push_str(&format!("  {}\n", id));
            }
        }
        if result.sheets_restyled > 0 {
            output.push_str(&format!(
                "Updated background of {} sheet(s)\n",
                result.sheets_restyled
            ));
        }
        output.push_str(&format!(
            "Wrote {} ({})\n",
            path.display(),
            humanize_bytes(result.bytes_written)
        ));
        output
    }

    fn format_entries(&self, entries: &[EntryInfo]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{:>12} {}\n", "Size", "Name"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        let mut total_size: u64 = 0;
        for entry in entries {
            total_size += entry.size;
            let size_str = if entry.is_directory {
                String::new()
            } else {
                humanize_bytes(entry.size)
            };
            let marker = if entry.is_content { " *" } else { "" };
            output.push_str(&format!("{:>12} {}{}\n", size_str, entry.name, marker));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{} entries, {} total\n",
            entries.len(),
            humanize_bytes(total_size)
        ));
        output
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_created(&self, path: &Path, sheets: &[SheetSummary]) -> String {
        let obj = json!({
            "path": path.display().to_string(),
            "sheets": sheets,
        });

        serde_json::to_string_pretty(&obj).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_sheets(&self, sheets: &[SheetSummary]) -> String {
        serde_json::to_string_pretty(sheets).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_topic_paths(&self, topics: &[TopicPath]) -> String {
        serde_json::to_string_pretty(topics).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_edit_result(&self, result: &EditResult, path: &Path) -> String {
        let obj = json!({
            "path": path.display().to_string(),
            "topics_inserted": result.topics_inserted,
            "sheets_restyled": result.sheets_restyled,
            "inserted_ids": result.inserted_ids,
            "bytes_written": result.bytes_written,
        });

        serde_json::to_string_pretty(&obj).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_entries(&self, entries: &[EntryInfo]) -> String {
        serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Creates the appropriate formatter based on output format
pub fn create_formatter(format: super::OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        super::OutputFormat::Human => Box::new(HumanFormatter),
        super::OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Converts bytes to a human-readable string
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Shortens `s` to at most `width` characters for table columns.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
