//! Command implementations for the CLI tool.

use std::path::{Path, PathBuf};

use xmindkit::{Color, EditableArchive, TemplateConfig, XmindArchive};

use crate::OutputFormat;
use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::create_formatter;

/// Configuration for the create command.
pub struct CreateConfig<'a> {
    pub path: &'a Path,
    pub sheet_title: Option<String>,
    pub root_topic: Option<String>,
    pub template: Option<&'a Path>,
    pub format: OutputFormat,
}

/// Configuration for the insert-topic command.
pub struct InsertTopicConfig<'a> {
    pub path: &'a Path,
    pub parent: Option<&'a str>,
    pub title: Option<String>,
    pub titles: Vec<String>,
    pub id: Option<String>,
    pub list_topics: bool,
    pub output: Option<&'a Path>,
    pub format: OutputFormat,
}

/// Configuration for the set-background command.
pub struct SetBackgroundConfig<'a> {
    pub path: &'a Path,
    pub color: &'a str,
    pub all: bool,
    pub sheet_index: usize,
    pub list: bool,
    pub output: Option<&'a Path>,
    pub format: OutputFormat,
}

/// Create command implementation
pub fn create(config: &CreateConfig<'_>) -> ExitCode {
    let formatter = create_formatter(config.format);

    let mut template = TemplateConfig::new();
    template.sheet_title = config.sheet_title.clone();
    template.root_topic_title = config.root_topic.clone();

    let archive = match config.template {
        Some(template_path) => match XmindArchive::open_template(template_path, &template) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Error opening template: {}", e);
                return error_to_exit_code(&e);
            }
        },
        None => XmindArchive::create(&template),
    };

    if let Err(e) = archive.save_path(config.path) {
        eprintln!("Error writing {}: {}", config.path.display(), e);
        return error_to_exit_code(&e);
    }

    print!(
        "{}",
        formatter.format_created(config.path, &archive.document().list_sheets())
    );
    ExitCode::Success
}

/// Insert-topic command implementation
pub fn insert_topic(config: &InsertTopicConfig<'_>) -> ExitCode {
    let formatter = create_formatter(config.format);

    let archive = match open_archive(config.path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if config.list_topics {
        print!(
            "{}",
            formatter.format_topic_paths(&archive.document().topic_paths())
        );
        return ExitCode::Success;
    }

    let Some(parent) = config.parent else {
        eprintln!("Error: --parent is required");
        return ExitCode::BadArgs;
    };

    let mut editor = archive.edit();
    let queued = if config.titles.is_empty() {
        match &config.title {
            Some(title) => editor.insert_topic_with_id(parent, title, config.id.as_deref()),
            None => {
                eprintln!("Error: either --title or --titles is required");
                return ExitCode::BadArgs;
            }
        }
    } else {
        editor.insert_topics(parent, config.titles.iter().cloned())
    };
    if let Err(e) = queued {
        eprintln!("Error: {}", e);
        return error_to_exit_code(&e);
    }

    let output = output_path(config.path, config.output);
    match editor.apply_to_path(&output) {
        Ok(result) => {
            print!("{}", formatter.format_edit_result(&result, &output));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error inserting topic: {}", e);
            error_to_exit_code(&e)
        }
    }
}

/// Set-background command implementation
pub fn set_background(config: &SetBackgroundConfig<'_>) -> ExitCode {
    let formatter = create_formatter(config.format);

    // Reject a bad color before touching the file system
    if !config.list {
        if let Err(e) = Color::new(config.color) {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    }

    let archive = match open_archive(config.path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if config.list {
        print!(
            "{}",
            formatter.format_sheets(&archive.document().list_sheets())
        );
        return ExitCode::Success;
    }

    let mut editor = archive.edit();
    let queued = if config.all {
        editor.set_all_backgrounds(config.color)
    } else {
        editor.set_background(config.sheet_index, config.color)
    };
    if let Err(e) = queued {
        eprintln!("Error: {}", e);
        return error_to_exit_code(&e);
    }

    let output = output_path(config.path, config.output);
    match editor.apply_to_path(&output) {
        Ok(result) => {
            print!("{}", formatter.format_edit_result(&result, &output));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error setting background: {}", e);
            error_to_exit_code(&e)
        }
    }
}

/// Show command implementation
pub fn show(path: &Path, entries: bool, format: OutputFormat) -> ExitCode {
    let archive = match open_archive(path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if entries {
        let formatter = create_formatter(format);
        return match archive.entries() {
            Ok(list) => {
                print!("{}", formatter.format_entries(&list));
                ExitCode::Success
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                error_to_exit_code(&e)
            }
        };
    }

    match archive.document().to_json_pretty() {
        Ok(json) => {
            println!("{}", String::from_utf8_lossy(&json));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    }
}

/// Helper to open an archive, reporting failures on stderr
fn open_archive(path: &Path) -> Result<XmindArchive, ExitCode> {
    XmindArchive::open_path(path).map_err(|e| {
        eprintln!("Error opening {}: {}", path.display(), e);
        error_to_exit_code(&e)
    })
}

/// Edits are written back in place unless `--output` is given.
fn output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    output.unwrap_or(input).to_path_buf()
}
