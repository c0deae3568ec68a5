//! CLI tool for editing XMind files.

mod commands;
mod exit_codes;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use flexi_logger::Logger;
use std::path::PathBuf;

use exit_codes::ExitCode;

/// Create and edit XMind mind maps
#[derive(Parser)]
#[command(name = "xmindkit")]
#[command(author, version, about = "Create and edit XMind mind maps", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new mind map
    Create {
        /// File to create
        path: PathBuf,

        /// Title of the first sheet
        #[arg(short = 's', long)]
        sheet_title: Option<String>,

        /// Title of the root topic
        #[arg(short = 'r', long)]
        root_topic: Option<String>,

        /// Existing .xmind file to start from
        #[arg(short = 't', long)]
        template: Option<PathBuf>,
    },

    /// Insert topics under a parent topic
    InsertTopic {
        /// File to edit
        path: PathBuf,

        /// Path expression of the parent topic, e.g. `$[0].rootTopic`
        #[arg(short = 'p', long, required_unless_present = "list_topics")]
        parent: Option<String>,

        /// Title of the new topic
        #[arg(
            short = 't',
            long,
            conflicts_with = "titles",
            required_unless_present_any = ["titles", "list_topics"]
        )]
        title: Option<String>,

        /// Titles of several new topics, inserted in order
        #[arg(long, num_args = 1.., conflicts_with = "id")]
        titles: Vec<String>,

        /// Identifier for the new topic (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// List every topic with its path expression and exit
        #[arg(long)]
        list_topics: bool,

        /// Write the result here instead of editing in place
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Set sheet background colors
    SetBackground {
        /// File to edit
        path: PathBuf,

        /// Color as #RRGGBBAA
        #[arg(short = 'c', long, default_value = xmindkit::Color::DEFAULT_BACKGROUND)]
        color: String,

        /// Apply to every sheet
        #[arg(short = 'a', long, conflicts_with = "sheet_index")]
        all: bool,

        /// Sheet to change
        #[arg(short = 's', long, default_value = "0")]
        sheet_index: usize,

        /// List sheets with their current backgrounds and exit
        #[arg(short = 'l', long)]
        list: bool,

        /// Write the result here instead of editing in place
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Print the document as JSON
    Show {
        /// File to read
        path: PathBuf,

        /// List archive entries instead
        #[arg(long)]
        entries: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Log level derived from the verbosity flags; `RUST_LOG` wins when set.
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let cli = Cli::parse();

    let _logger = match Logger::try_with_env_or_str(log_level(cli.verbose, cli.quiet))
        .and_then(|logger| logger.log_to_stderr().start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: failed to start logger: {}", e);
            None
        }
    };

    let exit_code = match cli.command {
        Commands::Create {
            path,
            sheet_title,
            root_topic,
            template,
        } => commands::create(&commands::CreateConfig {
            path: &path,
            sheet_title,
            root_topic,
            template: template.as_deref(),
            format: cli.format,
        }),

        Commands::InsertTopic {
            path,
            parent,
            title,
            titles,
            id,
            list_topics,
            output,
        } => commands::insert_topic(&commands::InsertTopicConfig {
            path: &path,
            parent: parent.as_deref(),
            title,
            titles,
            id,
            list_topics,
            output: output.as_deref(),
            format: cli.format,
        }),

        Commands::SetBackground {
            path,
            color,
            all,
            sheet_index,
            list,
            output,
        } => commands::set_background(&commands::SetBackgroundConfig {
            path: &path,
            color: &color,
            all,
            sheet_index,
            list,
            output: output.as_deref(),
            format: cli.format,
        }),

        Commands::Show { path, entries } => commands::show(&path, entries, cli.format),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::Success
        }
    };

    std::process::exit(exit_code.code());
}
