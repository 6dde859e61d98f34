use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for filetemplates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Folder with the bundled templates (defaults to `templates` next to the executable).
    #[arg(long = "bundled-dir", value_name = "DIR", global = true)]
    pub bundled_dir: Option<PathBuf>,

    /// Workspace root: holds the settings file and anchors relative template folders.
    #[arg(long, value_name = "DIR", global = true)]
    pub workspace: Option<PathBuf>,

    /// Additional templates folder, scanned after the configured ones (repeatable).
    #[arg(long = "templates-dir", value_name = "DIR", global = true)]
    pub templates_dirs: Vec<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the template tree with ids.
    List,
    /// Create files from a template.
    New(NewArgs),
}

/// Arguments of `new`.
#[derive(clap::Args, Debug, Clone)]
pub struct NewArgs {
    /// Folder the files are created in.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Item name, e.g. `Widget.rs` (defaults to the template's default name).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Template id (as shown by `list`) or name; asked for when omitted.
    #[arg(short, long, value_name = "ID|NAME")]
    pub template: Option<String>,

    /// Overwrite files that already exist.
    #[arg(short, long)]
    pub force: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Never prompt; existing files are kept unless `--force` is given.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
